// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Where and why an actual highlighted string stopped being equivalent to the expected
/// one. `char_index` always counts `char`s of the plain (marker free) text, so it points
/// at the same character on both sides.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum Divergence {
    #[error(
        "📝 Plain text differs at char {char_index}\n  expected: {expected_plain:?}\n  actual:   {actual_plain:?}"
    )]
    #[diagnostic(
        code(r3bl_hilite::plain_text_mismatch),
        help("The renderer produced different text, marker placement can't fix that")
    )]
    PlainTextMismatch {
        char_index: usize,
        expected_plain: String,
        actual_plain: String,
    },

    #[error(
        "🎨 Style differs at char {char_index} ({ch:?}): expected '{expected_style}', actual '{actual_style}'"
    )]
    #[diagnostic(
        code(r3bl_hilite::style_mismatch),
        help("Only whitespace may carry a different style on each side")
    )]
    StyleMismatch {
        char_index: usize,
        ch: char,
        expected_style: String,
        actual_style: String,
    },

    #[error("💥 Walk lost alignment at char {char_index} after the plain text matched")]
    #[diagnostic(
        code(r3bl_hilite::internal_inconsistency),
        help("This is a bug in the scanner or the catalog, not a difference in the texts")
    )]
    InternalInconsistency { char_index: usize },
}

impl Divergence {
    #[must_use]
    pub fn char_index(&self) -> usize {
        match self {
            Divergence::PlainTextMismatch { char_index, .. }
            | Divergence::StyleMismatch { char_index, .. }
            | Divergence::InternalInconsistency { char_index } => *char_index,
        }
    }
}

/// Index of the first `char` where `lhs` and `rhs` differ. When one is a prefix of the
/// other, this is the length (in `char`s) of the shorter one. Equal strings return their
/// length.
#[must_use]
pub fn first_mismatch_char_index(lhs: &str, rhs: &str) -> usize {
    lhs.chars()
        .zip(rhs.chars())
        .take_while(|(lhs_ch, rhs_ch)| lhs_ch == rhs_ch)
        .count()
}
