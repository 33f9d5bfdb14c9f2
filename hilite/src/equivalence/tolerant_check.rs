// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Highlighted strings can't be compared symbol by symbol, since a renderer has some
//! freedom in where it puts markers:
//!
//! 1. ASCII whitespace can be highlighted with any style.
//! 2. A style may or may not be reset with the reset marker before the next style starts.
//!    So these are equal:
//!    - `{keyword}foo{none}{operator}+`
//!    - `{keyword}foo{operator}+`
//!
//! Styles are flat. The active style is simply the last marker seen, there is no stack
//! of styles to push to or pop from.

use crate::{Divergence, MarkerCatalog, MarkerId, consume_markers,
            first_mismatch_char_index, scan::strip_markers::char_at, strip_markers};

/// Is `actual` the same highlighted text as `expected`? See [`check_equivalence`] for
/// the rules.
#[must_use]
pub fn are_equivalent(expected: &str, actual: &str, catalog: &MarkerCatalog) -> bool {
    check_equivalence(expected, actual, catalog).is_ok()
}

/// Compare `expected` and `actual` and report the first [`Divergence`], if any.
///
/// 1. Remove the markers from both sides. If the plain text differs, they are not
///    equivalent, regardless of the markers.
/// 2. Walk both sides one `char` at a time. Before each `char`, the markers in front of
///    it update that side's active style (which starts as the reset marker). A
///    `char` must have the same active style on both sides, unless
///    [`is_style_exempt`] says it is ASCII whitespace.
///
/// # Errors
///
/// Returns the first [`Divergence`] found. Errors are the normal "not equivalent"
/// outcome of this function, not a failure to run it.
#[tracing::instrument(skip_all, fields(expected_len = expected.len(), actual_len = actual.len()))]
pub fn check_equivalence(
    expected: &str,
    actual: &str,
    catalog: &MarkerCatalog,
) -> Result<(), Divergence> {
    // Fail fast on different text. After this, the walk can assume that both sides have
    // the same chars in the same order.
    let expected_plain = strip_markers(expected, catalog);
    let actual_plain = strip_markers(actual, catalog);
    if expected_plain != actual_plain {
        let char_index = first_mismatch_char_index(&expected_plain, &actual_plain);
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📝 plain text mismatch",
            char_index,
            expected_plain = ?expected_plain,
            actual_plain = ?actual_plain
        );
        return Err(Divergence::PlainTextMismatch {
            char_index,
            expected_plain,
            actual_plain,
        });
    }

    let mut expected_side = ScanCursor::new(expected, catalog);
    let mut actual_side = ScanCursor::new(actual, catalog);
    let mut char_index = 0;

    loop {
        expected_side.consume_markers(catalog);
        actual_side.consume_markers(catalog);

        match (expected_side.peek(), actual_side.peek()) {
            (None, None) => return Ok(()),
            (Some(expected_ch), Some(actual_ch)) if expected_ch == actual_ch => {
                if !is_style_exempt(expected_ch)
                    && expected_side.active_style != actual_side.active_style
                {
                    let expected_style = catalog.name_of(expected_side.active_style);
                    let actual_style = catalog.name_of(actual_side.active_style);
                    tracing::debug!(
                        message = "🎨 style mismatch",
                        char_index,
                        ch = ?expected_ch,
                        expected_style,
                        actual_style
                    );
                    return Err(Divergence::StyleMismatch {
                        char_index,
                        ch: expected_ch,
                        expected_style: expected_style.to_string(),
                        actual_style: actual_style.to_string(),
                    });
                }
                expected_side.advance(expected_ch);
                actual_side.advance(actual_ch);
                char_index += 1;
            }
            // Unreachable. Stripping and walking skip markers with the same
            // `consume_markers`, so equal plain text means both sides yield the same
            // chars in the same order.
            (expected_ch, actual_ch) => {
                tracing::warn!(
                    message = "💥 walk lost alignment after plain text matched",
                    char_index,
                    expected_ch = ?expected_ch,
                    actual_ch = ?actual_ch
                );
                return Err(Divergence::InternalInconsistency { char_index });
            }
        }
    }
}

/// The chars whose style is never compared: ASCII space, `\t`, `\n`, `\v`, `\f` and
/// `\r`. Any other char, including Unicode spaces like NBSP, must carry the same style on
/// both sides.
#[must_use]
pub fn is_style_exempt(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// One side of the lockstep walk.
#[derive(Debug)]
struct ScanCursor<'a> {
    text: &'a str,
    /// Byte offset into `text`, always on a `char` boundary.
    cursor: usize,
    active_style: MarkerId,
}

impl<'a> ScanCursor<'a> {
    fn new(text: &'a str, catalog: &MarkerCatalog) -> Self {
        Self {
            text,
            cursor: 0,
            active_style: catalog.reset(),
        }
    }

    /// A run of zero markers leaves the active style alone.
    fn consume_markers(&mut self, catalog: &MarkerCatalog) {
        if let Some(last) = consume_markers(self.text, &mut self.cursor, catalog) {
            self.active_style = last;
        }
    }

    fn peek(&self) -> Option<char> { char_at(self.text, self.cursor) }

    fn advance(&mut self, ch: char) { self.cursor += ch.len_utf8(); }
}
