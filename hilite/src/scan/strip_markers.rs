// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{MarkerCatalog, consume_markers};

/// The visible text of `annotated`, ie: with every marker in `catalog` removed. Order
/// and whitespace are preserved.
///
/// Unlike a generic ANSI stripper, only the markers in the catalog are removed. Any
/// other escape sequence is visible text as far as this crate is concerned.
///
/// This is a single pass. Text that only spells a marker once another marker inside it
/// is removed (eg: `"\x1b["` + keyword + `"1m"`) keeps that spelled marker.
#[must_use]
pub fn strip_markers(annotated: &str, catalog: &MarkerCatalog) -> String {
    let mut acc = String::with_capacity(annotated.len());
    let mut cursor = 0;

    loop {
        consume_markers(annotated, &mut cursor, catalog);
        let Some(ch) = char_at(annotated, cursor) else {
            return acc;
        };
        acc.push(ch);
        cursor += ch.len_utf8();
    }
}

/// Are `lhs` and `rhs` the same once the markers are removed from both?
#[must_use]
pub fn are_equal_with_markers_removed(
    lhs: &str,
    rhs: &str,
    catalog: &MarkerCatalog,
) -> bool {
    strip_markers(lhs, catalog) == strip_markers(rhs, catalog)
}

/// The `char` that starts at byte offset `cursor`, or [`None`] at the end of `text`.
pub(crate) fn char_at(text: &str, cursor: usize) -> Option<char> {
    text.get(cursor..).and_then(|rest| rest.chars().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HiliteKind, Marker};
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    fn lit(kind: HiliteKind) -> &'static str { kind.literal() }

    #[test]
    fn test_strip_markers_between_chars() {
        let text = [
            lit(HiliteKind::Keyword),
            "te",
            lit(HiliteKind::Alias),
            lit(HiliteKind::Identifier),
            "s",
            lit(HiliteKind::None),
            "t",
            lit(HiliteKind::Operator),
            lit(HiliteKind::Substitution),
            lit(HiliteKind::Function),
        ]
        .concat();
        assert_eq!(strip_markers(&text, &MarkerCatalog::sql_hilite()), "test");
    }

    #[test_case(""; "empty")]
    #[test_case("select * from table"; "ascii")]
    #[test_case("\n  sel\tect\n"; "whitespace")]
    #[test_case("héllo wörld 🦀"; "multibyte")]
    #[test_case("\x1b[1"; "partial marker")]
    fn test_strip_markers_identity_without_markers(text: &str) {
        let catalog = MarkerCatalog::sql_hilite();
        assert_eq!(strip_markers(text, &catalog), text);
    }

    #[test]
    fn test_strip_markers_is_idempotent() {
        let catalog = MarkerCatalog::sql_hilite();
        let text = format!("{}a b{}c", lit(HiliteKind::Keyword), lit(HiliteKind::None));
        let once = strip_markers(&text, &catalog);
        assert_eq!(strip_markers(&once, &catalog), once);
    }

    #[test]
    fn test_strip_markers_ignores_prepended_and_appended_markers() {
        let catalog = MarkerCatalog::sql_hilite();
        let text = "x + y";
        for kind in HiliteKind::iter() {
            let prepended = format!("{}{text}", kind.literal());
            let appended = format!("{text}{}", kind.literal());
            assert_eq!(strip_markers(&prepended, &catalog), text);
            assert_eq!(strip_markers(&appended, &catalog), text);
        }
    }

    #[test]
    fn test_strip_markers_only_removes_catalog_markers() {
        let catalog =
            MarkerCatalog::try_new([Marker::new("none", "</>")], "none").unwrap();
        assert_eq!(strip_markers("<kw>a</>", &catalog), "<kw>a");
    }

    #[test]
    fn test_strip_markers_agrees_with_ansi_stripper() {
        let catalog = MarkerCatalog::sql_hilite();
        let text = crate::keyword("SELECT ")
            + "* "
            + &crate::keyword("FROM ")
            + &crate::identifier("table");
        assert_eq!(
            strip_markers(&text, &catalog),
            strip_ansi_escapes::strip_str(&text)
        );
    }

    #[test]
    fn test_are_equal_with_markers_removed() {
        let catalog = MarkerCatalog::sql_hilite();
        assert!(are_equal_with_markers_removed(
            &crate::keyword("select"),
            "select",
            &catalog
        ));
        assert!(!are_equal_with_markers_removed(
            &crate::keyword("select"),
            "selec",
            &catalog
        ));
    }

    #[test]
    fn test_char_at() {
        assert_eq!(char_at("aé", 1), Some('é'));
        assert_eq!(char_at("aé", 3), None);
        // Not a char boundary.
        assert_eq!(char_at("aé", 2), None);
    }
}
