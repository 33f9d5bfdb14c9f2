// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use crate::{Marker, MarkerId};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// The highlight categories of the SQL formatter, in catalog order. The declaration
/// order is significant: it is the scanning order of [`crate::MarkerCatalog::sql_hilite`]
/// and [`Self::marker_id`] relies on it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumCount,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum HiliteKind {
    Keyword,
    Identifier,
    Function,
    Operator,
    Alias,
    Substitution,
    /// Reset to no style.
    None,
}

impl HiliteKind {
    /// The SGR escape sequence the SQL formatter emits for this kind.
    #[rustfmt::skip]
    #[must_use]
    pub const fn literal(self) -> &'static str {
        match self {
            HiliteKind::Keyword      => "\x1b[1m",
            HiliteKind::Identifier   => "\x1b[0;36m",
            HiliteKind::Function     => "\x1b[0;33m",
            HiliteKind::Operator     => "\x1b[1;33m",
            HiliteKind::Alias        => "\x1b[0;32m",
            HiliteKind::Substitution => "\x1b[1;36m",
            HiliteKind::None         => "\x1b[0m",
        }
    }

    #[must_use]
    pub fn marker(self) -> Marker { Marker::new(self, self.literal()) }

    /// Id of this kind in [`crate::MarkerCatalog::sql_hilite`]. Meaningless for any other
    /// catalog, use [`crate::MarkerCatalog::id_of`] for those.
    #[must_use]
    pub fn marker_id(self) -> MarkerId { MarkerId(self as usize) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkerCatalog;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    #[test_case(HiliteKind::Keyword, "keyword")]
    #[test_case(HiliteKind::Identifier, "identifier")]
    #[test_case(HiliteKind::Function, "function")]
    #[test_case(HiliteKind::Operator, "operator")]
    #[test_case(HiliteKind::Alias, "alias")]
    #[test_case(HiliteKind::Substitution, "substitution")]
    #[test_case(HiliteKind::None, "none")]
    fn test_name_round_trips(kind: HiliteKind, name: &str) {
        assert_eq!(kind.to_string(), name);
        assert_eq!(HiliteKind::from_str(name).unwrap(), kind);
    }

    #[test]
    fn test_literals_are_sgr_sequences() {
        for kind in HiliteKind::iter() {
            let literal = kind.literal();
            assert!(literal.starts_with(CSI), "{kind}");
            assert!(literal.ends_with(SGR), "{kind}");
        }
    }

    #[test]
    fn test_marker_id_matches_catalog_order() {
        let catalog = MarkerCatalog::sql_hilite();
        assert_eq!(catalog.len(), HiliteKind::COUNT);
        for kind in HiliteKind::iter() {
            assert_eq!(catalog.id_of(kind.as_ref()), Some(kind.marker_id()));
            assert_eq!(catalog.literal_of(kind.marker_id()), kind.literal());
        }
        assert_eq!(catalog.reset(), HiliteKind::None.marker_id());
    }
}
