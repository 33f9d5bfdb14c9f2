// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallstr::SmallString;
use std::fmt::{Display, Formatter, Result};

pub mod sizing {
    use super::SmallString;

    /// ANSI SGR markers like `\x1b[0;36m` and short names like `identifier` both fit
    /// without spilling to the heap.
    pub const DEFAULT_MARKER_STRING_STORAGE_SIZE: usize = 16;
    pub type InlineMarkerString = SmallString<[u8; DEFAULT_MARKER_STRING_STORAGE_SIZE]>;

    /// The SQL palette has 7 markers.
    pub const DEFAULT_CATALOG_SIZE: usize = 8;
}
use sizing::InlineMarkerString;

/// Position of a [`Marker`] in its [`crate::MarkerCatalog`]. Two markers are the same
/// style if and only if they have the same id in the same catalog. Comparing ids (instead
/// of literal text) is what "identity" means for the active style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub(crate) usize);

impl MarkerId {
    #[must_use]
    pub fn index(self) -> usize { self.0 }
}

impl Display for MarkerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "#{}", self.0) }
}

/// A sentinel substring that a renderer embeds in its output to start a style span, or
/// to reset to no style. The `name` is only used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
    pub name: InlineMarkerString,
    pub literal: InlineMarkerString,
}

impl Marker {
    #[must_use]
    pub fn new(name: impl AsRef<str>, literal: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().into(),
            literal: literal.as_ref().into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.literal.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.literal.is_empty() }

    /// Does this marker's literal start at byte offset `cursor` of `text`? An offset past
    /// the end never matches.
    #[must_use]
    pub fn is_at(&self, text: &str, cursor: usize) -> bool {
        text.as_bytes()
            .get(cursor..)
            .is_some_and(|rest| rest.starts_with(self.literal.as_bytes()))
    }
}

impl Display for Marker {
    /// The literal is usually made of escape sequences, so print it escaped.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}({:?})", self.name, self.literal.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("<kw>a", 0, true)]
    #[test_case("a<kw>", 1, true)]
    #[test_case("a<kw>", 0, false)]
    #[test_case("<kw", 0, false)]
    #[test_case("<kw>", 4, false)]
    #[test_case("<kw>", 99, false)]
    fn test_is_at(text: &str, cursor: usize, expected: bool) {
        let marker = Marker::new("keyword", "<kw>");
        assert_eq!(marker.is_at(text, cursor), expected);
    }

    #[test]
    fn test_display_escapes_literal() {
        let marker = Marker::new("keyword", "\x1b[1m");
        assert_eq!(marker.to_string(), r#"keyword("\u{1b}[1m")"#);
    }

    #[test]
    fn test_marker_len() {
        let marker = Marker::new("identifier", "\x1b[0;36m");
        assert_eq!(marker.len(), 7);
        assert!(!marker.is_empty());
    }
}
