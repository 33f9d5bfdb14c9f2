// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Build expected strings for [`crate::MarkerCatalog::sql_hilite`]. Each function wraps
//! the text in the marker for its kind, followed by the reset marker, which is exactly
//! what the SQL formatter emits for a single highlighted token.
//!
//! ```
//! use r3bl_hilite::{identifier, keyword};
//!
//! let expected = keyword("SELECT ") + "* " + &keyword("FROM ") + &identifier("table");
//! assert_eq!(
//!     expected,
//!     "\x1b[1mSELECT \x1b[0m* \x1b[1mFROM \x1b[0m\x1b[0;36mtable\x1b[0m"
//! );
//! ```

use crate::HiliteKind;

#[must_use]
pub fn hilite(text: &str, kind: HiliteKind) -> String {
    let start = kind.literal();
    let end = HiliteKind::None.literal();
    format!("{start}{text}{end}")
}

#[must_use]
pub fn keyword(text: &str) -> String { hilite(text, HiliteKind::Keyword) }

#[must_use]
pub fn identifier(text: &str) -> String { hilite(text, HiliteKind::Identifier) }

#[must_use]
pub fn alias(text: &str) -> String { hilite(text, HiliteKind::Alias) }

#[must_use]
pub fn op(text: &str) -> String { hilite(text, HiliteKind::Operator) }

#[must_use]
pub fn function(text: &str) -> String { hilite(text, HiliteKind::Function) }

#[must_use]
pub fn substitution(text: &str) -> String { hilite(text, HiliteKind::Substitution) }
