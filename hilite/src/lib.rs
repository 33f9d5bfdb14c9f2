// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_hilite
//!
//! A test oracle for syntax highlighted text. A renderer (eg: a SQL formatter with
//! highlighting turned on) decorates plain text with inline style markers. Two renderings
//! can look identical in a terminal while differing byte for byte, because:
//!
//! 1. ASCII whitespace can be highlighted with any style, since it is invisible anyway.
//! 2. A style span may or may not be reset before the next style span starts.
//!
//! So the following two strings are considered equal:
//!
//! ```text
//! {keyword}foo{none}{operator}+
//! {keyword}foo{operator}+
//! ```
//!
//! [`are_equivalent`] compares an expected and an actual highlighted string in two
//! passes. First the markers are stripped from both sides and the plain text must match.
//! Then both strings are walked in lockstep, tracking the active style on each side, and
//! every character other than ASCII whitespace must carry the same style.
//!
//! The set of markers is not hard coded. It is a [`MarkerCatalog`] supplied by the caller.
//! [`MarkerCatalog::sql_hilite`] is the ready made catalog for the ANSI palette used by
//! the SQL highlighter, and [`keyword`], [`identifier`], etc. build expected strings for
//! it.
//!
//! # Example
//!
//! ```
//! use r3bl_hilite::{MarkerCatalog, are_equivalent, identifier, keyword};
//!
//! let catalog = MarkerCatalog::sql_hilite();
//! let expected = keyword("SELECT ") + "* " + &keyword("FROM ") + &identifier("table");
//!
//! // The renderer styled the trailing spaces differently, and skipped the final reset.
//! let actual = "\x1b[1mSELECT\x1b[0m * \x1b[1mFROM\x1b[0m \x1b[0;36mtable";
//!
//! assert!(are_equivalent(&expected, actual, &catalog));
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod catalog;
pub mod equivalence;
pub mod hilite_diff;
pub mod log;
pub mod scan;
pub mod sql_hilite;
#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use catalog::*;
pub use equivalence::*;
pub use log::*;
pub use scan::*;
pub use sql_hilite::*;
