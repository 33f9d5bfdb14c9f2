// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Everything that can be wrong with a [`crate::MarkerCatalog`]. All downstream behavior
/// depends on the catalog, so these are reported when it is built, never during a
/// comparison.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum CatalogErrorCouldNot {
    #[error("📭 Could not build an empty marker catalog")]
    #[diagnostic(
        code(r3bl_hilite::catalog::empty),
        help("Provide at least the reset marker")
    )]
    BuildEmptyCatalog,

    #[error("🕳️ Could not accept marker '{name}' with an empty literal")]
    #[diagnostic(
        code(r3bl_hilite::catalog::empty_literal),
        help("An empty literal matches everywhere, so scanning would never advance")
    )]
    AcceptEmptyLiteral { name: String },

    #[error("👯 Could not accept marker name '{name}' more than once")]
    #[diagnostic(code(r3bl_hilite::catalog::duplicate_name))]
    AcceptDuplicateName { name: String },

    #[error("👯 Could not accept literal {literal:?} for both '{first}' and '{second}'")]
    #[diagnostic(
        code(r3bl_hilite::catalog::duplicate_literal),
        help("Two styles with the same literal can't be told apart")
    )]
    AcceptDuplicateLiteral {
        literal: String,
        first: String,
        second: String,
    },

    #[error(
        "🔀 Could not accept '{prefix}' ({prefix_literal:?}) since it is a prefix of '{longer}' ({longer_literal:?})"
    )]
    #[diagnostic(
        code(r3bl_hilite::catalog::ambiguous_prefix),
        help("Scanning would depend on catalog order, change one of the literals")
    )]
    AcceptAmbiguousPrefix {
        prefix: String,
        prefix_literal: String,
        longer: String,
        longer_literal: String,
    },

    #[error("🔍 Could not find reset marker '{reset_name}' in the catalog")]
    #[diagnostic(
        code(r3bl_hilite::catalog::missing_reset),
        help("Exactly one marker must be designated as the reset (no style) marker")
    )]
    FindResetMarker { reset_name: String },
}
