// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod catalog_error;
pub mod marker;
pub mod marker_catalog;

// Re-export.
pub use catalog_error::*;
pub use marker::*;
pub use marker_catalog::*;
