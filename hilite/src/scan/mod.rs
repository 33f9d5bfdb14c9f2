// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod consume_markers;
pub mod strip_markers;

// Re-export.
pub use consume_markers::*;
pub use strip_markers::*;
