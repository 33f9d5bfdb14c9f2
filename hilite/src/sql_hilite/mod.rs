// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod hilite_builders;
pub mod hilite_kind;

// Re-export.
pub use hilite_builders::*;
pub use hilite_kind::*;
