// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod divergence;
pub mod tolerant_check;

// Re-export.
pub use divergence::*;
pub use tolerant_check::*;
