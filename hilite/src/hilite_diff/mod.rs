// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The `hilite_diff` command line tool. It reads an expected and an actual file, and
//! reports the first [`crate::Divergence`] between them, if any.

// Attach sources.
pub mod app;
pub mod clap_config;
pub mod marker_arg;
pub mod miette_setup_global_report_handler;

// Re-export.
pub use app::*;
pub use clap_config::*;
pub use marker_arg::*;
pub use miette_setup_global_report_handler::*;
