// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::TracingConfig;
use tracing::dispatcher::DefaultGuard;

/// Global subscriber for the whole process. Logging is **DISABLED** by **default**.
///
/// If you don't call this function w/ a value other than
/// [`tracing_core::LevelFilter::OFF`], then logging won't be enabled. It won't matter if
/// you directly use the [`tracing::info!`], [`tracing::debug!`], etc. macros.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber was
/// already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, which you can assign differently to different threads, eg
/// in different tests. Logging stops when the returned guard is dropped.
///
/// Returns `None` when the level filter is [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
