// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "hilite_diff_log.txt";

/// Where log output goes, and at what level. Logging is **DISABLED** when the level
/// filter is [`LevelFilter::OFF`].
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

/// The `String` is the path of the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

/// Log to [`DEFAULT_LOG_FILE_NAME`] at the given level. Display output is left alone so
/// that it doesn't get mixed up with the report printed to the terminal.
impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            level_filter,
        }
    }
}
