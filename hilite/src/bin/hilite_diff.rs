// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_hilite::{hilite_diff::{CLIArg, ISSUES_URL, run_app,
                                setup_default_miette_global_report_handler},
                  try_initialize_logging_global};

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let result = run_app(&cli_arg);

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...", is_ok = result.is_ok());
    });

    result
}
