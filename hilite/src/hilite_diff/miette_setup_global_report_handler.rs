// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The report of a [`crate::Divergence`] or a [`crate::CatalogErrorCouldNot`] is what a
//! user of `hilite_diff` reads when texts are not equivalent, so it is rendered with the
//! graphical handler.
//!
//! - Miette allows customization of how the
//!   [`Report`](https://docs.rs/miette/latest/miette/struct.Report.html) is displayed when
//!   the top-level miette handler in `main() -> miette::Result<_>` is activated. This hook
//!   is only activated at the time that the error is displayed, not when it is
//!   registered, it is lazy.
//! - [`miette::set_hook`] registers the handler.

use miette::MietteHandlerOpts;
use tracing::debug;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width is calculated just at the time of the global error handler being
/// used. So if texts are equivalent, the terminal width is never calculated.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = usize::from(
                crossterm::terminal::size()
                    .map(|(columns, _rows)| columns)
                    .unwrap_or(80),
            );
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
