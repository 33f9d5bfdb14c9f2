// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CLIArg, CatalogOption};
use crate::{MarkerCatalog, check_equivalence};
use miette::{Context, IntoDiagnostic};

pub const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

/// Compare the two files named in `cli_arg`.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog options don't describe a valid [`MarkerCatalog`]
/// - Either file can't be read
/// - The files are not equivalent, in which case the error is the
///   [`crate::Divergence`]
pub fn run_app(cli_arg: &CLIArg) -> miette::Result<()> {
    let catalog = try_build_catalog(&cli_arg.catalog_options)?;

    let expected = read_file(&cli_arg.expected_file_path)?;
    let actual = read_file(&cli_arg.actual_file_path)?;

    check_equivalence(&expected, &actual, &catalog)?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "✅ equivalent",
        expected = %cli_arg.expected_file_path,
        actual = %cli_arg.actual_file_path
    );
    println!("✅ equivalent");

    Ok(())
}

/// Without any `--marker`, the SQL palette is used and the other catalog options are
/// ignored.
///
/// # Errors
///
/// Returns an error if a marker literal can't be decoded, or the markers don't make a
/// valid catalog.
pub fn try_build_catalog(catalog_options: &CatalogOption) -> miette::Result<MarkerCatalog> {
    if catalog_options.markers.is_empty() {
        return Ok(MarkerCatalog::sql_hilite());
    }

    let markers = catalog_options
        .markers
        .iter()
        .map(|arg| arg.try_into_marker(catalog_options.escapes))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|message| miette::miette!(message))?;

    Ok(MarkerCatalog::try_new(markers, &catalog_options.reset)?)
}

fn read_file(path: &str) -> miette::Result<String> {
    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("📂 Could not read file: '{path}'"))
}
