// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::MarkerArg;
use clap::{Args, Parser};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "hilite_diff")]
#[command(
    about = "🖍️ Check that two highlighted texts look the same, even if their style markers are placed differently"
)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nProvide the expected file, then the actual file. Without --marker, the ANSI palette of the SQL highlighter is used.\nUSAGE 📓:\n  hilite_diff [\x1b[32mexpected\x1b[0m] [\x1b[32mactual\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "expected", help = "Path to the file with the expected highlighted text")]
    pub expected_file_path: String,

    #[arg(name = "actual", help = "Path to the file with the actual highlighted text")]
    pub actual_file_path: String,

    #[command(flatten)]
    pub catalog_options: CatalogOption,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct CatalogOption {
    #[arg(
        long = "marker",
        short = 'm',
        value_name = "NAME=LITERAL",
        help = "A marker of the catalog, in scanning order. Repeat for each marker"
    )]
    pub markers: Vec<MarkerArg>,

    #[arg(
        long,
        short = 'r',
        default_value = "none",
        help = "Name of the marker that resets to no style"
    )]
    pub reset: String,

    #[arg(
        long,
        short = 'e',
        help = r"Decode \e \x1b \033 \n \t \\ in marker literals"
    )]
    pub escapes: bool,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `hilite_diff_log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_defaults() {
        let it = CLIArg::try_parse_from(["hilite_diff", "a.txt", "b.txt"]).unwrap();
        assert_eq!(it.expected_file_path, "a.txt");
        assert_eq!(it.actual_file_path, "b.txt");
        assert!(it.catalog_options.markers.is_empty());
        assert_eq!(it.catalog_options.reset, "none");
        assert!(!it.catalog_options.escapes);
        assert!(!it.global_options.enable_logging);
    }

    #[test]
    fn test_parse_markers() {
        let it = CLIArg::try_parse_from([
            "hilite_diff",
            "a.txt",
            "b.txt",
            "-m",
            "kw=<kw>",
            "--marker",
            "off=</>",
            "--reset",
            "off",
            "-e",
            "-l",
        ])
        .unwrap();
        assert_eq!(
            it.catalog_options.markers,
            vec![
                MarkerArg {
                    name: "kw".into(),
                    literal: "<kw>".into()
                },
                MarkerArg {
                    name: "off".into(),
                    literal: "</>".into()
                },
            ]
        );
        assert_eq!(it.catalog_options.reset, "off");
        assert!(it.catalog_options.escapes);
        assert!(it.global_options.enable_logging);
    }

    #[test]
    fn test_parse_rejects_marker_without_equals() {
        let result =
            CLIArg::try_parse_from(["hilite_diff", "a.txt", "b.txt", "-m", "keyword"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_actual_is_an_error() {
        assert!(CLIArg::try_parse_from(["hilite_diff", "a.txt"]).is_err());
    }
}
