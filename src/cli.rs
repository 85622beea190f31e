//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Add resource hints (preconnect, dns-prefetch, preload) to a built HTML page
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// HTML document to optimize (default: dist/index.html, relative to project root)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Where to write the optimized document (default: overwrite the input)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Suffix appended to the output file name for the backup copy
    #[arg(short, long)]
    pub backup_suffix: Option<String>,

    /// Substring marking the main script and stylesheets (e.g. `index-`)
    #[arg(short, long)]
    pub marker: Option<String>,

    /// Config file path (default: hints.toml, if present)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (lists every extracted asset)
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["asset-hints"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "asset-hints",
            "build/index.html",
            "-o",
            "build/out.html",
            "--backup-suffix",
            ".orig",
            "--marker",
            "main-",
            "-C",
            "site/hints.toml",
            "--color",
            "never",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("build/index.html")));
        assert_eq!(cli.output, Some(PathBuf::from("build/out.html")));
        assert_eq!(cli.backup_suffix.as_deref(), Some(".orig"));
        assert_eq!(cli.marker.as_deref(), Some("main-"));
        assert_eq!(cli.config, Some(PathBuf::from("site/hints.toml")));
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(cli.verbose);
    }
}
