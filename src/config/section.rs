//! `[paths]` and `[hints]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! input = "dist/index.html"   # Built document (relative to project root)
//! output = "dist/index.html"  # Defaults to `input`
//! backup_suffix = ".backup"   # Backup is written next to the output file
//!
//! [hints]
//! main_marker = "index-"      # Marks the entry script/stylesheet in hashed build output
//! preconnect = ["/fonts/", "https://fonts.googleapis.com", "https://fonts.gstatic.com"]
//! dns_prefetch = ["https://fonts.googleapis.com", "https://fonts.gstatic.com"]
//! font_display = true         # Inject the `font-display: swap` style block
//! ```

use serde::Deserialize;
use std::path::PathBuf;

/// `[paths]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Document to read.
    pub input: PathBuf,

    /// Document to write. `None` overwrites `input`.
    pub output: Option<PathBuf>,

    /// Appended to the output file name to form the backup path.
    pub backup_suffix: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("dist/index.html"),
            output: None,
            backup_suffix: ".backup".to_string(),
        }
    }
}

/// `[hints]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HintsSection {
    /// Substring identifying the main script and stylesheets.
    pub main_marker: String,

    /// Origins emitted as `<link rel="preconnect" ... crossorigin />`.
    pub preconnect: Vec<String>,

    /// Origins emitted as `<link rel="dns-prefetch" ... />`.
    pub dns_prefetch: Vec<String>,

    /// Inject the default `@font-face { font-display: swap; }` block.
    pub font_display: bool,
}

impl Default for HintsSection {
    fn default() -> Self {
        Self {
            main_marker: "index-".to_string(),
            preconnect: vec![
                "/fonts/".to_string(),
                "https://fonts.googleapis.com".to_string(),
                "https://fonts.gstatic.com".to_string(),
            ],
            dns_prefetch: vec![
                "https://fonts.googleapis.com".to_string(),
                "https://fonts.gstatic.com".to_string(),
            ],
            font_display: true,
        }
    }
}
