//! Configuration management for `hints.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section    # [paths] and [hints]
//! ├── error      # ConfigError
//! └── mod.rs     # HintsConfig (this file)
//! ```
//!
//! The config file is optional. Without one every value falls back to its
//! default and relative paths resolve against the current directory.

mod error;
mod section;

pub use error::ConfigError;
pub use section::{HintsSection, PathsConfig};

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up in the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "hints.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing hints.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HintsConfig {
    /// Absolute path to the config file, if one was loaded (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Input, output and backup locations
    pub paths: PathsConfig,

    /// Which hints to emit
    pub hints: HintsSection,
}

impl HintsConfig {
    /// Load configuration from CLI arguments.
    ///
    /// An explicit `--config` must exist. Otherwise `hints.toml` in the
    /// current directory is used when present.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let config_path = match &cli.config {
            Some(path) => Some(cwd.join(path)),
            None => Some(cwd.join(DEFAULT_CONFIG_FILE)).filter(|path| path.exists()),
        };

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or(cwd, Path::to_path_buf);

        config.config_path = config_path;
        config.root = root;
        config.apply_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply CLI overrides on top of file values.
    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.paths.input, cli.input.as_ref());
        if cli.output.is_some() {
            self.paths.output = cli.output.clone();
        }
        Self::update_option(&mut self.paths.backup_suffix, cli.backup_suffix.as_ref());
        Self::update_option(&mut self.hints.main_marker, cli.marker.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // paths
    // ========================================================================

    /// Document to read.
    pub fn input_path(&self) -> PathBuf {
        self.root.join(&self.paths.input)
    }

    /// Document to write; the input path unless `output` is set.
    pub fn output_path(&self) -> PathBuf {
        match &self.paths.output {
            Some(output) => self.root.join(output),
            None => self.input_path(),
        }
    }

    /// Backup location for the configured output.
    pub fn backup_path(&self) -> PathBuf {
        self.backup_path_for(&self.output_path())
    }

    /// Sibling of `path` with `backup_suffix` appended to its file name.
    ///
    /// `dist/index.html` → `dist/index.html.backup`
    pub fn backup_path_for(&self, path: &Path) -> PathBuf {
        let mut name = path.file_name().map(OsString::from).unwrap_or_default();
        name.push(&self.paths.backup_suffix);
        path.with_file_name(name)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Reject values the processor cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.input.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "[paths] input must not be empty".to_string(),
            ));
        }
        if self.paths.backup_suffix.is_empty() {
            return Err(ConfigError::Validation(
                "[paths] backup_suffix must not be empty".to_string(),
            ));
        }
        if self.hints.main_marker.is_empty() {
            return Err(ConfigError::Validation(
                "[hints] main_marker must not be empty".to_string(),
            ));
        }
        if self.backup_path() == self.input_path() {
            return Err(ConfigError::Validation(format!(
                "backup path `{}` would overwrite the input document",
                self.backup_path().display()
            )));
        }
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================
