//! Post-build resource hint processor.
//!
//! Runs a fixed pipeline over one built HTML document:
//!
//! ```text
//! load(input) → extract → add_hints → save(output)
//!                                       └── backs up the existing output first
//! ```
//!
//! Every failure is returned to the caller; the entry point decides how to exit.

mod error;
mod manifest;
mod rewrite;

pub use error::HintError;
pub use manifest::AssetManifest;
pub use rewrite::add_hints;

use std::{fs, path::Path};

use crate::config::HintsConfig;
use crate::logger::LogSink;
use crate::utils::plural::plural_count;

/// Rewrites one document according to a [`HintsConfig`].
pub struct Processor<'a, S: LogSink> {
    config: &'a HintsConfig,
    sink: S,
}

impl<'a, S: LogSink> Processor<'a, S> {
    pub fn new(config: &'a HintsConfig, sink: S) -> Self {
        Self { config, sink }
    }

    /// Run the whole pipeline and return what was found.
    pub fn run(&mut self) -> Result<AssetManifest, HintError> {
        self.sink.info("hints", "starting html optimization");

        let input = self.config.input_path();
        let html = self.load(&input)?;
        let manifest = self.extract(&html);

        self.sink.info("hints", "applying resource hints");
        let html = self.add_hints(&html, &manifest);

        let output = self.config.output_path();
        self.save(&html, &output)?;

        self.sink.success("hints", "optimization complete");
        Ok(manifest)
    }

    /// Read the whole document.
    ///
    /// Invalid UTF-8 sequences decode to U+FFFD instead of failing.
    pub fn load(&mut self, path: &Path) -> Result<String, HintError> {
        match fs::read(path) {
            Ok(bytes) => {
                self.sink.success("read", &format!("read {}", path.display()));
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Err(err) => {
                self.sink
                    .failure("read", &format!("failed to read {}: {err}", path.display()));
                Err(HintError::Read(path.to_path_buf(), err))
            }
        }
    }

    /// Collect local script, stylesheet and font references.
    pub fn extract(&mut self, html: &str) -> AssetManifest {
        let manifest = AssetManifest::extract(html);

        for (noun, paths) in [
            ("script", &manifest.scripts),
            ("style", &manifest.styles),
            ("font", &manifest.fonts),
        ] {
            self.sink
                .info("extract", &format!("found {}", plural_count(paths.len(), noun)));
            for path in paths {
                self.sink.detail("extract", &format!("  {noun}: {path}"));
            }
        }

        manifest
    }

    /// Apply the configured hints.
    pub fn add_hints(&mut self, html: &str, manifest: &AssetManifest) -> String {
        if let Some(script) = manifest.main_script(&self.config.hints.main_marker) {
            self.sink.detail("hints", &format!("main script: {script}"));
        }
        add_hints(html, manifest, &self.config.hints)
    }

    /// Back up any existing file at `path`, then overwrite it.
    pub fn save(&mut self, html: &str, path: &Path) -> Result<(), HintError> {
        if path.exists() {
            let backup = self.config.backup_path_for(path);
            if let Err(err) = fs::copy(path, &backup) {
                self.sink.failure(
                    "backup",
                    &format!("failed to back up {}: {err}", path.display()),
                );
                return Err(HintError::Write(backup, err));
            }
            self.sink.success(
                "backup",
                &format!("backed up {} to {}", path.display(), backup.display()),
            );
        }

        if let Err(err) = fs::write(path, html) {
            self.sink
                .failure("write", &format!("failed to write {}: {err}", path.display()));
            return Err(HintError::Write(path.to_path_buf(), err));
        }
        self.sink.success("write", &format!("wrote {}", path.display()));
        Ok(())
    }

    #[cfg(test)]
    pub fn into_sink(self) -> S {
        self.sink
    }
}
