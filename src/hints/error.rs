//! Processor error types.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline failures. Nothing is retried.
#[derive(Debug, Error)]
pub enum HintError {
    /// Input document missing or unreadable.
    #[error("failed to read `{}`", .0.display())]
    Read(PathBuf, #[source] std::io::Error),

    /// Backup copy or output write failed.
    #[error("failed to write `{}`", .0.display())]
    Write(PathBuf, #[source] std::io::Error),
}
