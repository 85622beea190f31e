//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - `LogSink` so the processor can report progress to the terminal or to a buffer
//!
//! # Example
//!
//! ```ignore
//! log!("read"; "loaded {} bytes", len);
//!
//! let mut sink = Terminal;
//! sink.success("write", "wrote dist/index.html");
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "hints" => prefix.bright_blue().bold().to_string(),
        "extract" => prefix.bright_cyan().bold().to_string(),
        "write" | "backup" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Log Sink
// ============================================================================

/// Outcome attached to a progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Plain progress notice.
    Info,
    /// Step completed (✓ prefix, green).
    Success,
    /// Step failed (✗ prefix, red).
    Failure,
}

/// Destination for the processor's progress lines.
pub trait LogSink {
    fn emit(&mut self, module: &str, level: Level, message: &str);

    fn info(&mut self, module: &str, message: &str) {
        self.emit(module, Level::Info, message);
    }

    fn success(&mut self, module: &str, message: &str) {
        self.emit(module, Level::Success, message);
    }

    fn failure(&mut self, module: &str, message: &str) {
        self.emit(module, Level::Failure, message);
    }

    /// Detail line, dropped unless --verbose is enabled.
    fn detail(&mut self, module: &str, message: &str) {
        if is_verbose() {
            self.emit(module, Level::Info, message);
        }
    }
}

/// Writes colored lines to stdout via [`log`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl LogSink for Terminal {
    fn emit(&mut self, module: &str, level: Level, message: &str) {
        match level {
            Level::Info => log(module, message),
            Level::Success => log(module, &format!("{} {message}", "✓".green())),
            Level::Failure => log(module, &format!("{} {message}", "✗".red())),
        }
    }
}

/// Collects uncolored lines in memory.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct Captured {
    pub lines: Vec<(Level, String)>,
}

#[cfg(test)]
impl Captured {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any captured line with `level` contains `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.lines
            .iter()
            .any(|(l, line)| *l == level && line.contains(needle))
    }
}

#[cfg(test)]
impl LogSink for Captured {
    fn emit(&mut self, module: &str, level: Level, message: &str) {
        self.lines.push((level, format!("[{module}] {message}")));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_prefixes_module() {
        let mut sink = Captured::new();
        sink.info("extract", "found 2 scripts");
        assert_eq!(sink.lines.len(), 1);
        assert_eq!(sink.lines[0], (Level::Info, "[extract] found 2 scripts".to_string()));
    }

    #[test]
    fn test_captured_levels() {
        let mut sink = Captured::new();
        sink.success("write", "wrote index.html");
        sink.failure("read", "failed to read index.html");

        assert!(sink.contains(Level::Success, "wrote"));
        assert!(sink.contains(Level::Failure, "failed to read"));
        assert!(!sink.contains(Level::Success, "failed"));
    }

    #[test]
    fn test_colorize_prefix_keeps_module_name() {
        assert!(colorize_prefix("hints", "hints").contains("[hints]"));
        assert!(colorize_prefix("Error", "error").contains("[Error]"));
    }
}
