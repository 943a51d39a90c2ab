//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `asreg-adapters` crate provides implementations; the CLI provides the
//! coloured terminal `Console`.

use std::io;
use std::path::Path;

use crate::error::AsregResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `asreg_adapters::filesystem::LocalFilesystem` (production)
/// - `asreg_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> AsregResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> AsregResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> AsregResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// How a piece of console text should be presented.
///
/// Purely cosmetic: a plain-text console may ignore it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Plain,
    /// Section headers.
    Emphasis,
    /// The question part of a prompt.
    Prompt,
    /// Generated document previews.
    Preview,
    Success,
    Warning,
}

/// Port for operator-facing output.
///
/// Implemented by:
/// - `asreg_cli::output::OutputManager` (coloured terminal)
/// - `asreg_adapters::console::RecordingConsole` (testing)
pub trait Console {
    /// Write `text` followed by a newline.
    fn line(&self, tone: Tone, text: &str) -> io::Result<()>;

    /// Write `text` with no newline and flush, so a prompt stays on the
    /// same line as the operator's answer.
    fn inline(&self, tone: Tone, text: &str) -> io::Result<()>;
}
