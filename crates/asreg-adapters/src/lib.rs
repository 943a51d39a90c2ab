//! Infrastructure adapters for asreg.
//!
//! This crate implements the ports defined in `asreg-core::application::ports`.
//! It contains the filesystem and stdin I/O, plus in-memory doubles used by
//! the test suites.

pub mod console;
pub mod filesystem;
pub mod input;

// Re-export commonly used adapters
pub use console::RecordingConsole;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use input::{BufReadSource, ScriptedInput, StdinSource};
