//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `asreg-adapters` (and the CLI's
//! terminal output) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Input) Ports**: where operator answers come from
//!   - `LineSource`: one raw line at a time
//!
//! - **Driven (Output) Ports**: where results go
//!   - `Console`: styled text for the operator
//!   - `Filesystem`: file operations

pub mod input;
pub mod output;

pub use input::LineSource;
pub use output::{Console, Filesystem, Tone};
