//! Line input adapters.

mod buffered;
mod scripted;

pub use buffered::{BufReadSource, StdinSource};
pub use scripted::ScriptedInput;
