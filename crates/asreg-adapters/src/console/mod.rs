//! Console adapters.

mod recording;

pub use recording::{RecordedLine, RecordingConsole};
