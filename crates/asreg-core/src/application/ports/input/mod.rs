//! Driven input port - where the generator's answers come from.

use std::io;

/// A blocking source of text lines.
///
/// Implemented by:
/// - `asreg_adapters::input::BufReadSource` (stdin in production)
/// - `asreg_adapters::input::ScriptedInput` (testing)
pub trait LineSource {
    /// Read the next line *including* its terminator.
    ///
    /// Returns `Ok(None)` at end of input. A final line with no `\n` is
    /// returned as-is; callers decide whether that is acceptable.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}
