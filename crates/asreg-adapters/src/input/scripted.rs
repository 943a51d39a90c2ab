//! Scripted line source for testing.

use std::collections::VecDeque;
use std::io;

use asreg_core::application::ports::LineSource;

/// Replays a fixed list of answers, one per prompt.
///
/// Each answer gets a `\n` appended, so `""` means "press enter".
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    fail_when_exhausted: bool,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: answers
                .into_iter()
                .map(|a| {
                    let mut line = a.into();
                    line.push('\n');
                    line
                })
                .collect(),
            fail_when_exhausted: false,
        }
    }

    /// Return an I/O error instead of end-of-input once the script runs out.
    pub fn fail_when_exhausted(mut self) -> Self {
        self.fail_when_exhausted = true;
        self
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        match self.lines.pop_front() {
            Some(line) => Ok(Some(line)),
            None if self.fail_when_exhausted => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "scripted input closed",
            )),
            None => Ok(None),
        }
    }
}
