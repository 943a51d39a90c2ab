//! `BufRead`-backed line source (stdin in production).

use std::io::{self, BufRead, StdinLock};

use asreg_core::application::ports::LineSource;

/// Reads lines from any buffered reader.
#[derive(Debug)]
pub struct BufReadSource<R> {
    reader: R,
}

/// The production source: a locked handle on the process's stdin.
pub type StdinSource = BufReadSource<StdinLock<'static>>;

impl<R: BufRead> BufReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl StdinSource {
    /// Lock stdin for the lifetime of the source.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for BufReadSource<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}
