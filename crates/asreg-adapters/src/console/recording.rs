//! Console that records output instead of printing it.

use std::{
    io,
    sync::{Arc, Mutex},
};

use asreg_core::application::ports::{Console, Tone};

/// One recorded write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLine {
    pub tone: Tone,
    pub text: String,
    /// `false` for `inline` writes.
    pub newline: bool,
}

/// Headless console for tests.
///
/// Clones share the same transcript.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    lines: Arc<Mutex<Vec<RecordedLine>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write so far, in order.
    pub fn lines(&self) -> Vec<RecordedLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Texts written with the given tone.
    pub fn texts(&self, tone: Tone) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|l| l.tone == tone)
            .map(|l| l.text)
            .collect()
    }

    /// Prompt questions asked so far.
    pub fn prompts(&self) -> Vec<String> {
        self.texts(Tone::Prompt)
    }

    /// The whole transcript as the operator would have seen it, uncoloured.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(&line.text);
            if line.newline {
                out.push('\n');
            }
        }
        out
    }

    fn record(&self, tone: Tone, text: &str, newline: bool) -> io::Result<()> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| io::Error::other("console transcript lock poisoned"))?;
        lines.push(RecordedLine {
            tone,
            text: text.to_owned(),
            newline,
        });
        Ok(())
    }
}

impl Console for RecordingConsole {
    fn line(&self, tone: Tone, text: &str) -> io::Result<()> {
        self.record(tone, text, true)
    }

    fn inline(&self, tone: Tone, text: &str) -> io::Result<()> {
        self.record(tone, text, false)
    }
}
