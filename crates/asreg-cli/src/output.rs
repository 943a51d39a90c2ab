//! Output management and formatting.
//!
//! [`OutputManager`] is both the CLI's own status printer and the terminal
//! [`Console`] the generator talks through.

use std::io::{self, IsTerminal};

use asreg_core::application::{Console, Tone};
use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded settings.
    ///
    /// Colour is off when either side asks for it, or when stdout is piped.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let no_color = args.no_color || config.output.no_color || !io::stdout().is_terminal();
        Self {
            quiet: args.quiet,
            no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.paint(Tone::Emphasis, text))
    }

    /// Machine-readable output; never styled, never suppressed.
    pub fn raw(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    // ── Styling ───────────────────────────────────────────────────────────

    fn paint(&self, tone: Tone, text: &str) -> String {
        if self.no_color {
            return text.to_owned();
        }
        match tone {
            Tone::Plain => text.to_owned(),
            Tone::Emphasis => text.cyan().bold().to_string(),
            Tone::Prompt => text.green().to_string(),
            Tone::Preview => text.yellow().to_string(),
            Tone::Success => text.green().bold().to_string(),
            Tone::Warning => text.yellow().bold().to_string(),
        }
    }
}

/// Wizard output is never suppressed by `--quiet`.
impl Console for OutputManager {
    fn line(&self, tone: Tone, text: &str) -> io::Result<()> {
        self.term.write_line(&self.paint(tone, text))
    }

    fn inline(&self, tone: Tone, text: &str) -> io::Result<()> {
        self.term.write_str(&self.paint(tone, text))?;
        self.term.flush()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
