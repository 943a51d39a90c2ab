//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition.

use clap::{Args, builder::FalseyValueParser};
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`). Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (saved files, cancellations)
    -vv     - Debug level (assembled URL, reserved namespaces)
    -vvv    - Trace level (every answered prompt)"
    )]
    pub verbose: u8,

    /// Suppress non-error output.
    ///
    /// Wizard prompts and previews are still shown; an interactive run is
    /// unusable without them.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Honoured when `NO_COLOR` is set to any value other than an empty or
    /// falsey one (`0`, `false`, `no`, `off`); see <https://no-color.org>.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Path to the asreg settings file (not the generated appservice config).
    #[arg(
        short = 'c',
        long = "config-file",
        global = true,
        value_name = "FILE",
        help = "Settings file path"
    )]
    pub config_file: Option<PathBuf>,
}
