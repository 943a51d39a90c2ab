//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "asreg",
    bin_name = "asreg",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Interactive appservice registration generator",
    long_about = "asreg asks a short series of questions and writes a Matrix \
                  appservice registration file plus the matching appservice \
                  config file.",
    after_help = "EXAMPLES:\n\
        \x20 asreg generate\n\
        \x20 asreg generate --name slackbridge --bot slackbot --reserve-users\n\
        \x20 asreg check --config config.yaml\n\
        \x20 asreg completions bash > /usr/share/bash-completion/completions/asreg",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive registration wizard.
    #[command(
        visible_alias = "gen",
        about = "Generate a registration and config interactively",
        after_help = "EXAMPLES:\n\
            \x20 asreg generate\n\
            \x20 asreg generate --reserve-rooms --reserve-users\n\
            \x20 printf 'mybridge\\n\\n...' | asreg generate"
    )]
    Generate(GenerateArgs),

    /// Validate a generated config and the registration it points at.
    #[command(
        about = "Check generated files for consistency",
        after_help = "EXAMPLES:\n\
            \x20 asreg check\n\
            \x20 asreg check --config /etc/bridge/config.yaml --json"
    )]
    Check(CheckArgs),

    /// Initialise an asreg settings file.
    #[command(
        about = "Initialise settings",
        after_help = "EXAMPLES:\n\
            \x20 asreg init\n\
            \x20 asreg init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 asreg completions bash > ~/.local/share/bash-completion/completions/asreg\n\
            \x20 asreg completions zsh  > ~/.zfunc/_asreg\n\
            \x20 asreg completions fish > ~/.config/fish/completions/asreg.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the asreg settings.
    #[command(
        about = "Settings management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 asreg config get defaults.bot_username\n\
            \x20 asreg config list\n\
            \x20 asreg config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `asreg generate`.
///
/// Name and bot only seed the prompt defaults; the operator can still type
/// something else.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Default offered at the appservice name prompt.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Default appservice name"
    )]
    pub name: Option<String>,

    /// Default offered at the bot username prompt.
    #[arg(
        short = 'b',
        long = "bot",
        value_name = "USERNAME",
        help = "Default bot username"
    )]
    pub bot: Option<String>,

    /// Reserve an exclusive room alias namespace.
    #[arg(long = "reserve-rooms", help = "Reserve room aliases under a prefix")]
    pub reserve_rooms: bool,

    /// Reserve an exclusive user ID namespace.
    #[arg(long = "reserve-users", help = "Reserve user IDs under a prefix")]
    pub reserve_users: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `asreg check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Appservice config written by `asreg generate`.
    #[arg(
        long = "config",
        value_name = "FILE",
        default_value = "config.yaml",
        help = "Generated appservice config to check"
    )]
    pub config: PathBuf,

    /// Print the loaded documents and findings as JSON.
    #[arg(long = "json", help = "Emit a JSON report")]
    pub json: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `asreg init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing settings file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing settings")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `asreg completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `asreg config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a settings key.
    Get {
        /// Dotted key path, e.g. `defaults.bot_username`.
        key: String,
    },
    /// Print all settings.
    List,
    /// Print the path to the settings file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_defaults() {
        let cli = Cli::parse_from(["asreg", "generate"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.name.is_none());
        assert!(args.bot.is_none());
        assert!(!args.reserve_rooms);
        assert!(!args.reserve_users);
    }

    #[test]
    fn parse_generate_with_overrides() {
        let cli = Cli::parse_from([
            "asreg",
            "gen",
            "--name",
            "slackbridge",
            "-b",
            "slackbot",
            "--reserve-users",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.name.as_deref(), Some("slackbridge"));
        assert_eq!(args.bot.as_deref(), Some("slackbot"));
        assert!(args.reserve_users);
        assert!(!args.reserve_rooms);
    }

    #[test]
    fn check_defaults_to_config_yaml() {
        let cli = Cli::parse_from(["asreg", "check"]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(args.config, PathBuf::from("config.yaml"));
        assert!(!args.json);
    }

    #[test]
    fn settings_file_is_global() {
        let cli = Cli::parse_from(["asreg", "config", "path", "--config-file", "x.toml"]);
        assert_eq!(cli.global.config_file, Some(PathBuf::from("x.toml")));
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Path)
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["asreg", "--quiet", "--verbose", "check"]);
        assert!(result.is_err());
    }
}
