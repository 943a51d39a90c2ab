//! Application settings.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns settings; the core crate never sees them. These are asreg's
//! own settings, unrelated to the appservice config the wizard writes.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`ASREG__DEFAULTS__BOT_USERNAME=...`)
//! 3. Settings file (`--config-file`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "ASREG";
const ENV_SEPARATOR: &str = "__";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seeds for the generator's first prompts.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub appservice_name: String,
    pub bot_username: String,
    pub reserve_rooms: bool,
    pub reserve_users: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                appservice_name: String::new(),
                bot_username: String::new(),
                reserve_rooms: false,
                reserve_users: false,
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load settings, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&path, config_file.is_some())
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to seed default settings")?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read settings from '{}'", path.display()))?;

        settings
            .try_deserialize()
            .context("Settings have an unexpected shape")
    }

    /// Path to the default settings file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.asreg.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "asreg", "asreg")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".asreg.toml"))
    }
}
