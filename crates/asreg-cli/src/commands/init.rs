//! `asreg init`: write a default settings file.

use std::path::Path;

use tracing::info;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Create the settings file at `--config-file`, or the default location.
pub fn execute(
    args: InitArgs,
    config_file: Option<&Path>,
    output: OutputManager,
) -> CliResult<()> {
    output.info("Initialising settings...")?;

    let default_path = AppConfig::config_path();
    let config_path = config_file.unwrap_or(&default_path);

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Settings already exist at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    write_defaults(config_path)?;
    info!(path = %config_path.display(), "Settings file written");

    output.success(&format!("Settings created at {}", config_path.display()))?;
    Ok(())
}

fn write_defaults(path: &Path) -> CliResult<()> {
    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default settings: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create settings directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(path, toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write settings to '{}'", path.display()),
        source: e,
    })
}
