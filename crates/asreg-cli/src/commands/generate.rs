//! `asreg generate`: run the interactive wizard against the terminal.

use tracing::{debug, info};

use asreg_adapters::{LocalFilesystem, StdinSource};
use asreg_core::application::{
    CancelStage, GenerateRequest, GenerationOutcome, RegistrationGenerator,
};

use crate::{cli::GenerateArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Run the generator on stdin/stdout and the real filesystem.
///
/// Declining at a checkpoint is a normal exit, not an error.
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(args, &config);
    debug!(?request, "Generate request resolved");

    let mut generator = RegistrationGenerator::new(
        Box::new(StdinSource::stdin()),
        Box::new(output),
        Box::new(LocalFilesystem::new()),
    );

    match generator.generate(&request)? {
        GenerationOutcome::Completed(documents) => {
            info!(
                registration = %documents.registration_path,
                config = %documents.config_path,
                "Appservice files written"
            );
        }
        GenerationOutcome::Cancelled { stage } => match stage {
            CancelStage::Registration => info!("Cancelled before anything was written"),
            CancelStage::Config => info!("Cancelled after the registration was written"),
        },
    }

    Ok(())
}

/// Flags win over settings; a namespace switch is on if either side sets it.
fn build_request(args: GenerateArgs, config: &AppConfig) -> GenerateRequest {
    let defaults = &config.defaults;
    GenerateRequest::new(
        args.name.unwrap_or_else(|| defaults.appservice_name.clone()),
        args.bot.unwrap_or_else(|| defaults.bot_username.clone()),
    )
    .reserve_rooms(args.reserve_rooms || defaults.reserve_rooms)
    .reserve_users(args.reserve_users || defaults.reserve_users)
}
