//! `asreg check`: load generated files back and report inconsistencies.

use serde_json::json;

use asreg_adapters::LocalFilesystem;
use asreg_core::{
    application::InspectService,
    domain::{Appservice, Finding},
};

use crate::{
    cli::CheckArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Check the config at `args.config` and the registration it points at.
///
/// Any finding makes the command fail after the report is printed.
pub fn execute(args: CheckArgs, output: OutputManager) -> CliResult<()> {
    let service = InspectService::new(Box::new(LocalFilesystem::new()));
    let (appservice, findings) = service.check(&args.config)?;

    if args.json {
        let report = serde_json::to_string_pretty(&json_report(&appservice, &findings))
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        output.raw(&report)?;
    } else {
        print_summary(&output, &appservice, &findings)?;
    }

    if findings.is_empty() {
        output.success(&format!("{} is consistent", args.config.display()))?;
        Ok(())
    } else {
        Err(CliError::CheckFailed {
            path: args.config,
            count: findings.len(),
        })
    }
}

fn print_summary(
    output: &OutputManager,
    appservice: &Appservice,
    findings: &[Finding],
) -> CliResult<()> {
    let registration = &appservice.registration;
    let config = &appservice.config;

    output.header(&format!("Appservice {}", registration.id))?;
    output.print(&format!("  callback url: {}", registration.url))?;
    output.print(&format!(
        "  bot:          @{}:{}",
        registration.sender_localpart, config.homeserver_domain
    ))?;
    output.print(&format!("  homeserver:   {}", config.homeserver_url))?;
    output.print(&format!("  registration: {}", config.registration_path))?;
    output.print(&format!(
        "  tls:          {}",
        if config.host.has_tls() { "enabled" } else { "disabled" }
    ))?;

    if registration.namespaces.is_empty() {
        output.print("  namespaces:   none")?;
    }
    for namespace in registration.namespaces.iter() {
        output.print(&format!("  namespace:    {}", namespace.regex))?;
    }

    for finding in findings {
        output.warning(&finding.to_string())?;
    }
    Ok(())
}

fn json_report(appservice: &Appservice, findings: &[Finding]) -> serde_json::Value {
    json!({
        "config": appservice.config,
        "registration": appservice.registration,
        "findings": findings
            .iter()
            .map(|f| json!({ "field": f.field, "message": f.message }))
            .collect::<Vec<_>>(),
    })
}
