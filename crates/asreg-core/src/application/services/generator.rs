//! Registration Generator - the interactive wizard.
//!
//! Walks the operator through a fixed sequence of questions and builds the
//! registration and config documents from the answers:
//!
//! 1. Identity: appservice name, bot username
//! 2. Listener: protocol, TLS paths (https only), hostname, port
//! 3. Homeserver: URL, domain, log directory
//! 4. Namespaces (only when reservation was requested)
//! 5. Preview, confirm, and save the registration
//! 6. Preview, confirm, and save the config
//!
//! Any error aborts the run immediately; there is no retry except for a
//! room-alias pattern that fails to compile. A negative answer at either
//! checkpoint is a soft exit reported as [`GenerationOutcome::Cancelled`].

use std::path::Path;

use regex::Regex;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{Console, Filesystem, LineSource, Tone},
        services::prompt::{is_affirmative, output_failed, read_string},
    },
    domain::{
        Config, DomainError, HostConfig, NamespaceKind, Namespaces, Registration, SECURE_PROTOCOL,
        callback_url, compile_pattern, default_namespace_prefix, parse_port, room_alias_pattern,
        user_id_pattern,
    },
    error::AsregResult,
};

/// Compiles a generated namespace pattern.
pub type PatternCompiler = fn(NamespaceKind, &str) -> Result<Regex, DomainError>;

/// Initial defaults and namespace switches for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub appservice_name: String,
    pub bot_username: String,
    pub reserve_rooms: bool,
    pub reserve_users: bool,
}

impl GenerateRequest {
    pub fn new(appservice_name: impl Into<String>, bot_username: impl Into<String>) -> Self {
        Self {
            appservice_name: appservice_name.into(),
            bot_username: bot_username.into(),
            reserve_rooms: false,
            reserve_users: false,
        }
    }

    pub fn reserve_rooms(mut self, reserve: bool) -> Self {
        self.reserve_rooms = reserve;
        self
    }

    pub fn reserve_users(mut self, reserve: bool) -> Self {
        self.reserve_users = reserve;
        self
    }

    fn wants_namespaces(&self) -> bool {
        self.reserve_rooms || self.reserve_users
    }
}

/// Which checkpoint the operator declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelStage {
    /// Nothing was written.
    Registration,
    /// The registration file was already written.
    Config,
}

/// Everything a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocuments {
    pub registration: Registration,
    pub registration_path: String,
    pub config: Config,
    pub config_path: String,
}

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Completed(Box<GeneratedDocuments>),
    Cancelled { stage: CancelStage },
}

const CONFIRM_DEFAULT: &str = "yes";

/// Interactive generator for appservice registration + config.
pub struct RegistrationGenerator {
    input: Box<dyn LineSource>,
    console: Box<dyn Console>,
    filesystem: Box<dyn Filesystem>,
    compile: PatternCompiler,
}

impl RegistrationGenerator {
    /// Create a generator reading answers from `input`, talking to the
    /// operator through `console`, and saving through `filesystem`.
    pub fn new(
        input: Box<dyn LineSource>,
        console: Box<dyn Console>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            input,
            console,
            filesystem,
            compile: compile_pattern,
        }
    }

    /// Replace the namespace pattern compiler (defaults to `Regex::new`).
    pub fn with_pattern_compiler(mut self, compile: PatternCompiler) -> Self {
        self.compile = compile;
        self
    }

    /// Run the wizard to completion, cancellation, or the first error.
    #[instrument(
        skip_all,
        fields(
            name = %request.appservice_name,
            reserve_rooms = request.reserve_rooms,
            reserve_users = request.reserve_users
        )
    )]
    pub fn generate(&mut self, request: &GenerateRequest) -> AsregResult<GenerationOutcome> {
        self.say(
            Tone::Emphasis,
            "Generating appservice config and registration.",
        )?;

        let name = self.ask("Enter name for appservice", &request.appservice_name)?;
        let mut registration = Registration::new(&name);
        let mut config = Config::new();
        registration.rate_limited = false;

        registration.sender_localpart = self.ask("Enter bot username", &request.bot_username)?;

        let protocol = self.ask("Enter appservice host protocol", "http")?;
        if protocol == SECURE_PROTOCOL {
            self.collect_tls(&mut config.host)?;
        }

        let hostname = self.ask("Enter appservice hostname", "localhost")?;
        let port = parse_port(&self.ask("Enter appservice host port", "29313")?)?;
        registration.url = callback_url(&protocol, &hostname, port);
        config.host.hostname = hostname;
        config.host.port = port;
        debug!(url = %registration.url, "Callback URL assembled");

        config.homeserver_url = self.ask("Enter homeserver address", "http://localhost:8008")?;
        config.homeserver_domain = self.ask("Enter homeserver domain", "example.com")?;
        config.log_config.directory = self.ask("Enter directory for logs", "./logs")?;
        self.ensure_log_directory(&config.log_config.directory);

        if request.wants_namespaces() {
            self.reserve_namespaces(
                request,
                &name,
                &config.homeserver_domain,
                &mut registration.namespaces,
            )?;
        }

        // ── Checkpoint 1: registration ─────────────────────────────────────
        self.say(Tone::Emphasis, "\n==== Registration generated ====")?;
        let registration_yaml = registration.to_yaml()?;
        self.say(Tone::Preview, &registration_yaml)?;

        if !self.confirm("Does the registration look OK [yes/no]?")? {
            return self.cancel(CancelStage::Registration);
        }

        let registration_path =
            self.ask("Where should the registration be saved?", "registration.yaml")?;
        self.filesystem
            .write_file(Path::new(&registration_path), &registration_yaml)?;
        info!(path = %registration_path, "Registration saved");
        self.say(Tone::Success, "Registration saved.")?;

        config.registration_path = registration_path.clone();

        // ── Checkpoint 2: config ───────────────────────────────────────────
        self.say(Tone::Emphasis, "\n======= Config generated =======")?;
        let config_yaml = config.to_yaml()?;
        self.say(Tone::Preview, &config_yaml)?;

        if !self.confirm("Does the config look OK [yes/no]?")? {
            return self.cancel(CancelStage::Config);
        }

        let config_path = self.ask("Where should the config be saved?", "config.yaml")?;
        self.filesystem
            .write_file(Path::new(&config_path), &config_yaml)?;
        info!(path = %config_path, "Config saved");
        self.say(Tone::Success, "Config saved.")?;

        Ok(GenerationOutcome::Completed(Box::new(GeneratedDocuments {
            registration,
            registration_path,
            config,
            config_path,
        })))
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    /// Only an exact (case-insensitive) `yes` enables TLS; `y` does not.
    fn collect_tls(&mut self, host: &mut HostConfig) -> AsregResult<()> {
        let answer = self.ask("Do you want the appservice to handle SSL [yes/no]?", "yes")?;
        if answer.to_lowercase() != "yes" {
            debug!("TLS termination left to a reverse proxy");
            return Ok(());
        }

        host.tls_cert = Some(self.ask("Enter path to SSL certificate", "appservice.crt")?);
        host.tls_key = Some(self.ask("Enter path to SSL key", "appservice.key")?);
        Ok(())
    }

    /// Creation failure is logged and otherwise ignored.
    fn ensure_log_directory(&self, directory: &str) {
        if let Err(e) = self.filesystem.create_dir_all(Path::new(directory)) {
            warn!(directory, error = %e, "Could not create log directory, continuing");
        }
    }

    /// Ask for a prefix until the room-alias pattern compiles.
    ///
    /// A room-alias pattern that fails to compile re-prompts; a user-ID
    /// pattern that fails aborts the run.
    fn reserve_namespaces(
        &mut self,
        request: &GenerateRequest,
        name: &str,
        domain: &str,
        namespaces: &mut Namespaces,
    ) -> AsregResult<()> {
        let default_prefix = default_namespace_prefix(name);

        loop {
            let prefix = self.ask("Enter namespace prefix", &default_prefix)?;

            let room_pattern = room_alias_pattern(&prefix, domain);
            let room_regex = match (self.compile)(NamespaceKind::RoomAlias, &room_pattern) {
                Ok(regex) => regex,
                Err(e) => {
                    warn!(pattern = %room_pattern, "Room alias pattern rejected, asking again");
                    self.say(Tone::Warning, &e.to_string())?;
                    continue;
                }
            };

            let user_pattern = user_id_pattern(&prefix, domain);
            let user_regex = (self.compile)(NamespaceKind::UserId, &user_pattern)?;

            if request.reserve_rooms {
                namespaces.register_room_aliases(&room_regex, true);
            }
            if request.reserve_users {
                namespaces.register_user_ids(&user_regex, true);
            }
            debug!(prefix = %prefix, "Namespaces reserved");
            return Ok(());
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ask(&mut self, message: &str, default: &str) -> AsregResult<String> {
        read_string(self.input.as_mut(), self.console.as_ref(), message, default)
    }

    fn confirm(&mut self, message: &str) -> AsregResult<bool> {
        let answer = self.ask(message, CONFIRM_DEFAULT)?;
        Ok(is_affirmative(&answer))
    }

    fn say(&self, tone: Tone, text: &str) -> AsregResult<()> {
        self.console.line(tone, text).map_err(output_failed)?;
        Ok(())
    }

    fn cancel(&self, stage: CancelStage) -> AsregResult<GenerationOutcome> {
        info!(?stage, "Generation cancelled by operator");
        self.say(Tone::Plain, "Cancelling generation.")?;
        Ok(GenerationOutcome::Cancelled { stage })
    }
}
