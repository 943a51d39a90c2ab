//! Inspect Service - load and check previously generated documents.
//!
//! Mirrors how an appservice starts up: read the config, then follow its
//! `registration` field to the registration file.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{Appservice, Config, Finding, Registration},
    error::AsregResult,
};

/// Service for reading generated documents back.
pub struct InspectService {
    filesystem: Box<dyn Filesystem>,
}

impl InspectService {
    /// Create a new inspect service.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Load the config at `config_path` and the registration it references.
    ///
    /// A relative registration path is resolved against the current
    /// directory, as the appservice itself would.
    #[instrument(skip(self), fields(config = %config_path.display()))]
    pub fn load(&self, config_path: &Path) -> AsregResult<Appservice> {
        let config = Config::from_yaml(&self.read(config_path)?)?;
        debug!(registration = %config.registration_path, "Config loaded");

        let registration_path = PathBuf::from(&config.registration_path);
        let registration = Registration::from_yaml(&self.read(&registration_path)?)?;

        Ok(Appservice::new(config, registration))
    }

    /// Load and run the consistency checks.
    pub fn check(&self, config_path: &Path) -> AsregResult<(Appservice, Vec<Finding>)> {
        let appservice = self.load(config_path)?;
        let findings = appservice.check();
        debug!(findings = findings.len(), "Appservice checked");
        Ok((appservice, findings))
    }

    fn read(&self, path: &Path) -> AsregResult<String> {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        self.filesystem.read_to_string(path)
    }
}
