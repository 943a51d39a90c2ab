//! A loaded config together with the registration it references.

use std::fmt;

use crate::domain::{
    entities::{config::Config, registration::Registration},
    validation::DomainValidator,
};

/// Config plus the registration found at `config.registration_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appservice {
    pub config: Config,
    pub registration: Registration,
}

impl Appservice {
    pub fn new(config: Config, registration: Registration) -> Self {
        Self {
            config,
            registration,
        }
    }

    /// Consistency problems between and within the two documents.
    ///
    /// An empty list means the pair is usable as-is.
    pub fn check(&self) -> Vec<Finding> {
        DomainValidator::check_appservice(self)
    }
}

/// One consistency problem found by [`Appservice::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Dotted path of the offending field, e.g. `host.port`.
    pub field: String,
    pub message: String,
}

impl Finding {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
