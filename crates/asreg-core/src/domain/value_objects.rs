//! Domain value helpers: ports, callback URLs, namespace patterns.
//!
//! Every wizard answer that needs more than "take the string" goes through
//! one of these functions, so parsing rules live in one place.

use regex::Regex;

use crate::domain::error::{DomainError, NamespaceKind};

/// The one protocol answer that triggers the TLS questions.
pub const SECURE_PROTOCOL: &str = "https";

/// Parse a listen port. Base-10, 0..=65535, no surrounding whitespace.
pub fn parse_port(input: &str) -> Result<u16, DomainError> {
    input.parse::<u16>().map_err(|e| DomainError::InvalidPort {
        input: input.to_owned(),
        reason: e.to_string(),
    })
}

/// `<protocol>://<hostname>:<port>`
pub fn callback_url(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{protocol}://{hostname}:{port}")
}

/// `#<prefix>.+:<domain>`
pub fn room_alias_pattern(prefix: &str, domain: &str) -> String {
    format!("#{prefix}.+:{domain}")
}

/// `@<prefix>.+:<domain>`
pub fn user_id_pattern(prefix: &str, domain: &str) -> String {
    format!("@{prefix}.+:{domain}")
}

/// Default namespace prefix for an appservice name: `_<name>_`.
pub fn default_namespace_prefix(name: &str) -> String {
    format!("_{name}_")
}

/// Compile a namespace pattern, tagging failures with the namespace kind.
pub fn compile_pattern(kind: NamespaceKind, pattern: &str) -> Result<Regex, DomainError> {
    Regex::new(pattern).map_err(|e| DomainError::InvalidNamespacePattern {
        kind,
        pattern: pattern.to_owned(),
        reason: e.to_string(),
    })
}
