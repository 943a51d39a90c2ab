use regex::Regex;

use crate::domain::entities::{Appservice, Finding};

/// Centralized domain validation.
///
/// All consistency rules for a loaded appservice live here, not scattered
/// across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn check_appservice(appservice: &Appservice) -> Vec<Finding> {
        let config = &appservice.config;
        let registration = &appservice.registration;
        let host = &config.host;
        let mut findings = Vec::new();

        if host.hostname.is_empty() {
            findings.push(Finding::new("host.hostname", "hostname is empty"));
        }
        if host.port == 0 {
            findings.push(Finding::new("host.port", "port 0 cannot be listened on"));
        }
        if host.tls_cert.is_some() != host.tls_key.is_some() {
            findings.push(Finding::new(
                "host.tls_cert",
                "tls_cert and tls_key must be set together",
            ));
        }

        let expected_suffix = format!("://{}:{}", host.hostname, host.port);
        if !registration.url.ends_with(&expected_suffix) {
            findings.push(Finding::new(
                "url",
                format!(
                    "registration url '{}' does not point at {}:{}",
                    registration.url, host.hostname, host.port
                ),
            ));
        }

        if config.homeserver_domain.is_empty() {
            findings.push(Finding::new(
                "homeserver_domain",
                "homeserver domain is empty",
            ));
        }

        if registration.sender_localpart.is_empty() {
            findings.push(Finding::new("sender_localpart", "bot username is empty"));
        }

        for namespace in registration.namespaces.iter() {
            if let Err(e) = Regex::new(&namespace.regex) {
                findings.push(Finding::new(
                    "namespaces",
                    format!("'{}' does not compile: {}", namespace.regex, e),
                ));
            }
        }

        findings
    }
}
