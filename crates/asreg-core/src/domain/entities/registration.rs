//! The appservice registration document.
//!
//! This is what the homeserver reads to learn which callback URL to hit,
//! which tokens authenticate each side, and which room aliases / user IDs
//! the appservice claims.

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Appservice registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub url: String,
    #[serde(rename = "as_token")]
    pub app_token: String,
    #[serde(rename = "hs_token")]
    pub server_token: String,
    pub sender_localpart: String,
    pub rate_limited: bool,
    #[serde(default)]
    pub namespaces: Namespaces,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protocols: Vec<String>,
}

impl Registration {
    /// Create a registration for the named appservice with fresh tokens.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: name.into(),
            url: String::new(),
            app_token: generate_token(),
            server_token: generate_token(),
            sender_localpart: String::new(),
            rate_limited: true,
            namespaces: Namespaces::default(),
            protocols: Vec::new(),
        }
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String, DomainError> {
        serde_yaml::to_string(self).map_err(|e| DomainError::SerializationFailed {
            document: "registration",
            reason: e.to_string(),
        })
    }

    /// Parse from YAML.
    pub fn from_yaml(text: &str) -> Result<Self, DomainError> {
        serde_yaml::from_str(text).map_err(|e| DomainError::ParseFailed {
            document: "registration",
            reason: e.to_string(),
        })
    }
}

/// Namespace reservations, grouped by what they match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespaces {
    #[serde(rename = "users", default, skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<Namespace>,
    #[serde(rename = "aliases", default, skip_serializing_if = "Vec::is_empty")]
    pub room_aliases: Vec<Namespace>,
    #[serde(rename = "rooms", default, skip_serializing_if = "Vec::is_empty")]
    pub room_ids: Vec<Namespace>,
}

impl Namespaces {
    /// Reserve user IDs matching `regex`.
    pub fn register_user_ids(&mut self, regex: &Regex, exclusive: bool) {
        self.user_ids.push(Namespace::new(regex, exclusive));
    }

    /// Reserve room aliases matching `regex`.
    pub fn register_room_aliases(&mut self, regex: &Regex, exclusive: bool) {
        self.room_aliases.push(Namespace::new(regex, exclusive));
    }

    /// Reserve room IDs matching `regex`.
    pub fn register_room_ids(&mut self, regex: &Regex, exclusive: bool) {
        self.room_ids.push(Namespace::new(regex, exclusive));
    }

    pub fn is_empty(&self) -> bool {
        self.user_ids.is_empty() && self.room_aliases.is_empty() && self.room_ids.is_empty()
    }

    /// Iterate every reservation regardless of kind.
    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.user_ids
            .iter()
            .chain(&self.room_aliases)
            .chain(&self.room_ids)
    }
}

/// A single reservation: a pattern plus exclusivity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub regex: String,
    pub exclusive: bool,
}

impl Namespace {
    fn new(regex: &Regex, exclusive: bool) -> Self {
        Self {
            regex: regex.as_str().to_owned(),
            exclusive,
        }
    }
}

/// 64 hex characters from two v4 UUIDs.
fn generate_token() -> String {
    format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}
