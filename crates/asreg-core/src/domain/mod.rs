//! Core domain layer for asreg.
//!
//! This module holds the two documents the generator produces (registration
//! and config) and the rules for building them. It does no I/O: reading
//! answers, printing, and touching the filesystem are handled via ports
//! defined in the application layer.
//!
//! - **No I/O**: serialization to text only, never to disk
//! - **Plain data**: documents are `Clone + PartialEq` structs with public fields
//! - **Validation lives here**: port parsing, pattern compiling, consistency checks

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    Appservice, Config, Finding, HostConfig, LogConfig, Namespace, Namespaces, Registration,
};

pub use error::{DomainError, ErrorCategory, NamespaceKind};

pub use value_objects::{
    SECURE_PROTOCOL, callback_url, compile_pattern, default_namespace_prefix, parse_port,
    room_alias_pattern, user_id_pattern,
};

pub use validation::DomainValidator;
