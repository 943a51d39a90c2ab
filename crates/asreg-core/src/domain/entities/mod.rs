pub mod appservice;
pub mod config;
pub mod registration;

pub use crate::domain::DomainError;
pub use appservice::{Appservice, Finding};
pub use config::{Config, HostConfig, LogConfig};
pub use registration::{Namespace, Namespaces, Registration};
