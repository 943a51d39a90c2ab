//! Application layer for asreg.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RegistrationGenerator, InspectService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the wizard but keeps document rules in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CancelStage, GenerateRequest, GeneratedDocuments, GenerationOutcome, InspectService,
    RegistrationGenerator,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Console, Filesystem, LineSource, Tone};

pub use error::ApplicationError;
