//! asreg Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the asreg
//! appservice registration generator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             asreg-cli (CLI)             │
//! │   (clap, tracing init, terminal output) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (RegistrationGenerator, InspectService) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │   (LineSource, Console, Filesystem)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     asreg-adapters (Infrastructure)     │
//! │ (BufReadSource, LocalFilesystem, etc.)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (No I/O)           │
//! │   (Registration, Config, Namespaces)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use asreg_core::application::{GenerateRequest, RegistrationGenerator};
//!
//! let mut generator = RegistrationGenerator::new(input, console, filesystem);
//! let request = GenerateRequest::new("bridge", "bridgebot").reserve_users(true);
//! let outcome = generator.generate(&request)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CancelStage, GenerateRequest, GeneratedDocuments, GenerationOutcome, InspectService,
        RegistrationGenerator,
        ports::{Console, Filesystem, LineSource, Tone},
    };
    pub use crate::domain::{
        Appservice, Config, Finding, HostConfig, LogConfig, Namespace, Namespaces, Registration,
    };
    pub use crate::error::{AsregError, AsregResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
