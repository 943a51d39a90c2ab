//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a registration" or "check a config".

pub mod generator;
pub mod inspect_service;
pub mod prompt;

pub use generator::{
    CancelStage, GenerateRequest, GeneratedDocuments, GenerationOutcome, PatternCompiler,
    RegistrationGenerator,
};
pub use inspect_service::InspectService;
pub use prompt::{is_affirmative, read_string};
