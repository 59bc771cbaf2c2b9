//! Touchline Core - command registry, scoping and clarity classification
//!
//! This crate provides the in-memory command layer of the Touchline chat bot,
//! including:
//! - Command metadata records and the registration builder
//! - Scoped registration with a last-writer-wins conflict policy
//! - Alias and scope resolution for a requesting chat context
//! - Heuristic clarity classification and agent routing hints
//! - Aggregate stats, search and plain-text help rendering
//!
//! The registry performs no I/O and never invokes command handlers.

pub mod classification;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod queries;
pub mod registry;
pub mod render;

pub use touchline_core_types as core_types;

// Re-export commonly used types
pub use classification::{classify, classify_value, Classification, Classifier, ClassifierPolicy};
pub use errors::{CmdError, CmdErrorKind, RegistryError, Result};
pub use model::{
    CommandHandler, CommandKind, CommandMetadata, CommandParams, CommandRegistration, HandlerRef,
    HandlerResult, PermissionLevel, RoutingContext, Scope,
};
pub use queries::{search, stats, RegistryStats};
pub use registry::{CommandRegistry, RegisterOutcome};
