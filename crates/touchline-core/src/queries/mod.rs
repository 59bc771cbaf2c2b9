//! Read-only registry queries
//!
//! Aggregates and searches never mutate the registry and always return
//! results in a deterministic order, so two calls over the same registry
//! produce identical output.

pub mod search;
pub mod stats;

pub use search::search;
pub use stats::{stats, RegistryStats};
