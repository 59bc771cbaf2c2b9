//! Touchline Engine - Orchestration layer
//!
//! Builds the command registry from feature modules and manifests, and
//! exposes the read-only query surface the message router calls.

pub mod bootstrap;
pub mod builtins;
pub mod commands;
pub mod errors;
pub mod manifest;
pub mod shared;

pub use bootstrap::{bootstrap, FeatureModule};
pub use builtins::SystemFeature;
pub use commands::{
    apply_router_query, execute_route, route_command, DispatchMode, RouteDecision, RouterQuery,
    RouterQueryResult,
};
pub use errors::{EngineError, Result};
pub use manifest::{load_manifest, parse_manifest, CommandManifest};
pub use shared::SharedRegistry;
