//! Router-facing operations.
//!
//! `apply_router_query` is the single read-only entry point the message
//! router uses; `route_command` decides between direct execution and
//! escalation to a language-model agent.

pub mod route;
pub mod router_query;

pub use route::{execute_route, route_command, DispatchMode, RouteDecision};
pub use router_query::{apply_router_query, RouterQuery, RouterQueryResult};
