//! Core types shared across Touchline facilities
//!
//! This crate provides foundational types used by the registry, the
//! logging facility and the routing engine:
//!
//! - **Identifiers**: RequestId, TeamId, UserId carried in routing contexts
//! - **Schema constants**: Canonical field keys and event names

pub mod ids;
pub mod schema;

pub use ids::{RequestId, TeamId, UserId};
