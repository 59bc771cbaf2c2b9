//! Structured logging facility for Touchline
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions on emitted events
//!
//! # Usage
//!
//! ```rust
//! use touchline_core::logging_facility::{init, Profile};
//!
//! // Initialize once at process startup, before feature bootstrap
//! init(Profile::Development);
//! ```
//!
//! Registry internals log with `tracing::debug!` and surface registration
//! conflicts with `tracing::warn!`; operation boundaries belong to the caller.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
