//! Canonical logging macros
//!
//! Boundary layers wrap each operation in exactly one start event and one
//! end (or end_error) event. Callers must depend on `tracing`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use touchline_core::log_op_start;
/// log_op_start!("bootstrap");
/// log_op_start!("resolve", command = "/list");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use touchline_core::log_op_end;
/// log_op_end!("bootstrap", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into the canonical `CmdError` so the event carries
/// a stable `err.code`.
///
/// # Example
///
/// ```
/// # use touchline_core::{log_op_error, errors::RegistryError};
/// let err = RegistryError::FeatureNotFound { feature: "payments".to_string() };
/// log_op_error!("feature_help", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let cmd_err: $crate::errors::CmdError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?cmd_err.kind(),
            err.code = cmd_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let cmd_err: $crate::errors::CmdError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?cmd_err.kind(),
            err.code = cmd_err.code(),
            $($field)*
        );
    }};
}
