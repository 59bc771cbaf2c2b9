use thiserror::Error;

/// Result type alias using RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (the message router,
/// the CLI) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmdErrorKind {
    // Caller contract
    InvalidInput,
    InvalidMetadata,
    InvalidScope,

    // Lookup
    NotFound,

    // Configuration
    InvalidPolicy,
    InvalidManifest,

    // Integration
    Io,
    Serialization,

    // Internal
    Internal,
}

impl CmdErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            CmdErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            CmdErrorKind::InvalidMetadata => "ERR_INVALID_METADATA",
            CmdErrorKind::InvalidScope => "ERR_INVALID_SCOPE",
            CmdErrorKind::NotFound => "ERR_NOT_FOUND",
            CmdErrorKind::InvalidPolicy => "ERR_INVALID_POLICY",
            CmdErrorKind::InvalidManifest => "ERR_INVALID_MANIFEST",
            CmdErrorKind::Io => "ERR_IO",
            CmdErrorKind::Serialization => "ERR_SERIALIZATION",
            CmdErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification kind plus optional command/scope context so a
/// single log line tells which registration or lookup went wrong.
#[derive(Debug, Clone)]
pub struct CmdError {
    kind: CmdErrorKind,
    op: Option<String>,
    command: Option<String>,
    scope: Option<String>,
    message: String,
}

impl CmdError {
    pub fn new(kind: CmdErrorKind) -> Self {
        Self {
            kind,
            op: None,
            command: None,
            scope: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add command name context
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Add scope context
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> CmdErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for CmdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(command) = &self.command {
            write!(f, " (command: {})", command)?;
        }
        if let Some(scope) = &self.scope {
            write!(f, " (scope: {})", scope)?;
        }
        Ok(())
    }
}

impl std::error::Error for CmdError {}

// ========== End Error Facility ==========

/// Error taxonomy for registry, resolution and classification operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    // ===== Caller Contract =====
    /// Command name is empty or whitespace-only
    #[error("Invalid command name: {reason}")]
    InvalidCommandName { reason: String },

    /// Owning feature name is empty or whitespace-only
    #[error("Invalid feature for command {command}: feature name cannot be empty")]
    InvalidFeature { command: String },

    /// Value handed to the classifier is not a usable command record
    #[error("Invalid command metadata: {reason}")]
    InvalidMetadata { reason: String },

    /// Scope token does not name a known chat context
    #[error("Unknown scope: {value}")]
    InvalidScope { value: String },

    /// Permission token does not name a known tier
    #[error("Unknown permission level: {value}")]
    InvalidPermission { value: String },

    /// Kind token does not name a known command kind
    #[error("Unknown command kind: {value}")]
    InvalidKind { value: String },

    // ===== Lookup =====
    /// No variant of the command applies to the requesting scope
    #[error("Command not found: {command} (scope: {scope})")]
    CommandNotFound { command: String, scope: String },

    /// No command was registered by the feature
    #[error("Feature not found: {feature}")]
    FeatureNotFound { feature: String },

    // ===== Configuration =====
    /// Classifier policy holds a value outside its legal range
    #[error("Invalid classifier policy: {reason}")]
    InvalidPolicy { reason: String },

    // ===== Generic =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<RegistryError> for CmdError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InvalidCommandName { reason } => {
                CmdError::new(CmdErrorKind::InvalidInput)
                    .with_message(format!("Invalid command name: {}", reason))
            }

            RegistryError::InvalidFeature { command } => CmdError::new(CmdErrorKind::InvalidInput)
                .with_command(command)
                .with_message("Feature name cannot be empty"),

            RegistryError::InvalidMetadata { reason } => {
                CmdError::new(CmdErrorKind::InvalidMetadata).with_message(reason)
            }

            RegistryError::InvalidScope { value } => CmdError::new(CmdErrorKind::InvalidScope)
                .with_scope(value)
                .with_message("Unknown scope"),

            RegistryError::InvalidPermission { value } => {
                CmdError::new(CmdErrorKind::InvalidInput)
                    .with_message(format!("Unknown permission level: {}", value))
            }

            RegistryError::InvalidKind { value } => CmdError::new(CmdErrorKind::InvalidInput)
                .with_message(format!("Unknown command kind: {}", value)),

            RegistryError::CommandNotFound { command, scope } => {
                CmdError::new(CmdErrorKind::NotFound)
                    .with_command(command)
                    .with_scope(scope)
                    .with_message("Command not found")
            }

            RegistryError::FeatureNotFound { feature } => CmdError::new(CmdErrorKind::NotFound)
                .with_message(format!("Feature not found: {}", feature)),

            RegistryError::InvalidPolicy { reason } => {
                CmdError::new(CmdErrorKind::InvalidPolicy).with_message(reason)
            }

            RegistryError::Serialization { message } => {
                CmdError::new(CmdErrorKind::Serialization).with_message(message)
            }

            RegistryError::Internal { message } => {
                CmdError::new(CmdErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to RegistryError
impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Serialization {
            message: err.to_string(),
        }
    }
}
