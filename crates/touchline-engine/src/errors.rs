use thiserror::Error;
use touchline_core::errors::{CmdError, CmdErrorKind, RegistryError};

pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while building or querying the registry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Manifest file could not be read
    #[error("Failed to read manifest {path}: {message}")]
    ManifestIo { path: String, message: String },

    /// Manifest text is not a valid command manifest
    #[error("Invalid manifest: {message}")]
    ManifestParse { message: String },
}

impl From<EngineError> for CmdError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Registry(inner) => inner.into(),
            EngineError::ManifestIo { path, message } => CmdError::new(CmdErrorKind::Io)
                .with_message(format!("{}: {}", path, message)),
            EngineError::ManifestParse { message } => {
                CmdError::new(CmdErrorKind::InvalidManifest).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_is_transparent() {
        let err: EngineError = RegistryError::FeatureNotFound {
            feature: "payments".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Feature not found: payments");
        assert_eq!(CmdError::from(err).code(), "ERR_NOT_FOUND");
    }

    #[test]
    fn test_manifest_errors_have_codes() {
        let io = EngineError::ManifestIo {
            path: "bot.toml".to_string(),
            message: "missing".to_string(),
        };
        let parse = EngineError::ManifestParse {
            message: "expected table".to_string(),
        };
        assert_eq!(CmdError::from(io).code(), "ERR_IO");
        assert_eq!(CmdError::from(parse).code(), "ERR_INVALID_MANIFEST");
    }
}
