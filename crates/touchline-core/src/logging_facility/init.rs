//! Logging initialization module

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, debug level for touchline crates
    Development,
    /// JSON structured output, info level for touchline crates
    Production,
    /// Bare registry; tests install their own capture layer
    Test,
}

impl Profile {
    /// Parse a profile name as accepted on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Profile::Development),
            "production" | "prod" => Some(Profile::Production),
            "test" => Some(Profile::Test),
            _ => None,
        }
    }

    fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "touchline=debug",
            Profile::Production | Profile::Test => "touchline=info",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at process startup. Later calls, or a subscriber installed
/// elsewhere first, leave the existing setup in place. `RUST_LOG` overrides
/// the profile's default filter directive.
///
/// # Example
///
/// ```
/// use touchline_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .try_init()
                    .ok();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .try_init()
                    .ok();
            }
            Profile::Test => {
                // Capture layers are installed by init_test_capture()
                tracing_subscriber::registry().try_init().ok();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(Profile::Development.default_directive(), "touchline=debug");
        assert_eq!(Profile::Production.default_directive(), "touchline=info");
    }

    #[test]
    fn test_profile_parse() {
        assert_eq!(Profile::parse("dev"), Some(Profile::Development));
        assert_eq!(Profile::parse("Production"), Some(Profile::Production));
        assert_eq!(Profile::parse("verbose"), None);
    }
}
