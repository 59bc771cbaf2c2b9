use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::RegistryError;

/// Chat context a command variant applies to
///
/// `Universal` means the variant is not restricted to any context. The legacy
/// chat-type tokens (`main_chat`, `leadership_chat`, `private_chat`) parse into
/// the same values, so there is a single scope representation everywhere.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    #[default]
    Universal,
    #[serde(alias = "main_chat")]
    Main,
    #[serde(alias = "leadership_chat")]
    Leadership,
    #[serde(alias = "private_chat")]
    Private,
}

impl Scope {
    /// All concrete chat contexts (excludes `Universal`)
    pub const CHAT_CONTEXTS: [Scope; 3] = [Scope::Main, Scope::Leadership, Scope::Private];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Universal => "universal",
            Scope::Main => "main",
            Scope::Leadership => "leadership",
            Scope::Private => "private",
        }
    }

    pub fn is_universal(&self) -> bool {
        matches!(self, Scope::Universal)
    }

    /// Whether a variant registered under `self` may serve a request from `requesting`.
    pub fn applies_to(&self, requesting: Scope) -> bool {
        self.is_universal() || *self == requesting
    }
}

impl FromStr for Scope {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "universal" | "all" | "any" => Ok(Scope::Universal),
            "main" | "main_chat" => Ok(Scope::Main),
            "leadership" | "leadership_chat" => Ok(Scope::Leadership),
            "private" | "private_chat" => Ok(Scope::Private),
            _ => Err(RegistryError::InvalidScope {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_chat_tokens_parse_to_same_scope() {
        assert_eq!("main_chat".parse::<Scope>().unwrap(), Scope::Main);
        assert_eq!("main".parse::<Scope>().unwrap(), Scope::Main);
        assert_eq!(
            "LEADERSHIP_CHAT".parse::<Scope>().unwrap(),
            Scope::Leadership
        );
        assert_eq!("universal".parse::<Scope>().unwrap(), Scope::Universal);
    }

    #[test]
    fn test_unknown_scope_is_rejected() {
        let err = "lobby".parse::<Scope>().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidScope { value } if value == "lobby"));
    }

    #[test]
    fn test_applies_to() {
        assert!(Scope::Universal.applies_to(Scope::Main));
        assert!(Scope::Leadership.applies_to(Scope::Leadership));
        assert!(!Scope::Leadership.applies_to(Scope::Main));
    }

    #[test]
    fn test_serde_accepts_legacy_alias() {
        let scope: Scope = serde_json::from_str("\"leadership_chat\"").unwrap();
        assert_eq!(scope, Scope::Leadership);
        assert_eq!(serde_json::to_string(&scope).unwrap(), "\"leadership\"");
    }
}
