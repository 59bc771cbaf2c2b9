//! Identifier newtypes carried through message routing
//!
//! A `RequestId` correlates every log line produced while one incoming chat
//! message is resolved and classified. Team and user identifiers come from the
//! chat transport and are kept opaque.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Correlation id for one routed chat message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh time-ordered id (UUIDv7)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap an id minted by the transport layer
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Team identifier as issued by the bot's team store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub String);

/// Chat user identifier as issued by the transport
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        let a = RequestId::new();
        let b = RequestId::new();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_request_id_display_matches_inner() {
        let id = RequestId::from_string("req-1".to_string());
        assert_eq!(id.to_string(), "req-1");
    }

    #[test]
    fn test_team_id_serializes_as_plain_string() {
        let team = TeamId("KTI".to_string());
        let json = serde_json::to_string(&team).unwrap();
        assert_eq!(json, "\"KTI\"");
        let back: TeamId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, team);
    }
}
