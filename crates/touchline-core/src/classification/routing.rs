use serde::Serialize;
use touchline_core_types::schema::EVENT_SCORING_FALLBACK;

use crate::model::CommandMetadata;

/// Agent that takes anything the table does not name
pub const GENERAL_AGENT: &str = "message_processor";

/// Routing keys whose commands are handled with high priority
const HIGH_PRIORITY_KEYS: [&str; 3] = ["system", "utility", "help"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

/// Suggested downstream agent for a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingRecommendation {
    pub agent: String,
    pub priority: Priority,
    /// Semantic tag that overrode the kind-derived agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_tag: Option<String>,
}

impl RoutingRecommendation {
    pub fn general() -> Self {
        Self {
            agent: GENERAL_AGENT.to_string(),
            priority: Priority::Medium,
            matched_tag: None,
        }
    }
}

/// Ordered routing key to agent table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTable {
    entries: Vec<(String, String)>,
}

impl Default for RoutingTable {
    fn default() -> Self {
        Self::from_entries([
            ("system", GENERAL_AGENT),
            ("utility", GENERAL_AGENT),
            ("help", "help_assistant"),
            ("player", "player_coordinator"),
            ("team", "team_administrator"),
            ("squad", "squad_selector"),
            ("match", "squad_selector"),
        ])
    }
}

impl RoutingTable {
    /// Build a table; keys are matched case-insensitively.
    pub fn from_entries<I, K, A>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, A)>,
        K: Into<String>,
        A: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, agent)| (key.into().to_lowercase(), agent.into()))
                .collect(),
        }
    }

    pub fn agent_for(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, agent)| agent.as_str())
    }

    /// Recommend an agent from the command kind, overridden by the first
    /// semantic tag that names a table key.
    pub fn recommend(&self, meta: &CommandMetadata) -> RoutingRecommendation {
        let kind_key = meta.kind.as_str();
        let priority = if HIGH_PRIORITY_KEYS.contains(&kind_key) {
            Priority::High
        } else {
            Priority::Medium
        };

        let tagged = meta
            .nlu
            .semantic_tags
            .iter()
            .find_map(|tag| self.agent_for(tag).map(|agent| (tag, agent)));

        let (agent, matched_tag) = match tagged {
            Some((tag, agent)) => (agent, Some(tag.clone())),
            None => (self.agent_for(kind_key).unwrap_or(GENERAL_AGENT), None),
        };

        if agent.trim().is_empty() {
            tracing::warn!(
                event = EVENT_SCORING_FALLBACK,
                command = %meta.name,
                stage = "routing",
                "routing table maps to an empty agent; using general agent"
            );
            return RoutingRecommendation::general();
        }

        RoutingRecommendation {
            agent: agent.to_string(),
            priority,
            matched_tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommandKind, CommandRegistration, HandlerRef};

    fn meta(kind: CommandKind, tags: &[&str]) -> CommandMetadata {
        let mut reg =
            CommandRegistration::new("/help", "Show help", "system", HandlerRef::detached())
                .kind(kind);
        for tag in tags {
            reg = reg.tag(*tag);
        }
        reg.into_metadata()
    }

    #[test]
    fn test_system_kind_routes_to_general_with_high_priority() {
        let rec = RoutingTable::default().recommend(&meta(CommandKind::System, &[]));
        assert_eq!(rec.agent, GENERAL_AGENT);
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.matched_tag, None);
    }

    #[test]
    fn test_tag_overrides_kind() {
        let rec = RoutingTable::default().recommend(&meta(CommandKind::System, &["help"]));
        assert_eq!(rec.agent, "help_assistant");
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.matched_tag.as_deref(), Some("help"));
    }

    #[test]
    fn test_first_matching_tag_wins() {
        let rec = RoutingTable::default().recommend(&meta(
            CommandKind::Slash,
            &["availability", "Squad", "player"],
        ));
        assert_eq!(rec.agent, "squad_selector");
        assert_eq!(rec.priority, Priority::Medium);
    }

    #[test]
    fn test_unknown_kind_key_uses_general_agent() {
        let rec = RoutingTable::default().recommend(&meta(CommandKind::Administrative, &[]));
        assert_eq!(rec, RoutingRecommendation::general());
    }

    #[test]
    fn test_empty_agent_falls_back() {
        let table = RoutingTable::from_entries([("player", "")]);
        let rec = table.recommend(&meta(CommandKind::Slash, &["player"]));
        assert_eq!(rec, RoutingRecommendation::general());
    }
}
