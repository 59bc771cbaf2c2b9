//! Canonical schema constants for structured logging
//!
//! These constants keep field and event names consistent between the
//! registry, the engine boundary and log assertions in tests.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Command identifiers
pub const FIELD_COMMAND: &str = "command";
pub const FIELD_SCOPE: &str = "scope";
pub const FIELD_FEATURE: &str = "feature";
pub const FIELD_ALIAS: &str = "alias";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Registry events
pub const EVENT_REGISTRATION_CONFLICT: &str = "registration_conflict";
pub const EVENT_ALIAS_REASSIGNED: &str = "alias_reassigned";
pub const EVENT_SCORING_FALLBACK: &str = "scoring_fallback";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        let events = [
            EVENT_START,
            EVENT_END,
            EVENT_END_ERROR,
            EVENT_REGISTRATION_CONFLICT,
            EVENT_ALIAS_REASSIGNED,
            EVENT_SCORING_FALLBACK,
        ];
        for (i, a) in events.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &events[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
