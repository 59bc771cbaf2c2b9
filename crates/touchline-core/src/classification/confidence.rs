use serde::Serialize;
use touchline_core_types::schema::EVENT_SCORING_FALLBACK;

use super::policy::{is_unit_interval, ClassifierPolicy};
use crate::model::{CommandKind, CommandMetadata};

/// Heuristic that produced the winning confidence candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceSignal {
    SystemKind,
    OptionalParameters,
    Descriptive,
    Examples,
    Aliases,
    Floor,
    /// Candidates could not be evaluated
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceScore {
    pub value: f64,
    pub signal: ConfidenceSignal,
}

/// Score how clear a command's intent is without language-model help.
///
/// Each applicable heuristic contributes one candidate and the highest
/// candidate wins; on ties the earlier (stronger) heuristic is reported. A
/// candidate outside [0, 1] is a scoring fault and yields the fallback score.
pub fn score_confidence(meta: &CommandMetadata, policy: &ClassifierPolicy) -> ConfidenceScore {
    let candidates = [
        (
            ConfidenceSignal::SystemKind,
            meta.kind == CommandKind::System,
            policy.system_confidence,
        ),
        (
            ConfidenceSignal::OptionalParameters,
            !meta.has_required_parameters() || meta.parameters_optional(),
            policy.optional_parameters_confidence,
        ),
        (
            ConfidenceSignal::Descriptive,
            meta.description.chars().count() > policy.descriptive_min_chars,
            policy.descriptive_confidence,
        ),
        (
            ConfidenceSignal::Examples,
            !meta.examples.is_empty(),
            policy.examples_confidence,
        ),
        (
            ConfidenceSignal::Aliases,
            !meta.aliases.is_empty(),
            policy.aliases_confidence,
        ),
        (ConfidenceSignal::Floor, true, policy.floor_confidence),
    ];

    let mut best: Option<ConfidenceScore> = None;
    for (signal, applies, value) in candidates {
        if !applies {
            continue;
        }
        if !is_unit_interval(value) {
            return fallback(meta, policy, signal, value);
        }
        if best.map_or(true, |current| value > current.value) {
            best = Some(ConfidenceScore { value, signal });
        }
    }

    best.unwrap_or(ConfidenceScore {
        value: policy.fallback_confidence,
        signal: ConfidenceSignal::Fallback,
    })
}

fn fallback(
    meta: &CommandMetadata,
    policy: &ClassifierPolicy,
    signal: ConfidenceSignal,
    value: f64,
) -> ConfidenceScore {
    let fallback_value = if is_unit_interval(policy.fallback_confidence) {
        policy.fallback_confidence
    } else {
        ClassifierPolicy::default().fallback_confidence
    };
    tracing::warn!(
        event = EVENT_SCORING_FALLBACK,
        command = %meta.name,
        stage = "confidence",
        signal = ?signal,
        value,
        "confidence candidate out of range; using fallback score"
    );
    ConfidenceScore {
        value: fallback_value,
        signal: ConfidenceSignal::Fallback,
    }
}
