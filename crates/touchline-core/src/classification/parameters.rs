use serde::Serialize;
use touchline_core_types::schema::EVENT_SCORING_FALLBACK;

use super::policy::ClassifierPolicy;
use crate::model::CommandMetadata;

/// How much the parameters help a reader understand the command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClarityImpact {
    /// No parameters; the name alone is clear
    High,
    /// Parameters exist but may be omitted
    Medium,
    /// At least one parameter must be supplied
    Low,
}

impl ClarityImpact {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClarityImpact::High => "high",
            ClarityImpact::Medium => "medium",
            ClarityImpact::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterAnalysis {
    pub has_parameters: bool,
    pub parameter_count: usize,
    pub parameters_optional: bool,
    pub complexity: f64,
    pub clarity_impact: ClarityImpact,
}

impl ParameterAnalysis {
    /// Result reported when the analysis cannot be computed
    pub fn clear() -> Self {
        Self {
            has_parameters: false,
            parameter_count: 0,
            parameters_optional: false,
            complexity: 0.0,
            clarity_impact: ClarityImpact::High,
        }
    }
}

/// Complexity of a parameter list in [0, 1].
///
/// Base is the parameter count over the saturation count, capped at 1.0.
/// Each keyword occurrence in the descriptions adds the keyword bonus.
/// Returns `None` when the policy cannot produce a finite score.
pub fn complexity_score<'a, I>(descriptions: I, policy: &ClassifierPolicy) -> Option<f64>
where
    I: IntoIterator<Item = &'a str>,
{
    if policy.saturation_count == 0 {
        return None;
    }

    let mut count = 0usize;
    let mut occurrences = 0usize;
    for description in descriptions {
        count += 1;
        let lowered = description.to_lowercase();
        occurrences += policy
            .complexity_keywords
            .iter()
            .map(|keyword| lowered.matches(keyword.to_lowercase().as_str()).count())
            .sum::<usize>();
    }

    let base = (count as f64 / policy.saturation_count as f64).min(1.0);
    let score = base + policy.keyword_bonus * occurrences as f64;
    if !score.is_finite() || score < 0.0 {
        return None;
    }
    Some(score.min(1.0))
}

/// Describe the command's parameters for the router.
pub fn analyze_parameters(meta: &CommandMetadata, policy: &ClassifierPolicy) -> ParameterAnalysis {
    let Some(complexity) = complexity_score(meta.parameters.values().map(String::as_str), policy)
    else {
        tracing::warn!(
            event = EVENT_SCORING_FALLBACK,
            command = %meta.name,
            stage = "parameters",
            "parameter complexity could not be computed; reporting clear"
        );
        return ParameterAnalysis::clear();
    };

    let parameter_count = meta.parameters.len();
    let parameters_optional = meta.parameters_optional();
    let clarity_impact = if parameter_count == 0 {
        ClarityImpact::High
    } else if parameters_optional {
        ClarityImpact::Medium
    } else {
        ClarityImpact::Low
    };

    ParameterAnalysis {
        has_parameters: parameter_count > 0,
        parameter_count,
        parameters_optional,
        complexity,
        clarity_impact,
    }
}
