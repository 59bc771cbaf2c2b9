//! Tunable constants for clarity classification
//!
//! `ClassifierPolicy::default()` carries the stock heuristic weights. A
//! deployment may override any subset through the `[classifier]` table of a
//! command manifest; missing keys keep their defaults.

use serde::{Deserialize, Serialize};

use crate::errors::{RegistryError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierPolicy {
    /// Candidate for system commands
    pub system_confidence: f64,
    /// Candidate when no parameter is required to understand the intent
    pub optional_parameters_confidence: f64,
    /// Candidate when the description is longer than `descriptive_min_chars`
    pub descriptive_confidence: f64,
    pub examples_confidence: f64,
    pub aliases_confidence: f64,
    /// Candidate every registered command receives
    pub floor_confidence: f64,
    /// Score used when the candidates cannot be evaluated
    pub fallback_confidence: f64,
    pub descriptive_min_chars: usize,
    /// Words in parameter descriptions that make a command harder to parse
    pub complexity_keywords: Vec<String>,
    pub keyword_bonus: f64,
    /// Parameter count at which the base complexity reaches 1.0
    pub saturation_count: usize,
    /// Minimum confidence for the router to execute without an agent
    pub direct_dispatch_threshold: f64,
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            system_confidence: 0.95,
            optional_parameters_confidence: 0.90,
            descriptive_confidence: 0.85,
            examples_confidence: 0.80,
            aliases_confidence: 0.75,
            floor_confidence: 0.60,
            fallback_confidence: 0.50,
            descriptive_min_chars: 10,
            complexity_keywords: ["optional", "required", "multiple", "complex"]
                .into_iter()
                .map(String::from)
                .collect(),
            keyword_bonus: 0.1,
            saturation_count: 5,
            direct_dispatch_threshold: 0.80,
        }
    }
}

impl ClassifierPolicy {
    /// Reject policies the classifier cannot score with.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` when a score lies outside [0, 1], the
    /// saturation count is zero, or a keyword is blank.
    pub fn validate(&self) -> Result<()> {
        let scores = [
            ("system_confidence", self.system_confidence),
            (
                "optional_parameters_confidence",
                self.optional_parameters_confidence,
            ),
            ("descriptive_confidence", self.descriptive_confidence),
            ("examples_confidence", self.examples_confidence),
            ("aliases_confidence", self.aliases_confidence),
            ("floor_confidence", self.floor_confidence),
            ("fallback_confidence", self.fallback_confidence),
            ("keyword_bonus", self.keyword_bonus),
            ("direct_dispatch_threshold", self.direct_dispatch_threshold),
        ];
        for (field, value) in scores {
            if !is_unit_interval(value) {
                return Err(RegistryError::InvalidPolicy {
                    reason: format!("{} must be within [0, 1], got {}", field, value),
                });
            }
        }

        if self.saturation_count == 0 {
            return Err(RegistryError::InvalidPolicy {
                reason: "saturation_count must be at least 1".to_string(),
            });
        }

        if self
            .complexity_keywords
            .iter()
            .any(|keyword| keyword.trim().is_empty())
        {
            return Err(RegistryError::InvalidPolicy {
                reason: "complexity_keywords cannot contain blank entries".to_string(),
            });
        }

        Ok(())
    }
}

pub(crate) fn is_unit_interval(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        assert!(ClassifierPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let policy = ClassifierPolicy {
            examples_confidence: 1.2,
            ..ClassifierPolicy::default()
        };
        let err = policy.validate().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPolicy { reason } if reason.contains("examples_confidence")));
    }

    #[test]
    fn test_nan_rejected() {
        let policy = ClassifierPolicy {
            floor_confidence: f64::NAN,
            ..ClassifierPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_zero_saturation_rejected() {
        let policy = ClassifierPolicy {
            saturation_count: 0,
            ..ClassifierPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let policy: ClassifierPolicy =
            serde_json::from_str(r#"{"direct_dispatch_threshold": 0.9}"#).unwrap();
        assert_eq!(policy.direct_dispatch_threshold, 0.9);
        assert_eq!(policy.system_confidence, 0.95);
        assert_eq!(policy.complexity_keywords.len(), 4);
    }
}
