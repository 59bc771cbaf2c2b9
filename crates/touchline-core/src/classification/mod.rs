//! Clarity classification
//!
//! Decides, for one registered command, whether the router can execute it
//! directly or should hand it to a language-model agent. Every heuristic is
//! evaluated independently; a fault in one of them is replaced with its
//! documented default instead of failing the whole classification.
//!
//! ```
//! use touchline_core::classification::classify;
//! use touchline_core::model::{CommandKind, CommandRegistration, HandlerRef};
//!
//! let meta = CommandRegistration::new("/help", "Show available commands", "system", HandlerRef::detached())
//!     .kind(CommandKind::System)
//!     .tag("help")
//!     .into_metadata();
//!
//! let result = classify("/help", &meta).unwrap();
//! assert!(result.confidence >= 0.90);
//! assert_eq!(result.routing.agent, "help_assistant");
//! ```

pub mod confidence;
pub mod parameters;
pub mod policy;
pub mod routing;

use serde::Serialize;

pub use confidence::{score_confidence, ConfidenceScore, ConfidenceSignal};
pub use parameters::{analyze_parameters, complexity_score, ClarityImpact, ParameterAnalysis};
pub use policy::ClassifierPolicy;
pub use routing::{Priority, RoutingRecommendation, RoutingTable, GENERAL_AGENT};

use crate::errors::{RegistryError, Result};
use crate::model::{ClarityLevel, CommandMetadata};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Name the caller asked about (may be an alias)
    pub command: String,
    pub requires_nlp: bool,
    pub clarity_level: ClarityLevel,
    pub confidence: f64,
    pub confidence_signal: ConfidenceSignal,
    pub routing: RoutingRecommendation,
    pub parameter_analysis: ParameterAnalysis,
    pub semantic_tags: Vec<String>,
}

/// Policy plus routing table used to classify commands
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    policy: ClassifierPolicy,
    routing: RoutingTable,
}

impl Classifier {
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if the policy fails validation.
    pub fn new(policy: ClassifierPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self {
            policy,
            routing: RoutingTable::default(),
        })
    }

    pub fn with_routing(mut self, routing: RoutingTable) -> Self {
        self.routing = routing;
        self
    }

    pub fn policy(&self) -> &ClassifierPolicy {
        &self.policy
    }

    pub fn routing(&self) -> &RoutingTable {
        &self.routing
    }

    /// Classify a registered command.
    ///
    /// # Errors
    ///
    /// * `InvalidCommandName` - `name` is empty or whitespace-only
    /// * `InvalidMetadata` - the record has no name or no owning feature
    pub fn classify(&self, name: &str, meta: &CommandMetadata) -> Result<Classification> {
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidCommandName {
                reason: "Cannot classify a command without a name".to_string(),
            });
        }
        meta.validate()?;

        let confidence = score_confidence(meta, &self.policy);
        let routing = self.routing.recommend(meta);
        let parameter_analysis = analyze_parameters(meta, &self.policy);
        let requires_nlp =
            meta.nlu.requires_disambiguation || meta.nlu.clarity == ClarityLevel::Ambiguous;

        tracing::debug!(
            command = name,
            confidence = confidence.value,
            agent = %routing.agent,
            requires_nlp,
            "command classified"
        );

        Ok(Classification {
            command: name.to_string(),
            requires_nlp,
            clarity_level: meta.nlu.clarity,
            confidence: confidence.value,
            confidence_signal: confidence.signal,
            routing,
            parameter_analysis,
            semantic_tags: meta.nlu.semantic_tags.clone(),
        })
    }

    /// Classify an untyped record, e.g. one received as JSON.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetadata` when `value` is not an object or does not
    /// decode to a command record, plus any error of [`classify`](Self::classify).
    pub fn classify_value(&self, name: &str, value: &serde_json::Value) -> Result<Classification> {
        if !value.is_object() {
            return Err(RegistryError::InvalidMetadata {
                reason: format!("expected a command record object, got {}", json_type(value)),
            });
        }
        let meta: CommandMetadata =
            serde_json::from_value(value.clone()).map_err(|e| RegistryError::InvalidMetadata {
                reason: e.to_string(),
            })?;
        self.classify(name, &meta)
    }
}

/// Classify with the stock policy and routing table.
///
/// # Errors
///
/// See [`Classifier::classify`].
pub fn classify(name: &str, meta: &CommandMetadata) -> Result<Classification> {
    Classifier::default().classify(name, meta)
}

/// Classify an untyped record with the stock policy and routing table.
///
/// # Errors
///
/// See [`Classifier::classify_value`].
pub fn classify_value(name: &str, value: &serde_json::Value) -> Result<Classification> {
    Classifier::default().classify_value(name, value)
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
