//! Classification scenarios over a populated registry

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{announce_registration, help_registration, team_registry};
use touchline_core::classification::{
    ClarityImpact, Classifier, ClassifierPolicy, ConfidenceSignal, Priority, GENERAL_AGENT,
};
use touchline_core::model::Scope;
use touchline_core::{classify, classify_value, CommandRegistry, RegistryError};

#[test]
fn test_help_scenario_tagged() {
    // GIVEN "/help" registered as a system command tagged "help"
    let mut registry = CommandRegistry::new();
    registry.register(help_registration(true)).unwrap();

    // WHEN the router classifies the resolved record
    let record = registry.resolve("/help", Scope::Main).unwrap();
    let result = classify("/help", &record).unwrap();

    // THEN it is a clear, high-priority command for the help agent
    assert!(result.confidence >= 0.90);
    assert_eq!(result.confidence_signal, ConfidenceSignal::SystemKind);
    assert_eq!(result.routing.agent, "help_assistant");
    assert_eq!(result.routing.priority, Priority::High);
    assert!(!result.requires_nlp);
}

#[test]
fn test_help_scenario_untagged() {
    // GIVEN "/help" without semantic tags
    let meta = help_registration(false).into_metadata();

    // WHEN classified
    let result = classify("/help", &meta).unwrap();

    // THEN the system default agent handles it
    assert!(result.confidence >= 0.90);
    assert_eq!(result.routing.agent, GENERAL_AGENT);
}

#[test]
fn test_announce_scenario() {
    // GIVEN "/announce" with one required parameter
    let meta = announce_registration().into_metadata();

    // WHEN classified
    let result = classify("/announce", &meta).unwrap();

    // THEN the parameter makes it less clear on its own
    let analysis = &result.parameter_analysis;
    assert_eq!(analysis.clarity_impact, ClarityImpact::Low);
    assert!(analysis.has_parameters);
    assert_eq!(analysis.parameter_count, 1);
    assert!(!analysis.parameters_optional);
    assert_eq!(result.confidence, 0.85);
}

#[test]
fn test_classify_by_alias_keeps_requested_name() {
    let registry = team_registry();
    let record = registry.resolve("/players", Scope::Main).unwrap();

    let result = classify("/players", &record).unwrap();

    assert_eq!(result.command, "/players");
    assert_eq!(result.routing.agent, "player_coordinator");
    assert_eq!(result.routing.matched_tag.as_deref(), Some("player"));
}

#[test]
fn test_empty_name_is_validation_failure() {
    let meta = help_registration(false).into_metadata();
    assert!(matches!(
        classify("", &meta),
        Err(RegistryError::InvalidCommandName { .. })
    ));
}

#[test]
fn test_non_metadata_argument_is_validation_failure() {
    for value in [
        serde_json::json!(null),
        serde_json::json!(42),
        serde_json::json!(["/help"]),
        serde_json::json!({"description": "missing everything else"}),
    ] {
        assert!(matches!(
            classify_value("/help", &value),
            Err(RegistryError::InvalidMetadata { .. })
        ));
    }
}

#[test]
fn test_custom_policy_changes_scores() {
    // GIVEN a policy that trusts examples more than anything else
    let policy = ClassifierPolicy {
        examples_confidence: 0.99,
        ..ClassifierPolicy::default()
    };
    let classifier = Classifier::new(policy).unwrap();

    // WHEN classifying "/help", which has examples
    let result = classifier
        .classify("/help", &help_registration(true).into_metadata())
        .unwrap();

    // THEN the examples candidate wins
    assert_eq!(result.confidence, 0.99);
    assert_eq!(result.confidence_signal, ConfidenceSignal::Examples);
}
