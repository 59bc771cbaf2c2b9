//! Stats, search and help rendering over a populated registry

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{help_registration, team_registry, text_handler};
use touchline_core::model::{CommandRegistration, Scope};
use touchline_core::render::{render_command_help, render_feature_help};
use touchline_core::{search, stats, RegistryError};

#[test]
fn test_search_admin_matches_every_field() {
    // GIVEN commands mentioning "admin" in feature, description or alias
    let registry = team_registry();

    // WHEN searching
    let results = search(&registry, "admin");

    // THEN every matching variant is returned, and only those
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["/addplayer", "/squad"]);
    for record in registry.variants() {
        let mentions = record.name.to_lowercase().contains("admin")
            || record.description.to_lowercase().contains("admin")
            || record.feature.to_lowercase().contains("admin")
            || registry
                .aliases_of(&record.name)
                .any(|a| a.to_lowercase().contains("admin"));
        assert_eq!(mentions, names.contains(&record.name.as_str()));
    }
}

#[test]
fn test_stats_unchanged_by_identical_reregistration() {
    // GIVEN a populated registry
    let mut registry = team_registry();
    let before = stats(&registry);

    // WHEN an existing record is registered again unchanged
    let existing = registry.resolve("/help", Scope::Main).unwrap();
    registry
        .register((*existing).clone().into())
        .unwrap();

    // THEN the counts are identical
    assert_eq!(stats(&registry), before);
    assert_eq!(before.total_commands, 5);
    assert_eq!(before.total_variants, 6);
    assert_eq!(before.total_aliases, 3);
}

#[test]
fn test_stats_serializes_for_the_router() {
    let value = serde_json::to_value(stats(&team_registry())).unwrap();
    assert_eq!(value["by_kind"]["system"], 1);
    assert_eq!(value["by_scope"]["leadership"], 2);
}

#[test]
fn test_command_help_lists_sections() {
    let registry = team_registry();
    let text = render_command_help(&registry, "/help", Scope::Private).unwrap();

    assert!(text.starts_with("/help - Show the commands available in this chat\n"));
    assert!(text.contains("Examples:\n  /help\n  /help /list\n"));
    assert!(text.contains("Aliases: /h\n"));
    assert!(text.contains("Permission: public\n"));
    assert!(text.contains("Feature: system\n"));
}

#[test]
fn test_feature_help_sorted() {
    let registry = team_registry();
    let text = render_feature_help(&registry, "player_registration").unwrap();
    assert_eq!(
        text,
        "Feature: player_registration\n\n  /list (/players) - List active players\n"
    );
}

#[test]
fn test_feature_help_uses_the_features_own_variant() {
    // GIVEN "ops" owning a leadership "/rota" and "training" a universal one
    let mut registry = team_registry();
    registry
        .register(
            CommandRegistration::new("/rota", "Edit the rota", "ops", text_handler("edit"))
                .scope(Scope::Leadership),
        )
        .unwrap();
    registry
        .register(CommandRegistration::new(
            "/rota",
            "Show the rota",
            "training",
            text_handler("show"),
        ))
        .unwrap();

    // WHEN rendering each feature's help
    let ops = render_feature_help(&registry, "ops").unwrap();
    let training = render_feature_help(&registry, "training").unwrap();

    // THEN each lists its own description
    assert_eq!(ops, "Feature: ops\n\n  /rota - Edit the rota\n");
    assert_eq!(training, "Feature: training\n\n  /rota - Show the rota\n");
}

#[test]
fn test_feature_help_unknown_feature() {
    let mut registry = team_registry();
    registry.register(help_registration(true)).unwrap();
    assert!(matches!(
        render_feature_help(&registry, "payments"),
        Err(RegistryError::FeatureNotFound { .. })
    ));
}
