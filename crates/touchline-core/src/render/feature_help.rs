use std::collections::BTreeSet;

use crate::errors::{RegistryError, Result};
use crate::registry::CommandRegistry;

/// Render the command list of one feature, sorted by name, with aliases.
///
/// Each line describes the feature's own variant of the command; when the
/// feature owns several scopes of one name the universal one is shown.
/// Commands whose every variant was taken over by another feature are left out.
///
/// # Errors
/// * `FeatureNotFound` - no command was ever registered by `feature`
pub fn render_feature_help(registry: &CommandRegistry, feature: &str) -> Result<String> {
    if registry.feature_commands(feature).is_none() {
        return Err(RegistryError::FeatureNotFound {
            feature: feature.to_string(),
        });
    }

    let mut seen = BTreeSet::new();
    let mut output = format!("Feature: {}\n\n", feature);
    for record in registry
        .variants()
        .filter(|record| record.feature == feature)
    {
        let name = record.name.as_str();
        if !seen.insert(name) {
            continue;
        }
        let aliases: Vec<&str> = registry.aliases_of(name).collect();
        if aliases.is_empty() {
            output.push_str(&format!("  {} - {}\n", name, record.description));
        } else {
            output.push_str(&format!(
                "  {} ({}) - {}\n",
                name,
                aliases.join(", "),
                record.description
            ));
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommandRegistration, HandlerRef, Scope};

    #[test]
    fn test_commands_sorted_with_aliases() {
        let mut registry = CommandRegistry::new();
        let h = HandlerRef::detached();
        registry
            .register(CommandRegistration::new("/status", "Show status", "players", h.clone()))
            .unwrap();
        registry
            .register(
                CommandRegistration::new("/list", "List players", "players", h.clone())
                    .aliases(["/ls", "/players"]),
            )
            .unwrap();
        registry
            .register(CommandRegistration::new("/help", "Show help", "system", h))
            .unwrap();

        let text = render_feature_help(&registry, "players").unwrap();
        assert_eq!(
            text,
            "Feature: players\n\n  /list (/ls, /players) - List players\n  /status - Show status\n"
        );
    }

    #[test]
    fn test_feature_shows_its_own_variant() {
        let mut registry = CommandRegistry::new();
        let h = HandlerRef::detached();
        registry
            .register(
                CommandRegistration::new("/list", "Leadership list", "ops", h.clone())
                    .scope(Scope::Leadership),
            )
            .unwrap();
        registry
            .register(CommandRegistration::new("/list", "Players list", "players", h))
            .unwrap();

        let ops = render_feature_help(&registry, "ops").unwrap();
        assert_eq!(ops, "Feature: ops\n\n  /list - Leadership list\n");

        let players = render_feature_help(&registry, "players").unwrap();
        assert_eq!(players, "Feature: players\n\n  /list - Players list\n");
    }

    #[test]
    fn test_overridden_command_left_out() {
        let mut registry = CommandRegistry::new();
        let h = HandlerRef::detached();
        registry
            .register(CommandRegistration::new("/list", "Old list", "legacy", h.clone()))
            .unwrap();
        registry
            .register(CommandRegistration::new("/list", "Players list", "players", h))
            .unwrap();

        let legacy = render_feature_help(&registry, "legacy").unwrap();
        assert_eq!(legacy, "Feature: legacy\n\n");
    }

    #[test]
    fn test_unknown_feature() {
        let err = render_feature_help(&CommandRegistry::new(), "ghosts").unwrap_err();
        assert_eq!(
            err,
            RegistryError::FeatureNotFound {
                feature: "ghosts".to_string()
            }
        );
    }
}
