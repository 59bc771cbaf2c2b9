//! Built-in system commands available in every chat

use touchline_core::model::{
    CommandKind, CommandRegistration, HandlerRef, HandlerResult, PermissionLevel,
};
use touchline_core::registry::CommandRegistry;

use crate::bootstrap::FeatureModule;

pub const SYSTEM_FEATURE: &str = "system";

/// `/help`, `/ping` and `/version`
///
/// `/help` defers to the help agent, which renders the menu for the caller's
/// chat from the registry.
#[derive(Debug, Clone)]
pub struct SystemFeature {
    version: String,
}

impl Default for SystemFeature {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

impl SystemFeature {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    fn registrations(&self) -> Vec<CommandRegistration> {
        let version_text = format!("Touchline {}", self.version);
        vec![
            system_command(
                "/help",
                "Show the commands available in this chat",
                HandlerRef::from_fn(|_, _| HandlerResult::defer(Some("help_assistant".to_string()))),
            )
            .alias("/commands")
            .examples(["/help", "/help /list"])
            .parameter("command", "Optional command to explain")
            .help("Without arguments lists every command you can use here.")
            .tag("help"),
            system_command(
                "/ping",
                "Check that the bot is responding",
                HandlerRef::from_fn(|_, _| HandlerResult::text("pong")),
            )
            .example("/ping"),
            system_command(
                "/version",
                "Show the running bot version",
                HandlerRef::from_fn(move |_, _| HandlerResult::text(version_text.clone())),
            )
            .example("/version"),
        ]
    }
}

fn system_command(name: &str, description: &str, handler: HandlerRef) -> CommandRegistration {
    CommandRegistration::new(name, description, SYSTEM_FEATURE, handler)
        .kind(CommandKind::System)
        .permission(PermissionLevel::Public)
}

impl FeatureModule for SystemFeature {
    fn name(&self) -> &str {
        SYSTEM_FEATURE
    }

    fn register(&self, registry: &mut CommandRegistry) -> touchline_core::Result<()> {
        for registration in self.registrations() {
            registry.register(registration)?;
        }
        Ok(())
    }
}
