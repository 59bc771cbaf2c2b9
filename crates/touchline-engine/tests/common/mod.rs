use touchline_core::registry::CommandRegistry;
use touchline_engine::{bootstrap, parse_manifest, CommandManifest, SystemFeature};

#[allow(dead_code)]
pub const TEAM_MANIFEST: &str = r#"
[[features]]
name = "player_registration"

[[features.commands]]
name = "/list"
description = "List active players"
aliases = ["/players"]
tags = ["player"]

[[features.commands]]
name = "/list"
description = "List all players including pending approvals"
scope = "leadership"
permission = "leadership"

[[features.commands]]
name = "/register"
description = "Register"
clarity = "ambiguous"

[features.commands.parameters]
name = "Player full name"

[[features]]
name = "communication"

[[features.commands]]
name = "/announce"
description = "Send an announcement to the whole team"
kind = "administrative"
scope = "leadership"
permission = "leadership"
tags = ["team"]

[features.commands.parameters]
message = "Announcement text"
"#;

#[allow(dead_code)]
pub fn team_manifest() -> CommandManifest {
    parse_manifest(TEAM_MANIFEST).expect("fixture manifest parses")
}

/// Builtins followed by the team manifest
#[allow(dead_code)]
pub fn team_registry() -> CommandRegistry {
    let manifest = team_manifest();
    let system = SystemFeature::new("0.0.0-test");
    let mut modules: Vec<&dyn touchline_engine::FeatureModule> = vec![&system];
    modules.extend(manifest.modules());
    bootstrap(&modules).expect("fixture bootstrap")
}
