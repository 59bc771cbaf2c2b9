use touchline_core::model::{
    CommandKind, CommandRegistration, HandlerRef, HandlerResult, PermissionLevel, Scope,
};
use touchline_core::CommandRegistry;

/// Handler that replies with fixed text; each call yields a new identity
#[allow(dead_code)]
pub fn text_handler(reply: &'static str) -> HandlerRef {
    HandlerRef::from_fn(move |_, _| HandlerResult::text(reply))
}

/// "/help" as a system command with two usage examples
#[allow(dead_code)]
pub fn help_registration(tagged: bool) -> CommandRegistration {
    let reg = CommandRegistration::new(
        "/help",
        "Show the commands available in this chat",
        "system",
        text_handler("help"),
    )
    .kind(CommandKind::System)
    .permission(PermissionLevel::Public)
    .examples(["/help", "/help /list"])
    .alias("/h");
    if tagged {
        reg.tag("help")
    } else {
        reg
    }
}

/// "/announce" as a leadership-only administrative command
#[allow(dead_code)]
pub fn announce_registration() -> CommandRegistration {
    CommandRegistration::new(
        "/announce",
        "Send an announcement to the whole team",
        "communication",
        text_handler("announced"),
    )
    .kind(CommandKind::Administrative)
    .permission(PermissionLevel::Leadership)
    .scope(Scope::Leadership)
    .parameter("message", "Announcement text")
}

/// Registry resembling a small team bot
#[allow(dead_code)]
pub fn team_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    let regs = [
        help_registration(true),
        announce_registration(),
        CommandRegistration::new(
            "/list",
            "List active players",
            "player_registration",
            text_handler("list"),
        )
        .alias("/players")
        .tag("player"),
        CommandRegistration::new(
            "/list",
            "List all players including pending approvals",
            "player_registration",
            text_handler("list-all"),
        )
        .scope(Scope::Leadership)
        .permission(PermissionLevel::Leadership),
        CommandRegistration::new(
            "/addplayer",
            "Add a new player to the team",
            "team_administration",
            text_handler("added"),
        )
        .kind(CommandKind::Administrative)
        .permission(PermissionLevel::Leadership)
        .parameter("name", "Player full name")
        .parameter("phone", "Player phone number"),
        CommandRegistration::new(
            "/squad",
            "Show the selected squad",
            "match_management",
            text_handler("squad"),
        )
        .parameter("match_id", "Optional match id")
        .alias("/sysadmin_squad")
        .tag("squad"),
    ];
    for reg in regs {
        registry.register(reg).expect("fixture registration");
    }
    registry
}
