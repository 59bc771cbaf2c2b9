//! Builder for registry entries
//!
//! Feature modules describe each command with a `CommandRegistration` and
//! hand it to [`crate::registry::CommandRegistry::register`].
//!
//! ```
//! use touchline_core::model::{
//!     CommandKind, CommandRegistration, HandlerRef, HandlerResult, PermissionLevel, Scope,
//! };
//!
//! let reg = CommandRegistration::new(
//!     "/announce",
//!     "Send an announcement to the whole team",
//!     "communication",
//!     HandlerRef::from_fn(|_, _| HandlerResult::defer(None)),
//! )
//! .kind(CommandKind::Administrative)
//! .permission(PermissionLevel::Leadership)
//! .scope(Scope::Leadership)
//! .parameter("message", "Announcement text");
//!
//! assert_eq!(reg.name(), "/announce");
//! ```

use std::collections::{BTreeMap, BTreeSet};

use super::handler::HandlerRef;
use super::metadata::{ClarityLevel, CommandKind, CommandMetadata, NluProfile, PermissionLevel};
use super::scope::Scope;

#[derive(Debug, Clone)]
pub struct CommandRegistration {
    metadata: CommandMetadata,
}

impl CommandRegistration {
    /// Start a registration with the required fields.
    ///
    /// Defaults: slash kind, player permission, universal scope, clear NLU profile.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        feature: impl Into<String>,
        handler: HandlerRef,
    ) -> Self {
        Self {
            metadata: CommandMetadata {
                name: name.into(),
                description: description.into(),
                kind: CommandKind::Slash,
                permission: PermissionLevel::Player,
                feature: feature.into(),
                handler,
                aliases: BTreeSet::new(),
                examples: Vec::new(),
                parameters: BTreeMap::new(),
                help_text: None,
                scope: Scope::Universal,
                nlu: NluProfile::default(),
            },
        }
    }

    pub fn kind(mut self, kind: CommandKind) -> Self {
        self.metadata.kind = kind;
        self
    }

    pub fn permission(mut self, permission: PermissionLevel) -> Self {
        self.metadata.permission = permission;
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.metadata.scope = scope;
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.metadata.aliases.insert(alias.into());
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata
            .aliases
            .extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.metadata.examples.push(example.into());
        self
    }

    pub fn examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata
            .examples
            .extend(examples.into_iter().map(Into::into));
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.metadata
            .parameters
            .insert(name.into(), description.into());
        self
    }

    pub fn help(mut self, help_text: impl Into<String>) -> Self {
        self.metadata.help_text = Some(help_text.into());
        self
    }

    pub fn nlu(mut self, nlu: NluProfile) -> Self {
        self.metadata.nlu = nlu;
        self
    }

    pub fn requires_disambiguation(mut self, value: bool) -> Self {
        self.metadata.nlu.requires_disambiguation = value;
        self
    }

    pub fn clarity(mut self, clarity: ClarityLevel) -> Self {
        self.metadata.nlu.clarity = clarity;
        self
    }

    pub fn parameters_optional(mut self, value: bool) -> Self {
        self.metadata.nlu.parameters_optional = value;
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.metadata.nlu.add_tag(tag);
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn metadata(&self) -> &CommandMetadata {
        &self.metadata
    }

    pub fn into_metadata(self) -> CommandMetadata {
        self.metadata
    }
}

impl From<CommandMetadata> for CommandRegistration {
    fn from(metadata: CommandMetadata) -> Self {
        Self { metadata }
    }
}
