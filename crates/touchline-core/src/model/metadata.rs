use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use super::handler::HandlerRef;
use super::scope::Scope;
use crate::errors::{RegistryError, Result};

/// How a command is invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    /// Interactive `/command` typed by a user
    #[serde(alias = "slash_command")]
    Slash,
    /// Phrase matched from free-form chat text
    #[serde(alias = "nl")]
    NaturalLanguage,
    /// Team administration command
    #[serde(alias = "admin")]
    Administrative,
    /// Bot housekeeping (help, ping, version)
    System,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Slash => "slash",
            CommandKind::NaturalLanguage => "natural_language",
            CommandKind::Administrative => "administrative",
            CommandKind::System => "system",
        }
    }
}

impl FromStr for CommandKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slash" | "slash_command" => Ok(CommandKind::Slash),
            "natural_language" | "nl" => Ok(CommandKind::NaturalLanguage),
            "administrative" | "admin" => Ok(CommandKind::Administrative),
            "system" => Ok(CommandKind::System),
            _ => Err(RegistryError::InvalidKind {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Required permission tier, ordered from least to most privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    Public,
    Player,
    Leadership,
    Admin,
    System,
}

impl PermissionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionLevel::Public => "public",
            PermissionLevel::Player => "player",
            PermissionLevel::Leadership => "leadership",
            PermissionLevel::Admin => "admin",
            PermissionLevel::System => "system",
        }
    }

    /// Whether a caller holding `self` may run a command requiring `required`.
    pub fn permits(&self, required: PermissionLevel) -> bool {
        *self >= required
    }
}

impl FromStr for PermissionLevel {
    type Err = RegistryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(PermissionLevel::Public),
            "player" => Ok(PermissionLevel::Player),
            "leadership" => Ok(PermissionLevel::Leadership),
            "admin" => Ok(PermissionLevel::Admin),
            "system" => Ok(PermissionLevel::System),
            _ => Err(RegistryError::InvalidPermission {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clarity tag declared by the registering feature
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClarityLevel {
    #[default]
    Clear,
    Ambiguous,
    Contextual,
}

impl ClarityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClarityLevel::Clear => "clear",
            ClarityLevel::Ambiguous => "ambiguous",
            ClarityLevel::Contextual => "contextual",
        }
    }
}

/// Natural-language understanding hints attached to a command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NluProfile {
    /// Command needs language-model disambiguation before dispatch
    pub requires_disambiguation: bool,
    pub clarity: ClarityLevel,
    /// Parameters may be omitted without making the intent unclear
    pub parameters_optional: bool,
    /// Routing bias tags, in declaration order without duplicates
    pub semantic_tags: Vec<String>,
}

impl NluProfile {
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !tag.is_empty() && !self.semantic_tags.contains(&tag) {
            self.semantic_tags.push(tag);
        }
    }
}

/// One registered command variant
///
/// Records are shared by `Arc` between the registry indexes and are never
/// mutated once registered; a later registration of the same (name, scope)
/// replaces the record wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Canonical name, e.g. `/list`
    pub name: String,
    pub description: String,
    pub kind: CommandKind,
    pub permission: PermissionLevel,
    /// Feature module that registered the command
    pub feature: String,
    #[serde(skip)]
    pub handler: HandlerRef,
    #[serde(default)]
    pub aliases: BTreeSet<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    /// Parameter name to description
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub nlu: NluProfile,
}

impl CommandMetadata {
    /// Check the record is usable as a registry entry
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetadata` if the name or feature is empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::InvalidMetadata {
                reason: "command name cannot be empty".to_string(),
            });
        }
        if self.feature.trim().is_empty() {
            return Err(RegistryError::InvalidMetadata {
                reason: format!("command {} has no owning feature", self.name),
            });
        }
        Ok(())
    }

    /// A parameter is optional when its description says so.
    pub fn has_required_parameters(&self) -> bool {
        self.parameters
            .values()
            .any(|desc| !desc.to_lowercase().contains("optional"))
    }

    /// Parameters exist and none of them is needed to understand the intent.
    pub fn parameters_optional(&self) -> bool {
        !self.parameters.is_empty()
            && (self.nlu.parameters_optional || !self.has_required_parameters())
    }
}
