//! Declarative command manifests
//!
//! A manifest is a TOML document listing features and their commands, plus
//! an optional `[classifier]` table overriding the classifier policy:
//!
//! ```toml
//! [classifier]
//! direct_dispatch_threshold = 0.85
//!
//! [[features]]
//! name = "player_registration"
//!
//! [[features.commands]]
//! name = "/list"
//! description = "List active players"
//! scope = "main_chat"
//! aliases = ["/players"]
//! tags = ["player"]
//!
//! [features.commands.parameters]
//! filter = "Optional status filter"
//! ```
//!
//! Manifest commands carry no executable body; they are registered with the
//! detached handler, which defers to the agent layer.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use touchline_core::classification::{Classifier, ClassifierPolicy};
use touchline_core::model::{
    ClarityLevel, CommandKind, CommandRegistration, HandlerRef, PermissionLevel, Scope,
};
use touchline_core::registry::CommandRegistry;

use crate::bootstrap::FeatureModule;
use crate::errors::{EngineError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandManifest {
    #[serde(default)]
    pub classifier: Option<ClassifierPolicy>,
    #[serde(default)]
    pub features: Vec<ManifestFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestFeature {
    pub name: String,
    #[serde(default)]
    pub commands: Vec<ManifestCommand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestCommand {
    pub name: String,
    pub description: String,
    #[serde(default = "default_kind")]
    pub kind: CommandKind,
    #[serde(default = "default_permission")]
    pub permission: PermissionLevel,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub clarity: ClarityLevel,
    #[serde(default)]
    pub requires_disambiguation: bool,
    #[serde(default)]
    pub parameters_optional: bool,
}

fn default_kind() -> CommandKind {
    CommandKind::Slash
}

fn default_permission() -> PermissionLevel {
    PermissionLevel::Player
}

impl ManifestCommand {
    fn to_registration(&self, feature: &str) -> CommandRegistration {
        let mut registration = CommandRegistration::new(
            self.name.clone(),
            self.description.clone(),
            feature,
            HandlerRef::detached(),
        )
        .kind(self.kind)
        .permission(self.permission)
        .scope(self.scope)
        .aliases(self.aliases.iter().cloned())
        .examples(self.examples.iter().cloned())
        .clarity(self.clarity)
        .requires_disambiguation(self.requires_disambiguation)
        .parameters_optional(self.parameters_optional);

        for (name, description) in &self.parameters {
            registration = registration.parameter(name.clone(), description.clone());
        }
        for tag in &self.tags {
            registration = registration.tag(tag.clone());
        }
        if let Some(help) = &self.help {
            registration = registration.help(help.clone());
        }
        registration
    }
}

impl FeatureModule for ManifestFeature {
    fn name(&self) -> &str {
        &self.name
    }

    fn register(&self, registry: &mut CommandRegistry) -> touchline_core::Result<()> {
        for command in &self.commands {
            registry.register(command.to_registration(&self.name))?;
        }
        Ok(())
    }
}

impl CommandManifest {
    /// Features in declaration order, ready for [`crate::bootstrap`]
    pub fn modules(&self) -> Vec<&dyn FeatureModule> {
        self.features
            .iter()
            .map(|feature| feature as &dyn FeatureModule)
            .collect()
    }

    /// Classifier configured by the `[classifier]` table, or the stock one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if the policy fails validation.
    pub fn classifier(&self) -> Result<Classifier> {
        let policy = self.classifier.clone().unwrap_or_default();
        Ok(Classifier::new(policy)?)
    }

    pub fn command_count(&self) -> usize {
        self.features.iter().map(|f| f.commands.len()).sum()
    }
}

/// Parse manifest text.
///
/// # Errors
///
/// * `ManifestParse` - not valid TOML, or a field has the wrong shape
/// * `Registry(InvalidPolicy)` - the `[classifier]` table is out of range
pub fn parse_manifest(text: &str) -> Result<CommandManifest> {
    let manifest: CommandManifest =
        toml::from_str(text).map_err(|e| EngineError::ManifestParse {
            message: e.to_string(),
        })?;

    if let Some(feature) = manifest.features.iter().find(|f| f.name.trim().is_empty()) {
        return Err(EngineError::ManifestParse {
            message: format!(
                "feature with {} command(s) has an empty name",
                feature.commands.len()
            ),
        });
    }
    if let Some(policy) = &manifest.classifier {
        policy.validate()?;
    }

    Ok(manifest)
}

/// Read and parse a manifest file.
///
/// # Errors
///
/// * `ManifestIo` - the file cannot be read
/// * any error of [`parse_manifest`]
pub fn load_manifest(path: &Path) -> Result<CommandManifest> {
    let text = std::fs::read_to_string(path).map_err(|e| EngineError::ManifestIo {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let manifest = parse_manifest(&text)?;
    tracing::debug!(
        path = %path.display(),
        features = manifest.features.len(),
        commands = manifest.command_count(),
        "manifest loaded"
    );
    Ok(manifest)
}
