use std::sync::Arc;

use touchline_core_types::schema::{EVENT_ALIAS_REASSIGNED, EVENT_REGISTRATION_CONFLICT};

use super::CommandRegistry;
use crate::errors::{RegistryError, Result};
use crate::model::{CommandMetadata, CommandRegistration};

/// What a registration did to the (name, scope) key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Key was free; record inserted
    Inserted,
    /// Same handler, feature and description already registered; nothing changed
    Unchanged,
    /// The owning feature replaced its own record
    Refined,
    /// A different feature replaced the record (conflict logged)
    Overridden { previous_feature: String },
}

impl CommandRegistry {
    /// Register one command variant under its (name, scope) key
    ///
    /// Conflict policy, in order:
    /// 1. identical handler, feature and description → no-op
    /// 2. same feature → silent overwrite
    /// 3. different feature → overwrite with a conflict warning
    ///
    /// Aliases are then pointed at the command (last registration wins) and
    /// the command is added to its feature's membership list. The handler is
    /// never invoked.
    ///
    /// # Errors
    ///
    /// * `InvalidCommandName` - name is empty or whitespace-only
    /// * `InvalidFeature` - feature is empty or whitespace-only
    pub fn register(&mut self, registration: CommandRegistration) -> Result<RegisterOutcome> {
        let metadata = registration.into_metadata();

        if metadata.name.trim().is_empty() {
            return Err(RegistryError::InvalidCommandName {
                reason: "Command name cannot be empty or whitespace-only".to_string(),
            });
        }
        if metadata.feature.trim().is_empty() {
            return Err(RegistryError::InvalidFeature {
                command: metadata.name,
            });
        }

        let outcome = match self.scopes.variant(&metadata.name, metadata.scope) {
            None => RegisterOutcome::Inserted,
            Some(existing) if is_identical(existing, &metadata) => {
                tracing::debug!(
                    command = %metadata.name,
                    scope = %metadata.scope,
                    "identical registration ignored"
                );
                return Ok(RegisterOutcome::Unchanged);
            }
            Some(existing) if existing.feature == metadata.feature => {
                tracing::debug!(
                    command = %metadata.name,
                    scope = %metadata.scope,
                    feature = %metadata.feature,
                    "feature refined its own command"
                );
                RegisterOutcome::Refined
            }
            Some(existing) => {
                tracing::warn!(
                    event = EVENT_REGISTRATION_CONFLICT,
                    command = %metadata.name,
                    scope = %metadata.scope,
                    previous_feature = %existing.feature,
                    feature = %metadata.feature,
                    "command registered by another feature; last registration wins"
                );
                RegisterOutcome::Overridden {
                    previous_feature: existing.feature.clone(),
                }
            }
        };

        let record = Arc::new(metadata);
        self.scopes.insert_variant(Arc::clone(&record));
        self.scopes.refresh_canonical(&record);

        for alias in &record.aliases {
            if alias == &record.name {
                continue;
            }
            if let Some(previous) = self.aliases.assign(alias, &record.name) {
                tracing::warn!(
                    event = EVENT_ALIAS_REASSIGNED,
                    alias = %alias,
                    previous_command = %previous,
                    command = %record.name,
                    "alias now resolves to a different command"
                );
            }
        }

        let members = self.features.entry(record.feature.clone()).or_default();
        if !members.contains(&record.name) {
            members.push(record.name.clone());
        }

        tracing::debug!(
            command = %record.name,
            scope = %record.scope,
            feature = %record.feature,
            outcome = ?outcome,
            "command registered"
        );

        Ok(outcome)
    }
}

fn is_identical(existing: &CommandMetadata, incoming: &CommandMetadata) -> bool {
    existing.handler.same_as(&incoming.handler)
        && existing.feature == incoming.feature
        && existing.description == incoming.description
}
