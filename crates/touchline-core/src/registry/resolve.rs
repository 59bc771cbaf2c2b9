use std::collections::BTreeSet;
use std::sync::Arc;

use super::CommandRegistry;
use crate::errors::{RegistryError, Result};
use crate::model::{CommandMetadata, PermissionLevel, Scope};

impl CommandRegistry {
    /// Canonical name for `name_or_alias`, if either is known.
    ///
    /// Aliases are dereferenced first, so an alias that collides with a
    /// registered name shadows that name.
    pub fn canonical_name<'a>(&'a self, name_or_alias: &'a str) -> Option<&'a str> {
        if let Some(target) = self
            .aliases
            .target(name_or_alias)
            .filter(|target| self.scopes.contains_name(target))
        {
            return Some(target);
        }
        self.scopes
            .contains_name(name_or_alias)
            .then_some(name_or_alias)
    }

    /// Look up the command visible from `scope`.
    ///
    /// Order: the exact (name, scope) variant, then the canonical record when
    /// it is universal or belongs to the requesting scope. Anything else is
    /// not visible and yields `None`.
    pub fn resolve(&self, name: &str, scope: Scope) -> Option<Arc<CommandMetadata>> {
        let canonical = self.canonical_name(name)?;

        if let Some(record) = self.scopes.variant(canonical, scope) {
            return Some(Arc::clone(record));
        }

        self.scopes
            .canonical(canonical)
            .filter(|record| record.scope.applies_to(scope))
            .map(Arc::clone)
    }

    /// Like [`resolve`](Self::resolve) but reports a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns `CommandNotFound` when nothing is visible from `scope`.
    pub fn require(&self, name: &str, scope: Scope) -> Result<Arc<CommandMetadata>> {
        self.resolve(name, scope)
            .ok_or_else(|| RegistryError::CommandNotFound {
                command: name.to_string(),
                scope: scope.to_string(),
            })
    }

    /// Every command visible from `scope`, one record per name, sorted by name.
    pub fn list_for_scope(&self, scope: Scope) -> Vec<Arc<CommandMetadata>> {
        let mut seen = BTreeSet::new();
        self.scopes
            .names()
            .filter_map(|name| self.resolve(name, scope))
            .filter(|record| seen.insert(record.name.clone()))
            .collect()
    }

    /// Commands visible from `scope` that a caller holding `level` may run.
    pub fn list_for_permission(
        &self,
        scope: Scope,
        level: PermissionLevel,
    ) -> Vec<Arc<CommandMetadata>> {
        self.list_for_scope(scope)
            .into_iter()
            .filter(|record| level.permits(record.permission))
            .collect()
    }
}
