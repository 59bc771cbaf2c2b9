//! Command registry: alias index, scope index and per-feature membership
//!
//! The registry is built once during bootstrap through [`CommandRegistry::register`]
//! and then queried read-only. Queries take `&self`, so a built registry can be
//! shared across concurrently handled chat sessions without locking.

pub mod alias_index;
pub mod register;
pub mod resolve;
pub mod scope_index;

use std::collections::BTreeMap;
use std::sync::Arc;

pub use alias_index::AliasIndex;
pub use register::RegisterOutcome;
pub use scope_index::ScopeIndex;

use crate::model::CommandMetadata;

#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    pub(crate) scopes: ScopeIndex,
    pub(crate) aliases: AliasIndex,
    /// Feature name to its command names, in registration order
    pub(crate) features: BTreeMap<String, Vec<String>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct canonical command names
    pub fn len(&self) -> usize {
        self.scopes.name_count()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.name_count() == 0
    }

    /// Number of registered (name, scope) variants
    pub fn variant_count(&self) -> usize {
        self.scopes.variant_count()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Canonical names in sorted order
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.scopes.names()
    }

    /// Canonical record of `name`, ignoring scope visibility
    pub fn canonical_record(&self, name: &str) -> Option<&Arc<CommandMetadata>> {
        self.scopes.canonical(name)
    }

    /// Every registered variant, sorted by name then scope
    pub fn variants(&self) -> impl Iterator<Item = &Arc<CommandMetadata>> {
        self.scopes.variants()
    }

    /// Aliases currently resolving to `canonical`
    pub fn aliases_of<'a>(&'a self, canonical: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.aliases.aliases_of(canonical)
    }

    /// Feature names in sorted order
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    /// Command names registered by `feature`, in registration order
    pub fn feature_commands(&self, feature: &str) -> Option<&[String]> {
        self.features.get(feature).map(Vec::as_slice)
    }
}
