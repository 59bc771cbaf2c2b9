use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::{CommandMetadata, Scope};

/// Command name to its registered variants
///
/// Every (name, scope) pair holds at most one record. Alongside the variants,
/// each name has one canonical entry: the record used when no variant was
/// registered for the requesting scope.
#[derive(Debug, Clone, Default)]
pub struct ScopeIndex {
    variants: BTreeMap<String, BTreeMap<Scope, Arc<CommandMetadata>>>,
    canonical: BTreeMap<String, Arc<CommandMetadata>>,
}

impl ScopeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(&self, name: &str, scope: Scope) -> Option<&Arc<CommandMetadata>> {
        self.variants.get(name).and_then(|by_scope| by_scope.get(&scope))
    }

    pub fn canonical(&self, name: &str) -> Option<&Arc<CommandMetadata>> {
        self.canonical.get(name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.canonical.contains_key(name)
    }

    /// Store `record` under its own (name, scope) key, returning the replaced record.
    pub fn insert_variant(&mut self, record: Arc<CommandMetadata>) -> Option<Arc<CommandMetadata>> {
        self.variants
            .entry(record.name.clone())
            .or_default()
            .insert(record.scope, record)
    }

    /// Refresh the canonical entry after `record` was stored.
    ///
    /// The canonical entry follows universal registrations, is seeded by the
    /// first registration of a name, and tracks replacements of whichever
    /// variant it currently points at.
    pub fn refresh_canonical(&mut self, record: &Arc<CommandMetadata>) {
        let replace = match self.canonical.get(&record.name) {
            None => true,
            Some(current) => record.scope.is_universal() || current.scope == record.scope,
        };
        if replace {
            self.canonical
                .insert(record.name.clone(), Arc::clone(record));
        }
    }

    /// Canonical names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.canonical.keys().map(String::as_str)
    }

    /// Every registered variant, sorted by name then scope
    pub fn variants(&self) -> impl Iterator<Item = &Arc<CommandMetadata>> {
        self.variants.values().flat_map(|by_scope| by_scope.values())
    }

    /// Registered variants of one name, sorted by scope
    pub fn variants_of(&self, name: &str) -> impl Iterator<Item = &Arc<CommandMetadata>> {
        self.variants
            .get(name)
            .into_iter()
            .flat_map(|by_scope| by_scope.values())
    }

    pub fn name_count(&self) -> usize {
        self.canonical.len()
    }

    pub fn variant_count(&self) -> usize {
        self.variants.values().map(BTreeMap::len).sum()
    }
}
