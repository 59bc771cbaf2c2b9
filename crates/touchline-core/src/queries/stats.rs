//! Registry aggregate counts

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::registry::CommandRegistry;

/// Aggregate counts over a registry
///
/// `total_commands` counts distinct canonical names; the per-dimension maps
/// count every registered (name, scope) variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total_commands: usize,
    pub total_variants: usize,
    pub total_aliases: usize,
    pub by_kind: BTreeMap<String, usize>,
    pub by_permission: BTreeMap<String, usize>,
    pub by_feature: BTreeMap<String, usize>,
    pub by_scope: BTreeMap<String, usize>,
}

/// Compute aggregate counts for `registry`
pub fn stats(registry: &CommandRegistry) -> RegistryStats {
    let mut out = RegistryStats {
        total_commands: registry.len(),
        total_variants: registry.variant_count(),
        total_aliases: registry.alias_count(),
        ..RegistryStats::default()
    };

    for record in registry.variants() {
        *out.by_kind.entry(record.kind.as_str().to_string()).or_default() += 1;
        *out
            .by_permission
            .entry(record.permission.as_str().to_string())
            .or_default() += 1;
        *out.by_feature.entry(record.feature.clone()).or_default() += 1;
        *out.by_scope.entry(record.scope.as_str().to_string()).or_default() += 1;
    }

    out
}
