use std::sync::Arc;

use crate::model::CommandMetadata;
use crate::registry::CommandRegistry;

/// Case-insensitive substring search over name, description, feature and aliases.
///
/// Covers every registered variant. Aliases are read from the live alias
/// index, so an alias that moved to another command matches its new owner
/// only. Results are unranked and ordered by name then scope. A blank query
/// matches nothing.
pub fn search(registry: &CommandRegistry, query: &str) -> Vec<Arc<CommandMetadata>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    registry
        .variants()
        .filter(|record| matches_query(registry, record, &needle))
        .cloned()
        .collect()
}

fn matches_query(registry: &CommandRegistry, record: &CommandMetadata, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.feature.to_lowercase().contains(needle)
        || registry
            .aliases_of(&record.name)
            .any(|alias| alias.to_lowercase().contains(needle))
}
