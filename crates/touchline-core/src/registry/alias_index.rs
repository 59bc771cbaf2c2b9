use std::collections::BTreeMap;

/// Alternate name to canonical command name
///
/// Each alias maps to exactly one canonical name; assigning an alias again
/// replaces the previous mapping.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    targets: BTreeMap<String, String>,
}

impl AliasIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point `alias` at `canonical`, returning the previous target if it differed.
    pub fn assign(&mut self, alias: &str, canonical: &str) -> Option<String> {
        match self
            .targets
            .insert(alias.to_string(), canonical.to_string())
        {
            Some(previous) if previous != canonical => Some(previous),
            _ => None,
        }
    }

    pub fn target(&self, alias: &str) -> Option<&str> {
        self.targets.get(alias).map(String::as_str)
    }

    /// All aliases currently pointing at `canonical`, sorted
    pub fn aliases_of<'a>(&'a self, canonical: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.targets
            .iter()
            .filter(move |(_, target)| target.as_str() == canonical)
            .map(|(alias, _)| alias.as_str())
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
