//! Alternate flag names.

/// Maps alias names to canonical option names, in registration order.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, alias: &str, canonical: &str) {
        self.entries.push((alias.to_owned(), canonical.to_owned()));
    }

    /// Canonical name for `alias`, if it is one.
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == alias)
            .map(|(_, canonical)| canonical.as_str())
    }

    /// First alias registered for `canonical`, used by help output.
    pub fn alias_for(&self, canonical: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, target)| target == canonical)
            .map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.resolve(alias).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
