//! Raw textual form state, as a view hands it over on submit.

use std::collections::BTreeSet;

/// Submitted `(name, value)` entries in document order, plus the names of
/// checked toggles. Unchecked checkboxes never appear in `entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    entries: Vec<(String, String)>,
    checked: BTreeSet<String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            checked: BTreeSet::new(),
        }
    }

    /// Parse a `name=value` assignment. Only the first `=` splits; the name
    /// must be non-empty.
    pub fn parse_assignment(raw: &str) -> Option<(String, String)> {
        let (name, value) = raw.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some((name.to_string(), value.to_string()))
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Mark a toggle as checked.
    pub fn check(&mut self, name: impl Into<String>) {
        self.checked.insert(name.into());
    }

    pub fn with_checked(mut self, name: impl Into<String>) -> Self {
        self.check(name);
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.checked.contains(name)
    }
}
