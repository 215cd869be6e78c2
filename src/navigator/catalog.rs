//! The ordered set of selectable functions.

use super::NavigatorError;

/// Functions offered when no catalog is configured.
pub const DEFAULT_FUNCTIONS: [&str; 3] = ["Read Text", "Describe Objects", "Describe Nature"];

/// Ordered, non-empty list of distinct display names.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCatalog {
    entries: Vec<String>,
}

impl FunctionCatalog {
    /// Build a catalog, trimming each entry.
    ///
    /// Fails on an empty list, a blank entry or a repeated entry.
    pub fn new<I, S>(entries: I) -> Result<Self, NavigatorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut validated: Vec<String> = Vec::new();

        for (index, entry) in entries.into_iter().enumerate() {
            let name = entry.as_ref().trim();
            if name.is_empty() {
                return Err(NavigatorError::BlankEntry { index });
            }
            if validated.iter().any(|existing| existing == name) {
                return Err(NavigatorError::DuplicateEntry {
                    name: name.to_string(),
                });
            }
            validated.push(name.to_string());
        }

        if validated.is_empty() {
            return Err(NavigatorError::EmptyCatalog);
        }

        Ok(Self { entries: validated })
    }

    /// Number of entries (always at least one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Whether `name` is one of the entries.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for FunctionCatalog {
    fn default() -> Self {
        Self {
            entries: DEFAULT_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::ops::Index<usize> for FunctionCatalog {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.entries[index]
    }
}
