use std::collections::{HashMap, HashSet};

/// All declarations of a single locale's string table.
///
/// Built once per locale by [`parse_table_source`](crate::core::parsers::strings::parse_table_source)
/// and never mutated afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTable {
    /// Locale identifier (e.g., "en", "fr").
    pub locale: String,
    /// Path of the backing table file, as shown in diagnostics.
    pub file_path: String,
    /// Translation values, keyed by translation key.
    pub entries: HashMap<String, String>,
    /// 1-based line of the retained declaration of each key.
    pub key_lines: HashMap<String, usize>,
    /// Keys annotated with `// ignore-same-translation-warning`.
    pub ignored_same_translation: HashSet<String>,
}

impl LocaleTable {
    pub fn new(locale: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn line(&self, key: &str) -> Option<usize> {
        self.key_lines.get(key).copied()
    }

    pub fn is_ignored_same_translation(&self, key: &str) -> bool {
        self.ignored_same_translation.contains(key)
    }

    /// Keys in lexical order, for reproducible diagnostics.
    pub fn sorted_keys(&self) -> Vec<&String> {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// An empty table means the locale has no data (e.g., its file could not be read).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a declaration unless the key is already present.
    ///
    /// Returns the line of the retained declaration when `key` was already defined.
    pub(crate) fn insert_first(
        &mut self,
        key: &str,
        value: &str,
        line: usize,
    ) -> Result<(), usize> {
        if let Some(first_line) = self.key_lines.get(key) {
            return Err(*first_line);
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.key_lines.insert(key.to_string(), line);
        Ok(())
    }
}
