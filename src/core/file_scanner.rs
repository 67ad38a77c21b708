//! Source tree scanning for translation key references.
//!
//! Walks the source root, keeps files with a configured extension and
//! collects capture group 1 of every match of every configured pattern.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use regex::Regex;
use walkdir::{DirEntry, WalkDir};

/// Result of scanning a source tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Every matched key, in match order. Duplicates are kept.
    pub keys: Vec<String>,
    /// Source files that were read and searched.
    pub files_scanned: usize,
    /// Entries that could not be accessed or read.
    pub skipped_count: usize,
}

/// Extracts translation keys from source files with an ordered list of patterns.
pub struct SourceScanner {
    patterns: Vec<Regex>,
    extensions: HashSet<String>,
    ignores: Vec<Pattern>,
    verbose: bool,
}

impl SourceScanner {
    pub fn new(patterns: Vec<Regex>, extensions: impl IntoIterator<Item = String>) -> Self {
        Self {
            patterns,
            extensions: extensions
                .into_iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
            ignores: Vec::new(),
            verbose: false,
        }
    }

    /// Exclude paths matching any of these glob patterns from the walk.
    pub fn with_ignores(mut self, ignores: Vec<Pattern>) -> Self {
        self.ignores = ignores;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Recursively scan `root` and collect every referenced key.
    ///
    /// Unreadable files and inaccessible entries are skipped.
    pub fn scan(&self, root: &Path) -> ScanResult {
        let mut result = ScanResult::default();

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(root, entry));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    if self.verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !self.is_scannable_file(path) {
                continue;
            }

            match fs::read_to_string(path) {
                Ok(content) => {
                    result.keys.extend(self.extract_keys(&content));
                    result.files_scanned += 1;
                }
                Err(e) => {
                    result.skipped_count += 1;
                    if self.verbose {
                        eprintln!(
                            "{} Cannot read source file {}: {}",
                            "warning:".bold().yellow(),
                            path.display(),
                            e
                        );
                    }
                }
            }
        }

        result
    }

    /// Collect capture group 1 of each non-overlapping match, pattern by pattern.
    pub fn extract_keys(&self, content: &str) -> Vec<String> {
        self.patterns
            .iter()
            .flat_map(|pattern| {
                pattern
                    .captures_iter(content)
                    .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            })
            .collect()
    }

    fn is_scannable_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.contains(ext))
    }

    fn is_ignored(&self, root: &Path, entry: &DirEntry) -> bool {
        if self.ignores.is_empty() || entry.depth() == 0 {
            return false;
        }
        let path = entry.path();
        let relative: PathBuf = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        self.ignores
            .iter()
            .any(|p| p.matches_path(&relative) || p.matches_path(path))
    }
}
