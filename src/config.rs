use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use regex::Regex;

/// File name of the string table inside each `<locale>.lproj` directory.
pub const DEFAULT_TABLE_NAME: &str = "Localizable.strings";

/// Suffix of per-locale directories under the localization root.
pub const LOCALE_DIR_SUFFIX: &str = ".lproj";

/// Key extraction patterns. Capture group 1 is the referenced key.
pub const DEFAULT_PATTERNS: &[&str] = &[
    // Swift and Objective-C native calls
    r#"NSLocalizedString\(@?"(\w+)""#,
    // Generated accessors: Localizations.A.B.C -> "A.B.C"
    r"Localizations\.((?:[A-Z][a-z]*[A-z]*)*(?:\.[A-Z][a-z]*[A-z]*)*)",
];

/// Patterns compiled from a validated [`Config`].
#[derive(Debug)]
pub struct CompiledPatterns {
    /// Key extraction regexes, in configured order.
    pub keys: Vec<Regex>,
    /// Globs excluded from the source walk.
    pub ignores: Vec<Pattern>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `<locale>.lproj` folders.
    pub localization_root: String,
    /// Root of the source tree scanned for key references.
    pub source_root: String,
    pub table_name: String,
    /// Locale every other locale is compared against.
    pub reference_locale: String,
    /// Locales checked against the reference, in report order.
    pub locales: Vec<String>,
    /// Check every `<locale>.lproj` found under the localization root instead of `locales`.
    pub discover_locales: bool,
    pub patterns: Vec<String>,
    pub extensions: Vec<String>,
    /// Keys built dynamically in code, never reported as unused.
    pub ignored_keys: Vec<String>,
    /// Glob patterns excluded from the source walk.
    pub ignores: Vec<String>,
}

pub fn default_patterns() -> Vec<String> {
    DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
}

fn default_locales() -> Vec<String> {
    ["fr", "es"].map(String::from).to_vec()
}

fn default_extensions() -> Vec<String> {
    ["swift", "m"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            localization_root: "Resources/Languages".to_string(),
            source_root: ".".to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            reference_locale: "en".to_string(),
            locales: default_locales(),
            discover_locales: false,
            patterns: default_patterns(),
            extensions: default_extensions(),
            ignored_keys: Vec::new(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values and return the compiled patterns.
    ///
    /// Every pattern must compile and have a capture group; every ignore must be a valid glob.
    pub fn validate(&self) -> Result<CompiledPatterns> {
        if self.reference_locale.trim().is_empty() {
            bail!("Reference locale must not be empty");
        }

        Ok(CompiledPatterns {
            keys: self.compiled_patterns()?,
            ignores: self.compiled_ignores()?,
        })
    }

    fn compiled_patterns(&self) -> Result<Vec<Regex>> {
        self.patterns
            .iter()
            .map(|pattern| -> Result<Regex> {
                let regex = Regex::new(pattern)
                    .with_context(|| format!("Invalid key pattern: \"{}\"", pattern))?;
                if regex.captures_len() < 2 {
                    bail!(
                        "Key pattern \"{}\" has no capture group for the key",
                        pattern
                    );
                }
                Ok(regex)
            })
            .collect()
    }

    fn compiled_ignores(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in ignores: \"{}\"", pattern))
            })
            .collect()
    }

    /// Path of the string table for `locale`.
    pub fn table_path(&self, locale: &str) -> PathBuf {
        Path::new(&self.localization_root)
            .join(format!("{}{}", locale, LOCALE_DIR_SUFFIX))
            .join(&self.table_name)
    }
}
