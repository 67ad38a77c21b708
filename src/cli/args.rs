//! CLI argument definitions using clap.
//!
//! Every option overrides one built-in default from [`Config`]; options left
//! out keep the defaults. Repeatable options replace the default list rather
//! than extending it.

use clap::Parser;

use crate::config::Config;

/// Lint Localizable.strings tables for duplicate, missing, untranslated and unused keys
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory containing the <locale>.lproj folders
    #[arg(long, value_name = "DIR")]
    pub localization_root: Option<String>,

    /// Source directory scanned for key references
    #[arg(long, value_name = "DIR")]
    pub source_root: Option<String>,

    /// String table file name inside each .lproj folder
    #[arg(long, value_name = "FILE")]
    pub table_name: Option<String>,

    /// Locale every other locale is compared against
    #[arg(long, value_name = "LOCALE")]
    pub reference_locale: Option<String>,

    /// Locale to check against the reference (repeatable)
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Check every locale found under the localization root
    #[arg(long, conflicts_with = "locales")]
    pub all_locales: bool,

    /// Key extraction regex, capture group 1 is the key (repeatable)
    #[arg(long = "pattern", value_name = "REGEX")]
    pub patterns: Vec<String>,

    /// Source file extension to scan (repeatable)
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Key never reported as unused, e.g. built by concatenation (repeatable)
    #[arg(long = "ignore-key", value_name = "KEY")]
    pub ignored_keys: Vec<String>,

    /// Glob pattern excluded from the source scan (repeatable)
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignores: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Merge the command-line overrides over `config` (CLI > defaults).
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(root) = &self.localization_root {
            config.localization_root = root.clone();
        }
        if let Some(root) = &self.source_root {
            config.source_root = root.clone();
        }
        if let Some(name) = &self.table_name {
            config.table_name = name.clone();
        }
        if let Some(locale) = &self.reference_locale {
            config.reference_locale = locale.clone();
        }
        if !self.locales.is_empty() {
            config.locales = self.locales.clone();
        }
        if self.all_locales {
            config.discover_locales = true;
        }
        if !self.patterns.is_empty() {
            config.patterns = self.patterns.clone();
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
        if !self.ignored_keys.is_empty() {
            config.ignored_keys = self.ignored_keys.clone();
        }
        if !self.ignores.is_empty() {
            config.ignores = self.ignores.clone();
        }
        config
    }
}
