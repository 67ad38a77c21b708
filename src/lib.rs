//! Stringlint - Localizable.strings checker
//!
//! Stringlint lints the `.strings` tables of an Xcode project against a
//! reference locale and against the project's source code. It reports
//! duplicate keys, keys missing from a locale, values that look untranslated
//! and keys that are never referenced.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Built-in configuration and validation
//! - `core`: Table parsing, source scanning and locale discovery
//! - `issues`: Diagnostic type definitions
//! - `lint`: The sequential lint pipeline
//! - `report`: Diagnostic printing and the warning summary
//! - `rules`: Pure checks producing diagnostics

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod lint;
pub mod report;
pub mod rules;
