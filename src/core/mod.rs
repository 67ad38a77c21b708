//! Core analysis engine.
//!
//! - `table`: parsed locale tables
//! - `parsers`: string table parsing
//! - `file_scanner`: source tree scanning for key references
//! - `locales`: locale discovery under the localization root

pub mod file_scanner;
pub mod locales;
pub mod parsers;
pub mod table;

pub use file_scanner::{ScanResult, SourceScanner};
pub use table::LocaleTable;
