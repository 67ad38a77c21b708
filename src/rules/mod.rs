//! Rule implementations for stringlint.
//!
//! This module contains pure functions over already-loaded tables and the
//! used-key set. Each function takes only the inputs it needs and returns
//! diagnostics; nothing here reads files or prints.
//!
//! ## Module Structure
//!
//! - `unused`: Reference keys never referenced in source
//! - `missing`: Reference keys absent from another locale
//! - `untranslated`: Values identical to the reference locale

pub mod missing;
pub mod untranslated;
pub mod unused;

pub use missing::check_missing_keys;
pub use untranslated::check_untranslated;
pub use unused::{check_unused_keys, unused_keys};

use crate::{core::LocaleTable, issues::Diagnostic};

/// Compare one locale against the reference.
///
/// Missing and potentially untranslated findings are merged in key order.
pub fn check_locale(reference: &LocaleTable, locale: &LocaleTable) -> Vec<Diagnostic> {
    let mut issues = check_missing_keys(reference, locale);
    issues.extend(check_untranslated(reference, locale));
    issues.sort_by(|a, b| a.key.cmp(&b.key));
    issues
}
