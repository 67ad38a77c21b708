//! Missing translation key detection rule.
//!
//! Detects keys that exist in the reference locale but are absent from
//! another locale's table.

use crate::{core::LocaleTable, issues::Diagnostic};

/// Check `locale` for keys defined in `reference` but missing from it.
///
/// The locale has no line for an absent key, so each diagnostic carries the
/// reference table's line for the key. Keys are visited in lexical order.
pub fn check_missing_keys(reference: &LocaleTable, locale: &LocaleTable) -> Vec<Diagnostic> {
    reference
        .sorted_keys()
        .into_iter()
        .filter(|key| !locale.contains_key(key))
        .map(|key| {
            Diagnostic::missing(
                &locale.locale,
                key,
                &locale.file_path,
                reference.line(key),
            )
        })
        .collect()
}
