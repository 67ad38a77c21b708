//! Unused translation key detection rule.
//!
//! Detects translation keys that are defined in the reference locale
//! but never referenced in any scanned source file.

use std::collections::{BTreeSet, HashSet};

use crate::{core::LocaleTable, issues::Diagnostic};

/// Keys of `reference` that are neither used nor explicitly ignored, in lexical order.
pub fn unused_keys(
    reference: &LocaleTable,
    used_keys: &HashSet<String>,
    ignored_keys: &HashSet<String>,
) -> BTreeSet<String> {
    reference
        .entries
        .keys()
        .filter(|key| !used_keys.contains(*key) && !ignored_keys.contains(*key))
        .cloned()
        .collect()
}

/// Check for unused translation keys.
///
/// # Arguments
/// * `reference` - The reference locale table
/// * `unused` - Output of [`unused_keys`]
///
/// # Returns
/// One `Unused` diagnostic per key, pointing at its declaration in the reference table
pub fn check_unused_keys(reference: &LocaleTable, unused: &BTreeSet<String>) -> Vec<Diagnostic> {
    unused
        .iter()
        .map(|key| {
            Diagnostic::unused(
                &reference.locale,
                key,
                &reference.file_path,
                reference.line(key),
            )
        })
        .collect()
}
