//! Untranslated value detection rule.
//!
//! Detects translation values that are byte-identical to the reference
//! locale, which may indicate that the text was not translated.

use crate::{core::LocaleTable, issues::Diagnostic};

/// Check `locale` for values identical to the reference value.
///
/// Keys annotated with `// ignore-same-translation-warning` in `locale` are
/// skipped. Each diagnostic points at the locale's own declaration.
pub fn check_untranslated(reference: &LocaleTable, locale: &LocaleTable) -> Vec<Diagnostic> {
    reference
        .sorted_keys()
        .into_iter()
        .filter(|key| !locale.is_ignored_same_translation(key))
        .filter(|key| {
            matches!(
                (locale.get(key), reference.get(key)),
                (Some(value), Some(reference_value)) if value == reference_value
            )
        })
        .map(|key| {
            Diagnostic::potentially_untranslated(
                &locale.locale,
                key,
                &locale.file_path,
                locale.line(key),
            )
        })
        .collect()
}
