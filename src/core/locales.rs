use std::{fs, path::Path};

use crate::config::LOCALE_DIR_SUFFIX;

/// Extracts the locale from a `<locale>.lproj` directory name.
///
/// Examples:
/// - "fr.lproj" -> Some("fr")
/// - "/path/to/Languages/zh-Hans.lproj" -> Some("zh-Hans")
/// - "Assets.xcassets" -> None
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_name()
        .and_then(|s| s.to_str())
        .and_then(|s| s.strip_suffix(LOCALE_DIR_SUFFIX))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Find every locale under `localization_root` that has a `table_name` file.
///
/// Returns locales sorted by name. A missing or unreadable root yields no locales.
pub fn discover_locales(localization_root: &Path, table_name: &str) -> Vec<String> {
    let Ok(entries) = fs::read_dir(localization_root) else {
        return Vec::new();
    };

    let mut locales: Vec<String> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir() && path.join(table_name).is_file())
        .filter_map(extract_locale)
        .collect();
    locales.sort();
    locales
}
