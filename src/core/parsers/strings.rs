use std::{fs, path::Path, sync::LazyLock};

use regex::Regex;

use crate::{core::LocaleTable, issues::Diagnostic};

/// `"<key>" = "<value>";`, the key may contain escaped quotes.
static DECLARATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)" = "(.+)";"#).unwrap());

/// `"<key>" = "<value>"; // ignore-same-translation-warning`
static IGNORED_DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""((?:[^"\\]|\\.)*)" = "(.+)"; *// *ignore-same-translation-warning"#)
        .unwrap()
});

/// Line terminators accepted in table files.
const LINE_BREAKS: [char; 5] = ['\n', '\r', '\u{2028}', '\u{2029}', '\u{85}'];

/// Outcome of reading a table file from disk.
///
/// Reading never fails the run: an unreadable file is a table with no data.
#[derive(Debug)]
pub enum TableRead {
    Loaded(String),
    Unreadable { reason: String },
}

impl TableRead {
    pub fn from_path(path: &Path) -> Self {
        match fs::read(path) {
            Ok(bytes) => decode_table_bytes(&bytes),
            Err(e) => TableRead::Unreadable {
                reason: e.to_string(),
            },
        }
    }

    pub fn content(&self) -> &str {
        match self {
            TableRead::Loaded(content) => content,
            TableRead::Unreadable { .. } => "",
        }
    }
}

/// Decode table bytes, honoring a UTF-16 byte order mark.
///
/// Older Xcode projects store `.strings` files as UTF-16; anything without a
/// BOM must be valid UTF-8.
fn decode_table_bytes(bytes: &[u8]) -> TableRead {
    let (content, encoding, had_errors) = encoding_rs::UTF_8.decode(bytes);
    if had_errors {
        return TableRead::Unreadable {
            reason: format!("not valid {}", encoding.name()),
        };
    }
    TableRead::Loaded(content.into_owned())
}

/// A parsed table together with the duplicate declarations found in it.
#[derive(Debug)]
pub struct ParsedTable {
    pub table: LocaleTable,
    /// One `Redundant` diagnostic per extra occurrence of a key.
    pub redundant: Vec<Diagnostic>,
    /// Set when the backing file could not be read.
    pub unreadable: Option<String>,
}

/// Load and parse the table for `locale` stored at `path`.
pub fn load_table(path: &Path, locale: &str) -> ParsedTable {
    let file_path = path.to_string_lossy().to_string();
    let read = TableRead::from_path(path);
    let mut parsed = parse_table_source(read.content(), locale, &file_path);
    if let TableRead::Unreadable { reason } = read {
        parsed.unreadable = Some(reason);
    }
    parsed
}

/// Split `content` on any of [`LINE_BREAKS`], treating `\r\n` as a single break.
fn table_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(start) = rest.find(LINE_BREAKS) else {
            let line = rest;
            rest = "";
            return Some(line);
        };
        let line = &rest[..start];
        let mut end = start + rest[start..].chars().next()?.len_utf8();
        if rest[start..].starts_with("\r\n") {
            end += 1;
        }
        rest = &rest[end..];
        Some(line)
    })
}

/// Parse the text of a string table.
///
/// Lines that are not declarations are skipped. When a key is declared twice
/// the first declaration is kept and the later one is reported against the
/// first declaration's line.
pub fn parse_table_source(content: &str, locale: &str, file_path: &str) -> ParsedTable {
    let mut table = LocaleTable::new(locale, file_path);
    let mut redundant = Vec::new();

    for (index, line) in table_lines(content).enumerate() {
        let line_number = index + 1;

        if let Some(caps) = IGNORED_DECLARATION_REGEX.captures(line) {
            table.ignored_same_translation.insert(caps[1].to_string());
        }

        let Some(caps) = DECLARATION_REGEX.captures(line) else {
            continue;
        };
        let key = &caps[1];
        let value = &caps[2];

        if let Err(first_line) = table.insert_first(key, value, line_number) {
            redundant.push(Diagnostic::redundant(locale, key, file_path, first_line));
        }
    }

    ParsedTable {
        table,
        redundant,
        unreadable: None,
    }
}
