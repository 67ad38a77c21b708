//! Diagnostic types for string table analysis results.
//!
//! Each [`Diagnostic`] is self-contained: it carries everything the reporter
//! needs to print one line pointing into a table file.

use std::fmt;

// ============================================================
// Severity and Kind
// ============================================================

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// The class of problem a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticKind {
    /// Key declared more than once in the same table.
    Redundant,
    /// Reference key absent from a non-reference locale.
    Missing,
    /// Value identical to the reference locale's value.
    PotentiallyUntranslated,
    /// Reference key never referenced in source.
    Unused,
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::PotentiallyUntranslated => Severity::Warning,
            DiagnosticKind::Redundant | DiagnosticKind::Missing | DiagnosticKind::Unused => {
                Severity::Error
            }
        }
    }

    /// Whether this kind counts toward the final `Number of warnings` summary.
    pub fn counts_as_warning(&self) -> bool {
        matches!(
            self,
            DiagnosticKind::Redundant | DiagnosticKind::PotentiallyUntranslated
        )
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Redundant => write!(f, "Redundant"),
            DiagnosticKind::Missing => write!(f, "Missing"),
            DiagnosticKind::PotentiallyUntranslated => write!(f, "Potentially Untranslated"),
            DiagnosticKind::Unused => write!(f, "Unused Key"),
        }
    }
}

// ============================================================
// Diagnostic
// ============================================================

/// A single reportable finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Locale the finding is about.
    pub locale: String,
    /// The translation key.
    pub key: String,
    /// Table file the diagnostic points into.
    pub file_path: String,
    /// 1-based line in `file_path`, if the finding is tied to one.
    pub line: Option<usize>,
    /// Explanation printed after the key.
    pub message: String,
}

impl Diagnostic {
    /// `key` declared again in `locale`; `first_line` is the retained declaration.
    pub fn redundant(locale: &str, key: &str, file_path: &str, first_line: usize) -> Self {
        Self {
            kind: DiagnosticKind::Redundant,
            locale: locale.to_string(),
            key: key.to_string(),
            file_path: file_path.to_string(),
            line: Some(first_line),
            message: format!("is redundant in {} file", locale.to_uppercase()),
        }
    }

    /// `key` absent from `locale`; `reference_line` comes from the reference table.
    pub fn missing(
        locale: &str,
        key: &str,
        file_path: &str,
        reference_line: Option<usize>,
    ) -> Self {
        Self {
            kind: DiagnosticKind::Missing,
            locale: locale.to_string(),
            key: key.to_string(),
            file_path: file_path.to_string(),
            line: reference_line,
            message: format!("is missing from {} file", locale.to_uppercase()),
        }
    }

    pub fn potentially_untranslated(
        locale: &str,
        key: &str,
        file_path: &str,
        line: Option<usize>,
    ) -> Self {
        Self {
            kind: DiagnosticKind::PotentiallyUntranslated,
            locale: locale.to_string(),
            key: key.to_string(),
            file_path: file_path.to_string(),
            line,
            message: format!(
                "in {} file doesn't seem to be localized",
                locale.to_uppercase()
            ),
        }
    }

    pub fn unused(locale: &str, key: &str, file_path: &str, line: Option<usize>) -> Self {
        Self {
            kind: DiagnosticKind::Unused,
            locale: locale.to_string(),
            key: key.to_string(),
            file_path: file_path.to_string(),
            line,
            message: "is never used".to_string(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// `path:line` or just `path` when the finding has no line.
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}", self.file_path, line),
            None => self.file_path.clone(),
        }
    }
}

/// Plain, uncolored diagnostic line:
/// `<path>:<line>: <severity> [<kind>] "<key>" <message>`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] \"{}\" {}",
            self.location(),
            self.severity(),
            self.kind,
            self.key,
            self.message
        )
    }
}
