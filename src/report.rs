//! Report formatting and printing utilities.
//!
//! Diagnostics are printed one per line as soon as they are handed to the
//! [`Reporter`], which also keeps the warning count for the final summary.
//! Separate from the rules so stringlint can be used as a library without
//! printing side effects.

use std::{
    collections::BTreeSet,
    io::{self, Write},
};

use colored::Colorize;

use crate::issues::{Diagnostic, Severity};

/// Counts gathered while reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub warning_count: usize,
}

/// Line-oriented diagnostic printer and accumulator.
///
/// Owned by the orchestrator for the length of one run.
pub struct Reporter<W: Write> {
    writer: W,
    summary: ReportSummary,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            summary: ReportSummary::default(),
        }
    }

    /// Print one diagnostic and account for it.
    pub fn emit(&mut self, diagnostic: &Diagnostic) {
        if diagnostic.kind.counts_as_warning() {
            self.summary.warning_count += 1;
        }
        let _ = writeln!(self.writer, "{}", format_diagnostic(diagnostic));
    }

    pub fn emit_all<'a>(&mut self, diagnostics: impl IntoIterator<Item = &'a Diagnostic>) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Print the find-and-replace pattern deleting every unused declaration.
    ///
    /// Nothing is printed when there are no unused keys.
    pub fn bulk_delete(&mut self, unused: &BTreeSet<String>) {
        if let Some(pattern) = bulk_delete_pattern(unused) {
            let _ = writeln!(self.writer, "{}", pattern);
        }
    }

    pub fn summary(&self) -> ReportSummary {
        self.summary
    }

    /// Print the final `Number of warnings` line and return the counts.
    pub fn finish(mut self) -> ReportSummary {
        let _ = writeln!(
            self.writer,
            "Number of warnings : {}",
            self.summary.warning_count
        );
        let _ = self.writer.flush();
        self.summary
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Format a diagnostic as a single line, coloring the severity on terminals.
///
/// `<path>:<line>: <severity> [<kind>] "<key>" <message>`
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let severity = match diagnostic.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };
    format!(
        "{}: {} [{}] \"{}\" {}",
        diagnostic.location(),
        severity,
        diagnostic.kind,
        diagnostic.key,
        diagnostic.message
    )
}

/// Build `"(k1|k2|...)" = ".*";` over `keys`, in iteration order.
///
/// Keys are regex-escaped so the pattern only matches their exact declarations.
pub fn bulk_delete_pattern<'a>(keys: impl IntoIterator<Item = &'a String>) -> Option<String> {
    let alternation: Vec<String> = keys.into_iter().map(|k| regex::escape(k)).collect();
    if alternation.is_empty() {
        return None;
    }
    Some(format!("\"({})\" = \".*\";", alternation.join("|")))
}
