//! The lint pipeline.
//!
//! Runs strictly in sequence:
//!
//! 1. Parse the reference table, then every other locale's table
//! 2. Scan the source tree for referenced keys
//! 3. Report unused keys and the bulk-delete pattern
//! 4. Compare each locale against the reference
//! 5. Print the warning summary
//!
//! Once a [`LintContext`] exists the run cannot fail: unreadable files
//! contribute nothing and every finding is advisory.

use std::{
    collections::{BTreeSet, HashSet},
    io::Write,
    path::Path,
};

use anyhow::Result;
use colored::Colorize;

use crate::{
    config::Config,
    core::{
        LocaleTable, SourceScanner, locales::discover_locales, parsers::strings::load_table,
    },
    report::{ReportSummary, Reporter},
    rules::{check_locale, check_unused_keys, unused_keys},
};

/// Validated configuration plus everything compiled from it.
pub struct LintContext {
    pub config: Config,
    pub verbose: bool,
    scanner: SourceScanner,
}

impl LintContext {
    /// Validate `config` and compile its patterns.
    pub fn new(config: Config, verbose: bool) -> Result<Self> {
        let compiled = config.validate()?;
        let scanner = SourceScanner::new(compiled.keys, config.extensions.clone())
            .with_ignores(compiled.ignores)
            .with_verbose(verbose);

        Ok(Self {
            config,
            verbose,
            scanner,
        })
    }

    /// Locales compared against the reference, in report order.
    ///
    /// The reference locale is never compared against itself.
    pub fn target_locales(&self) -> Vec<String> {
        let config = &self.config;
        let locales = if config.discover_locales {
            discover_locales(Path::new(&config.localization_root), &config.table_name)
        } else {
            config.locales.clone()
        };

        let mut seen = HashSet::new();
        locales
            .into_iter()
            .filter(|locale| *locale != config.reference_locale)
            .filter(|locale| seen.insert(locale.clone()))
            .collect()
    }

    /// Load the table for `locale` and report its duplicate declarations.
    fn load_locale<W: Write>(&self, locale: &str, reporter: &mut Reporter<W>) -> LocaleTable {
        let path = self.config.table_path(locale);
        let parsed = load_table(&path, locale);

        if let Some(reason) = &parsed.unreadable
            && self.verbose
        {
            eprintln!(
                "{} Cannot read string table {}: {}",
                "warning:".bold().yellow(),
                path.display(),
                reason
            );
        }

        reporter.emit_all(&parsed.redundant);
        parsed.table
    }
}

/// What a completed run found, besides the printed diagnostics.
#[derive(Debug)]
pub struct LintOutcome {
    pub summary: ReportSummary,
    pub unused_keys: BTreeSet<String>,
    pub locales_checked: Vec<String>,
    pub source_files_scanned: usize,
}

/// Run the whole pipeline, printing through `reporter`.
pub fn lint<W: Write>(ctx: &LintContext, mut reporter: Reporter<W>) -> LintOutcome {
    let config = &ctx.config;

    let reference = ctx.load_locale(&config.reference_locale, &mut reporter);
    let locales_checked = ctx.target_locales();
    let tables: Vec<LocaleTable> = locales_checked
        .iter()
        .map(|locale| ctx.load_locale(locale, &mut reporter))
        .collect();

    let scan = ctx.scanner.scan(Path::new(&config.source_root));
    if ctx.verbose {
        eprintln!(
            "{} Scanned {} source file(s), found {} key reference(s)",
            "info:".bold().blue(),
            scan.files_scanned,
            scan.keys.len()
        );
    }

    let used_keys: HashSet<String> = scan.keys.into_iter().collect();
    let ignored_keys: HashSet<String> = config.ignored_keys.iter().cloned().collect();
    let unused = unused_keys(&reference, &used_keys, &ignored_keys);

    reporter.emit_all(&check_unused_keys(&reference, &unused));
    reporter.bulk_delete(&unused);

    for table in &tables {
        reporter.emit_all(&check_locale(&reference, table));
    }

    LintOutcome {
        summary: reporter.finish(),
        unused_keys: unused,
        locales_checked,
        source_files_scanned: scan.files_scanned,
    }
}
