use anyhow::Result;

use super::args::Arguments;
use crate::{
    config::Config,
    lint::{LintContext, LintOutcome, lint},
    report::Reporter,
};

/// Build the configuration from the built-in defaults and `args`, then lint.
///
/// # Returns
/// - `Ok(LintOutcome)` once the run completed, whatever it found
/// - `Err` if the configuration is invalid (e.g., a pattern does not compile)
pub fn run(args: Arguments) -> Result<LintOutcome> {
    let config = args.apply_to(Config::default());
    let ctx = LintContext::new(config, args.verbose)?;
    Ok(lint(&ctx, Reporter::stdout()))
}
