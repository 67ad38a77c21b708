use std::process::ExitCode;

/// Exit status of the CLI.
///
/// Findings never change the exit status: the lint is advisory, so a
/// completed run always exits with `Success`.
///
/// - `Success` (0): The lint ran to completion
/// - `Error` (2): The invocation was invalid (bad pattern, bad glob, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The lint ran to completion, whatever it found.
    Success,
    /// The lint could not start.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
