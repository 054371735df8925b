use std::process::ExitCode;

/// Exit status for CLI commands, following the usual linter conventions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, nothing to report.
    Success,
    /// Command completed but found issues.
    Failure,
    /// Command failed with an internal error (bad config, parse error, I/O).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
