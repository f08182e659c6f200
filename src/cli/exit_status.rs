use std::process::ExitCode;

/// Exit status for the tool, following common conventions for build tools.
///
/// - `Success` (0): run completed, nothing went wrong
/// - `Failure` (1): run completed but some records/files had errors
/// - `Error` (2): run aborted (bad arguments, I/O failure, tool launch failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed, nothing went wrong.
    Success,
    /// Run completed but some records or files had errors.
    Failure,
    /// Run aborted before completion.
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
