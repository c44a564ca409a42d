use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): pipeline completed, every target dictionary persisted
/// - `Error` (1): any failure during extraction, merge, or translation
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values() {
        // ExitCode has no PartialEq; compare through Debug.
        assert_eq!(
            format!("{:?}", ExitCode::from(ExitStatus::Success)),
            format!("{:?}", ExitCode::from(0u8))
        );
        assert_eq!(
            format!("{:?}", ExitCode::from(ExitStatus::Error)),
            format!("{:?}", ExitCode::from(1u8))
        );
    }
}
