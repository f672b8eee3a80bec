//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{wrong} of {total} answers did not match")]
    Mismatch { wrong: usize, total: usize },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Mismatch { .. } => crate::exitcode::WRONG,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exitcode;

    #[test]
    fn given_errors_when_mapping_exit_codes_then_uses_sysexits() {
        let config = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        let io = CliError::from(ApplicationError::io(
            "read answer",
            std::io::Error::other("broken pipe"),
        ));

        assert_eq!(config.exit_code(), exitcode::CONFIG);
        assert_eq!(io.exit_code(), exitcode::IOERR);
        assert_eq!(CliError::InvalidArgs("x".into()).exit_code(), exitcode::USAGE);
        assert_eq!(
            CliError::Mismatch { wrong: 1, total: 2 }.exit_code(),
            exitcode::WRONG
        );
    }

    #[test]
    fn given_mismatch_when_displaying_then_reports_counts() {
        let err = CliError::Mismatch { wrong: 2, total: 3 };
        assert_eq!(err.to_string(), "2 of 3 answers did not match");
    }
}
