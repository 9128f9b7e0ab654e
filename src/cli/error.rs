//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::BatchNotFound { .. } | InfraError::Io { .. } => {
                    crate::exitcode::NOINPUT
                }
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) | ApplicationError::Batch { .. } => {
                        crate::exitcode::DATAERR
                    }
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes_follow_error_layer() {
        let usage = CliError::Usage("bad".into());
        let missing = CliError::Infra(InfraError::io(
            "missing",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        ));
        let no_batch = CliError::Infra(InfraError::BatchNotFound {
            path: PathBuf::from("absent.toml"),
        });
        let batch = CliError::from(ApplicationError::Batch {
            path: PathBuf::from("b.toml"),
            message: "bad".into(),
        });
        let config = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        let domain = CliError::from(ApplicationError::Domain(DomainError::RootAlreadySet(
            "Level 1".into(),
        )));

        assert_eq!(usage.exit_code(), crate::exitcode::USAGE);
        assert_eq!(missing.exit_code(), crate::exitcode::NOINPUT);
        assert_eq!(no_batch.exit_code(), crate::exitcode::NOINPUT);
        assert_eq!(batch.exit_code(), crate::exitcode::DATAERR);
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(domain.exit_code(), crate::exitcode::DATAERR);
    }
}
