//! Infrastructure-level errors: failures reaching the inputs of a run

use std::path::PathBuf;

use thiserror::Error;

use crate::application::ApplicationError;

/// Wraps [`ApplicationError`] and adds failures that happen before any
/// transaction is looked at.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// `-t FILE` points at something that is not a readable file
    #[error("transaction batch not found: {}", .path.display())]
    BatchNotFound { path: PathBuf },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
