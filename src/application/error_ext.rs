//! Path context for I/O failures while loading inputs

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Turns an `io::Result` into [`ApplicationError::OperationFailed`] naming
/// what was attempted and on which file.
pub trait IoResultExt<T> {
    /// `action` reads as a verb phrase, e.g. `"read transaction batch"`.
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }
}
