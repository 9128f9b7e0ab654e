//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::path::Path;
use std::sync::Arc;

use crate::application::services::ExposureService;
use crate::application::{ApplicationResult, TransactionBatch};
use crate::config::Settings;
use crate::domain::{sample, Transaction};
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    pub exposure: ExposureService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            settings: Arc::new(settings),
            fs,
            exposure: ExposureService::new(),
        }
    }

    /// Transactions from `batch_file`, or the sample batch when none is given.
    pub fn transactions(&self, batch_file: Option<&Path>) -> ApplicationResult<Vec<Transaction>> {
        match batch_file {
            Some(path) => Ok(TransactionBatch::load(self.fs.as_ref(), path)?.transactions),
            None => Ok(sample::sample_transactions()),
        }
    }
}
