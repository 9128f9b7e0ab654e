//! Transaction batch files.
//!
//! A batch is a TOML document with one `[[transactions]]` table per
//! transaction:
//!
//! ```toml
//! [[transactions]]
//! path = ["Level 1", "Product 1", "Product 1A"]
//! amount = 1000
//! tenor = 10
//! ```
//!
//! Amounts and tenors may be integers, floats or decimal strings (`"1000.50"`).

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::Transaction;
use crate::infrastructure::traits::FileSystem;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TransactionBatch {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl TransactionBatch {
    pub fn parse(content: &str, origin: &Path) -> ApplicationResult<Self> {
        toml::from_str(content).map_err(|e| ApplicationError::Batch {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load(fs: &dyn FileSystem, path: &Path) -> ApplicationResult<Self> {
        debug!("load batch: {}", path.display());
        let content = fs
            .read_to_string(path)
            .with_path_context("read transaction batch", path)?;
        let batch = Self::parse(&content, path)?;
        debug!("load batch: {} transaction(s)", batch.transactions.len());
        Ok(batch)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl IntoIterator for TransactionBatch {
    type Item = Transaction;
    type IntoIter = std::vec::IntoIter<Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.into_iter()
    }
}
