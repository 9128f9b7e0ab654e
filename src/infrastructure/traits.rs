//! I/O boundary traits
//!
//! Transaction batches are read through [`FileSystem`], so batch loading can
//! run against an in-memory book in tests.

use std::io;
use std::path::Path;

/// The file access rslimit needs: batch files are checked, then read.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Reads from the local disk.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
