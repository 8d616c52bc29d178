mod directory;
mod types;

pub use directory::DirectoryScanner;
pub use types::{ScanResult, relative_path};

use std::path::Path;

use crate::error::Result;

/// Trait for walking an image root once and collecting its files and folders.
pub trait FileScanner {
    /// Scan a directory tree below `root`.
    ///
    /// # Errors
    /// Returns `NotFound` if the root does not exist and `NotADirectory` if it
    /// is not a directory.
    fn scan(&self, root: &Path) -> Result<ScanResult>;
}
