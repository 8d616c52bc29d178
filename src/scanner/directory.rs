use std::path::Path;

use walkdir::WalkDir;

use super::types::{ScanResult, relative_path};
use super::FileScanner;
use crate::error::{ImageInspectError, Result};

/// Walks a directory tree with `walkdir`. Symlinks are not followed, so
/// cycles cannot occur. A symlink to a directory is listed as a directory
/// with the entry count of its target, but its contents are not scanned.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectoryScanner;

impl DirectoryScanner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn check_root(root: &Path) -> Result<std::path::PathBuf> {
        if !root.exists() {
            return Err(ImageInspectError::NotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ImageInspectError::NotADirectory(root.to_path_buf()));
        }
        Ok(dunce::canonicalize(root)?)
    }

    fn scan_impl(root: &Path) -> ScanResult {
        let mut state = ScanState::default();

        for entry in WalkDir::new(root).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry: {err}");
                    continue;
                }
            };
            let Some(relative) = relative_path(root, entry.path()) else {
                tracing::warn!(path = %entry.path().display(), "Skipping entry with non UTF-8 name");
                if let Some(parent) = entry.path().parent().and_then(|p| relative_path(root, p)) {
                    state.count_entry(parent);
                }
                continue;
            };

            if entry.file_type().is_dir() {
                state.process_directory(relative);
            } else if entry.path_is_symlink() && entry.path().is_dir() {
                let entries = std::fs::read_dir(entry.path()).map_or(0, Iterator::count);
                tracing::debug!(dir = %relative, entries, "Directory link not followed");
                state.process_directory_link(relative, entries);
            } else {
                state.process_file(relative);
            }
        }

        state.result
    }
}

impl FileScanner for DirectoryScanner {
    fn scan(&self, root: &Path) -> Result<ScanResult> {
        let root = Self::check_root(root)?;
        tracing::debug!(root = %root.display(), "Scanning image");
        let result = Self::scan_impl(&root);
        tracing::debug!(
            files = result.files.len(),
            dirs = result.dirs.len(),
            "Scan finished"
        );
        Ok(result)
    }
}

/// Accumulates files and per-directory entry counts during one walk.
#[derive(Default)]
struct ScanState {
    result: ScanResult,
}

impl ScanState {
    fn process_file(&mut self, relative: String) {
        self.count_in_parent(&relative);
        self.result.files.insert(relative);
    }

    fn process_directory(&mut self, relative: String) {
        self.count_in_parent(&relative);
        self.result.dirs.entry(relative).or_insert(0);
    }

    fn process_directory_link(&mut self, relative: String, entries: usize) {
        self.count_in_parent(&relative);
        self.result.dirs.insert(relative, entries);
    }

    fn count_in_parent(&mut self, relative: &str) {
        if let Some((parent, _)) = relative.rsplit_once('/') {
            self.count_entry(parent.to_string());
        }
    }

    fn count_entry(&mut self, dir: String) {
        *self.result.dirs.entry(dir).or_insert(0) += 1;
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
