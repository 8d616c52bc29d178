//! Filesystem access used by definitions discovery.
//!
//! The loader only needs to probe and read a handful of candidate files, so
//! that surface is a trait and tests swap in an in-memory tree.

use std::path::{Path, PathBuf};

/// Application name used for the per-user config directory.
const APP_NAME: &str = "image-inspect";

/// The filesystem operations the profile loader relies on.
pub trait FileSystem {
    /// Read a definitions file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Directory searched for a local `image-inspect.toml`.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Per-user directory searched for `profiles.toml`:
    /// `~/.config/image-inspect` on Linux, `%APPDATA%\image-inspect` on
    /// Windows, `~/Library/Application Support/image-inspect` on macOS.
    fn config_dir(&self) -> Option<PathBuf>;
}

/// `std::fs` backed implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;
