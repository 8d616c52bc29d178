use std::path::Path;

use crate::error::Result;
use crate::matcher::PathMatcher;
use crate::message::{Message, MessageSink};
use crate::profile::Profile;
use crate::scanner::{DirectoryScanner, FileScanner};
use crate::validator::RuleValidator;

/// Runs one inspection: scan, match, validate.
#[derive(Debug, Default)]
pub struct Inspector<S: FileScanner = DirectoryScanner> {
    scanner: S,
}

impl Inspector<DirectoryScanner> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scanner: DirectoryScanner::new(),
        }
    }
}

impl<S: FileScanner> Inspector<S> {
    #[must_use]
    pub const fn with_scanner(scanner: S) -> Self {
        Self { scanner }
    }

    /// Inspect the tree below `root` against `profile`.
    ///
    /// Returns all findings sorted by file path. Findings never fail the run.
    ///
    /// # Errors
    /// Returns an error if the profile's patterns do not compile or the root
    /// is missing or not a directory.
    pub fn inspect(&self, root: &Path, profile: &Profile, verbose: bool) -> Result<Vec<Message>> {
        let matcher = PathMatcher::new(profile)?;
        let scan = self.scanner.scan(root)?;

        let mut sink = MessageSink::new(verbose);
        let elements = matcher.match_all(&scan, &mut sink);
        tracing::debug!(elements = elements.len(), "Matching finished");
        RuleValidator::new(profile).validate(&elements, &mut sink);

        Ok(sink.into_sorted())
    }
}

/// Inspect `root` with the default directory scanner.
///
/// # Errors
/// See [`Inspector::inspect`].
pub fn inspect(root: &Path, profile: &Profile, verbose: bool) -> Result<Vec<Message>> {
    Inspector::new().inspect(root, profile, verbose)
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
