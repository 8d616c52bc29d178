use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path};

/// Everything below a scan root, as `/`-separated paths relative to the root.
///
/// Ordered sets keep the walk deduplicated and every later stage deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub files: BTreeSet<String>,
    /// Every directory below the root with its number of direct entries.
    pub dirs: BTreeMap<String, usize>,
}

impl ScanResult {
    /// Directories that contain no entries at all.
    pub fn empty_dirs(&self) -> impl Iterator<Item = &str> {
        self.dirs
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(dir, _)| dir.as_str())
    }
}

/// Strip `root` from `path` and join the remaining components with `/`.
///
/// Returns `None` if `path` is not below `root` or a component is not valid
/// UTF-8, so distinct names are never merged by lossy conversion.
#[must_use]
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rest = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in rest.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_str()?);
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
