/// One value extracted from one file by one template variable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathElement {
    /// The template that matched; empty for whole-file and directory findings.
    pub template: String,
    /// File path relative to the scan root.
    pub file: String,
    /// Name of the variable the value was extracted for.
    pub variable: String,
    pub value: String,
    /// Folders above the segment holding the value. Siblings share this key.
    pub parent_path: String,
    /// Folders up to and including the segment holding the value.
    pub real_path: String,
}

impl PathElement {
    /// An element that only names a path, used for findings that are not tied
    /// to a template variable.
    #[must_use]
    pub fn for_path(path: impl Into<String>) -> Self {
        Self {
            file: path.into(),
            ..Self::default()
        }
    }
}
