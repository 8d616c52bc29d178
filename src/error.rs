use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageInspectError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Illegal directory: {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Illegal directory: {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid regex pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Illegal rules reference: {0}")]
    UnknownRuleSet(String),

    #[error("Profile does not exist: {0}")]
    ProfileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ImageInspectError {
    /// Build an `InvalidPattern` error from a failed regex compilation.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Short, stable name of the error category, used in debug logs.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::UnknownRuleSet(_) | Self::ProfileNotFound(_) => "Config",
            Self::NotFound(_) | Self::NotADirectory(_) => "Directory",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "Syntax",
            Self::JsonSerialize(_) => "Serialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageInspectError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
