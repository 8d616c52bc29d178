mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter, TextLayout};

use crate::error::Result;
use crate::message::Message;

/// Trait for rendering inspection messages.
pub trait OutputFormatter {
    /// Format the messages into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, messages: &[Message]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
