use std::fmt::Write;

use crate::error::Result;
use crate::message::Message;
use crate::profile::Severity;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// How each message is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextLayout {
    /// One fixed-width line per message.
    #[default]
    Compact,
    /// Severity and value, then message, then file, each on its own line.
    List,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

const LIST_INDENT: &str = "       ";

pub struct TextFormatter {
    use_colors: bool,
    layout: TextLayout,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            layout: TextLayout::Compact,
        }
    }

    #[must_use]
    pub const fn with_layout(mut self, layout: TextLayout) -> Self {
        self.layout = layout;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    /// Severity label padded to a fixed width, then colored.
    fn severity(&self, severity: Severity) -> String {
        let padded = format!("{:<6}", severity.label());
        if !self.use_colors {
            return padded;
        }
        let color = match severity {
            Severity::Error => ansi::RED,
            Severity::Warn => ansi::YELLOW,
            Severity::Info => ansi::CYAN,
        };
        format!("{color}{padded}{}", ansi::RESET)
    }

    fn format_compact(&self, message: &Message, output: &mut String) {
        let line = format!(
            "{:<50.50} {} {:<30.30}  {:<30.30} {}",
            message.file(),
            self.severity(message.severity()),
            message.value(),
            message.text(),
            message.template()
        );
        let _ = writeln!(output, "{}", line.trim_end());
    }

    fn format_list(&self, message: &Message, output: &mut String) {
        let head = format!("{} {}", self.severity(message.severity()), message.value());
        let _ = writeln!(output, "{}", head.trim_end());
        let _ = writeln!(output, "{LIST_INDENT}{}", message.text());
        let _ = writeln!(output, "{LIST_INDENT}{}", message.file());
        let _ = writeln!(output);
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, messages: &[Message]) -> Result<String> {
        let mut output = String::new();
        for message in messages {
            match self.layout {
                TextLayout::Compact => self.format_compact(message, &mut output),
                TextLayout::List => self.format_list(message, &mut output),
            }
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
