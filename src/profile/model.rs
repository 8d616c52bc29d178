use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Extraction pattern used when a variable declares none.
pub const DEFAULT_VARIABLE_PATTERN: &str = ".*";

/// Message used when a rule declares none.
pub const DEFAULT_RULE_MESSAGE: &str = "Rule failed";

/// Severity of a finding. Ordered `Info < Warn < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    #[default]
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Upper-case label used by the console renderers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a rule checks.
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Substring search of a pattern in the extracted value.
    Regex(Regex),
    /// Contiguous numbering starting at 1 within each parent folder.
    Numbering,
    /// Structural finding raised by the matcher, never declared in a profile.
    Synthetic,
}

impl RuleKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Regex(_) => "regex",
            Self::Numbering => "numbering",
            Self::Synthetic => "synthetic",
        }
    }
}

/// A fully resolved validation rule attached to a variable.
#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: RuleKind,
    pub invert_match: bool,
    pub severity: Severity,
    pub message: String,
}

impl Rule {
    #[must_use]
    pub fn regex(pattern: Regex, message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Regex(pattern),
            invert_match: false,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn numbering(message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Numbering,
            invert_match: false,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// A rule that exists only to carry a finding that no declared rule produced,
    /// such as an unmatched file or an empty directory.
    #[must_use]
    pub fn synthetic(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Synthetic,
            invert_match: false,
            severity,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn inverted(mut self, invert: bool) -> Self {
        self.invert_match = invert;
        self
    }

    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The rule's regex source, if it is a regex rule.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match &self.kind {
            RuleKind::Regex(re) => Some(re.as_str()),
            RuleKind::Numbering | RuleKind::Synthetic => None,
        }
    }
}

/// A named component of a path template (e.g. artist, album).
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    /// Regex source substituted for the variable name in templates.
    pub pattern: String,
    pub rules: Vec<Rule>,
}

impl Variable {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: DEFAULT_VARIABLE_PATTERN.to_string(),
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// A named naming/structure convention for a directory tree.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub name: String,
    pub description: String,
    /// Path templates in match priority order, `/`-separated, no leading `/`.
    pub paths: Vec<String>,
    pub variables: Vec<Variable>,
}

impl Profile {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a template. A leading `/` is stripped so templates share the form
    /// of scanned relative paths.
    #[must_use]
    pub fn with_path(mut self, template: impl AsRef<str>) -> Self {
        self.paths.push(normalize_template(template.as_ref()));
        self
    }

    #[must_use]
    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }
}

/// Normalize a template to the relative-path form (no leading `/`).
#[must_use]
pub fn normalize_template(template: &str) -> String {
    template.trim_start_matches('/').to_string()
}
