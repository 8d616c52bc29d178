use crate::matcher::PathElement;
use crate::profile::{Rule, Severity};

/// A finding: the element it is about and the rule that produced it.
#[derive(Debug, Clone)]
pub struct Message {
    pub element: PathElement,
    pub rule: Rule,
}

impl Message {
    #[must_use]
    pub const fn new(element: PathElement, rule: Rule) -> Self {
        Self { element, rule }
    }

    #[must_use]
    pub fn file(&self) -> &str {
        &self.element.file
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.rule.severity
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.element.value
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.rule.message
    }

    /// The matched template, empty for unmatched files and empty directories.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.element.template
    }

    #[must_use]
    pub fn variable(&self) -> &str {
        &self.element.variable
    }
}

/// Collects the messages of one inspection run.
#[derive(Debug, Default)]
pub struct MessageSink {
    verbose: bool,
    messages: Vec<Message>,
}

impl MessageSink {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Record a finding. `Info` findings are dropped unless verbose.
    pub fn add(&mut self, element: PathElement, rule: &Rule) {
        if rule.severity == Severity::Info && !self.verbose {
            return;
        }
        self.messages.push(Message::new(element, rule.clone()));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages sorted by file path. The sort is stable, so findings for the
    /// same file keep the order in which they were recorded.
    #[must_use]
    pub fn into_sorted(mut self) -> Vec<Message> {
        self.messages.sort_by(|a, b| a.file().cmp(b.file()));
        self.messages
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
