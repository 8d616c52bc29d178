mod numbering;
mod pattern;

pub use numbering::check_numbering;
pub use pattern::check_pattern;

use crate::matcher::PathElement;
use crate::message::MessageSink;
use crate::profile::{Profile, RuleKind};

/// Applies every rule of every profile variable to the extracted values.
#[derive(Debug, Clone, Copy)]
pub struct RuleValidator<'p> {
    profile: &'p Profile,
}

impl<'p> RuleValidator<'p> {
    #[must_use]
    pub const fn new(profile: &'p Profile) -> Self {
        Self { profile }
    }

    /// Validate all elements. Findings go to `sink`; nothing here fails the run.
    pub fn validate(&self, elements: &[PathElement], sink: &mut MessageSink) {
        for variable in &self.profile.variables {
            let owned: Vec<&PathElement> = elements
                .iter()
                .filter(|e| e.variable == variable.name)
                .collect();
            for rule in &variable.rules {
                tracing::debug!(variable = %variable.name, rule = rule.kind.name(), values = owned.len(), "Validating rule");
                match &rule.kind {
                    RuleKind::Regex(pattern) => check_pattern(pattern, rule, &owned, sink),
                    RuleKind::Numbering => check_numbering(rule, &owned, sink),
                    RuleKind::Synthetic => {
                        tracing::trace!(variable = %variable.name, message = %rule.message, "Synthetic rule has nothing to check, skipped");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
