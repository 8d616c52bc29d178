use regex::Regex;

use crate::matcher::PathElement;
use crate::message::MessageSink;
use crate::profile::Rule;

/// Search `pattern` in each value. A plain rule requires the pattern to be
/// found; an inverted rule requires it to be absent.
pub fn check_pattern(pattern: &Regex, rule: &Rule, elements: &[&PathElement], sink: &mut MessageSink) {
    for element in elements {
        let found = pattern.is_match(&element.value);
        if found == rule.invert_match {
            tracing::debug!(file = %element.file, value = %element.value, pattern = pattern.as_str(), "Rule violated");
            sink.add((*element).clone(), rule);
        }
    }
}
