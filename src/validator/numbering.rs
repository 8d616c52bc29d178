use crate::matcher::PathElement;
use crate::message::MessageSink;
use crate::profile::{Rule, Severity};

/// Check that values count up from 1 within each parent folder.
///
/// Elements are walked in file path order. An element sharing its real path
/// with the previous one is the same folder seen through another file and is
/// skipped. On a mismatch the expectation resynchronizes to the value found,
/// so one gap yields one finding rather than one per following sibling.
pub fn check_numbering(rule: &Rule, elements: &[&PathElement], sink: &mut MessageSink) {
    let mut sorted = elements.to_vec();
    sorted.sort_by(|a, b| a.file.cmp(&b.file));

    let mut parent: Option<&str> = None;
    let mut real: Option<&str> = None;
    let mut expected: i64 = 1;

    for element in sorted {
        if real == Some(element.real_path.as_str()) {
            continue;
        }
        real = Some(element.real_path.as_str());

        if parent != Some(element.parent_path.as_str()) {
            parent = Some(element.parent_path.as_str());
            expected = 1;
        }

        match parse_number(&element.value) {
            Some(actual) if actual == expected => {}
            Some(actual) => {
                tracing::debug!(file = %element.file, expected, actual, "Numbering gap");
                sink.add(element.clone(), rule);
                expected = actual;
            }
            None => {
                let illegal = Rule::synthetic(
                    Severity::Error,
                    format!("Illegal number '{}': {}", element.value, rule.message),
                );
                sink.add(element.clone(), &illegal);
            }
        }
        expected = expected.saturating_add(1);
    }
}

fn parse_number(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

#[cfg(test)]
#[path = "numbering_tests.rs"]
mod tests;
