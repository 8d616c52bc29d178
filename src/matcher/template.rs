use std::cmp::Reverse;

use regex::{Regex, RegexBuilder};

use crate::error::{ImageInspectError, Result};
use crate::profile::Variable;

/// Name of the capture group holding the extracted value.
pub const VALUE_GROUP: &str = "extracted";

/// One place where a variable name occurs in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Occurrence {
    start: usize,
    end: usize,
    /// Index into the profile's variable list.
    variable: usize,
}

/// A template split into literal text and variable occurrences.
///
/// Occurrences are claimed longest variable name first, so a name that is a
/// substring of another name (`artist` in `artistname`) never binds inside
/// the longer one. Among equally long names, declaration order wins.
#[derive(Debug, Clone)]
pub struct TemplateLayout<'t> {
    template: &'t str,
    occurrences: Vec<Occurrence>,
}

impl<'t> TemplateLayout<'t> {
    #[must_use]
    pub fn resolve(template: &'t str, variables: &[Variable]) -> Self {
        let mut by_length: Vec<usize> = (0..variables.len()).collect();
        by_length.sort_by_key(|&i| Reverse(variables[i].name.len()));

        let mut occurrences: Vec<Occurrence> = Vec::new();
        for index in by_length {
            let name = variables[index].name.as_str();
            if name.is_empty() {
                continue;
            }
            for (start, _) in template.match_indices(name) {
                let end = start + name.len();
                let free = occurrences
                    .iter()
                    .all(|o| end <= o.start || start >= o.end);
                if free {
                    occurrences.push(Occurrence {
                        start,
                        end,
                        variable: index,
                    });
                }
            }
        }
        occurrences.sort_by_key(|o| o.start);

        Self {
            template,
            occurrences,
        }
    }

    #[must_use]
    pub const fn template(&self) -> &'t str {
        self.template
    }

    /// Whether the variable at `index` occurs in the template on its own.
    #[must_use]
    pub fn binds(&self, index: usize) -> bool {
        self.occurrences.iter().any(|o| o.variable == index)
    }

    /// Regex source extracting the variable at `target`, plus the 1-based
    /// folder depth of the segment holding it.
    ///
    /// Literals are escaped. The first occurrence of the target becomes the
    /// `VALUE_GROUP` capture; every other occurrence is a non-capturing group
    /// around its variable's pattern. Returns `None` if `target` is unbound.
    #[must_use]
    pub fn extraction_source(&self, target: usize, variables: &[Variable]) -> Option<(String, usize)> {
        let mut source = String::new();
        let mut depth = None;
        let mut cursor = 0;

        for occurrence in &self.occurrences {
            source.push_str(&regex::escape(&self.template[cursor..occurrence.start]));
            let pattern = &variables[occurrence.variable].pattern;
            if occurrence.variable == target && depth.is_none() {
                source.push_str(&format!("(?P<{VALUE_GROUP}>{pattern})"));
                depth = Some(self.template[..occurrence.start].matches('/').count() + 1);
            } else {
                source.push_str(&format!("(?:{pattern})"));
            }
            cursor = occurrence.end;
        }
        source.push_str(&regex::escape(&self.template[cursor..]));

        depth.map(|depth| (source, depth))
    }
}

/// Compile an extraction regex. Matching is case-insensitive.
///
/// # Errors
/// Returns `InvalidPattern` if the combined source is not a valid regex.
pub fn compile_extraction(source: &str) -> Result<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|e| ImageInspectError::invalid_pattern(source, e))
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
