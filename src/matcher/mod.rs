mod element;
mod template;

pub use element::PathElement;
pub use template::{TemplateLayout, VALUE_GROUP, compile_extraction};

use regex::Regex;

use crate::error::Result;
use crate::message::MessageSink;
use crate::profile::{Profile, Rule, Severity};
use crate::scanner::ScanResult;

pub const NO_MATCHING_PATH: &str = "No matching path found";
pub const EMPTY_DIRECTORY: &str = "Empty directory found";

/// Extraction regex for one variable of one template.
#[derive(Debug)]
struct Extractor {
    variable: usize,
    regex: Regex,
    depth: usize,
}

#[derive(Debug)]
struct CompiledTemplate<'p> {
    template: &'p str,
    segment_count: usize,
    /// Bound variables, in profile declaration order.
    extractors: Vec<Extractor>,
}

/// Classifies files against a profile's templates and extracts variable values.
///
/// Templates are tried in profile order and the first one that yields at least
/// one value claims the file. Within a template, variables are extracted in
/// profile declaration order, and the first variable that fails to match
/// abandons the template for that file: values already extracted are kept,
/// the remaining variables are not tried. Profiles must therefore declare
/// variables in an order where an earlier miss implies later ones are
/// meaningless. A single miss can hide otherwise valid sibling values.
#[derive(Debug)]
pub struct PathMatcher<'p> {
    profile: &'p Profile,
    templates: Vec<CompiledTemplate<'p>>,
}

impl<'p> PathMatcher<'p> {
    /// Build extraction regexes for every (template, bound variable) pair.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if a variable pattern does not combine into a
    /// valid regex.
    pub fn new(profile: &'p Profile) -> Result<Self> {
        let mut templates = Vec::with_capacity(profile.paths.len());
        for template in &profile.paths {
            let layout = TemplateLayout::resolve(template, &profile.variables);
            let mut extractors = Vec::new();
            for index in 0..profile.variables.len() {
                let Some((source, depth)) = layout.extraction_source(index, &profile.variables)
                else {
                    continue;
                };
                tracing::trace!(template = %template, variable = %profile.variables[index].name, %source, "Extraction pattern");
                extractors.push(Extractor {
                    variable: index,
                    regex: compile_extraction(&source)?,
                    depth,
                });
            }
            templates.push(CompiledTemplate {
                template,
                segment_count: segment_count(template),
                extractors,
            });
        }
        Ok(Self { profile, templates })
    }

    /// Extract all values for one file. An empty result means no template
    /// matched.
    #[must_use]
    pub fn match_file(&self, file: &str) -> Vec<PathElement> {
        let segments = segment_count(file);
        for template in &self.templates {
            if template.segment_count != segments {
                continue;
            }
            let elements = self.extract(template, file);
            if !elements.is_empty() {
                return elements;
            }
        }
        Vec::new()
    }

    fn extract(&self, template: &CompiledTemplate<'_>, file: &str) -> Vec<PathElement> {
        let mut elements = Vec::new();
        for extractor in &template.extractors {
            let variable = &self.profile.variables[extractor.variable];
            let Some(value) = extractor
                .regex
                .captures(file)
                .and_then(|caps| caps.name(VALUE_GROUP))
            else {
                tracing::debug!(file, template = template.template, variable = %variable.name, "Variable did not match, template abandoned");
                break;
            };
            tracing::debug!(file, variable = %variable.name, value = value.as_str(), "Extracted");
            let (parent_path, real_path) = folder_keys(file, extractor.depth);
            elements.push(PathElement {
                template: template.template.to_string(),
                file: file.to_string(),
                variable: variable.name.clone(),
                value: value.as_str().to_string(),
                parent_path,
                real_path,
            });
        }
        elements
    }

    /// Match every scanned file and report unmatched files and empty
    /// directories. In verbose mode each extraction is also reported as info.
    pub fn match_all(&self, scan: &ScanResult, sink: &mut MessageSink) -> Vec<PathElement> {
        let mut elements = Vec::new();
        let mut unmatched = Vec::new();

        for file in &scan.files {
            let found = self.match_file(file);
            if found.is_empty() {
                unmatched.push(file.as_str());
                continue;
            }
            if sink.is_verbose() {
                for element in &found {
                    let rule = Rule::synthetic(Severity::Info, element.variable.clone());
                    sink.add(element.clone(), &rule);
                }
            }
            elements.extend(found);
        }

        let no_match = Rule::synthetic(Severity::Error, NO_MATCHING_PATH);
        for file in unmatched {
            sink.add(PathElement::for_path(file), &no_match);
        }

        let empty_dir = Rule::synthetic(Severity::Error, EMPTY_DIRECTORY);
        for dir in scan.empty_dirs() {
            sink.add(PathElement::for_path(dir), &empty_dir);
        }

        elements
    }
}

fn segment_count(path: &str) -> usize {
    path.matches('/').count() + 1
}

/// Parent grouping key and real path for a value found in folder segment
/// `depth` (1-based) of `file`.
fn folder_keys(file: &str, depth: usize) -> (String, String) {
    let folders: Vec<&str> = file.split('/').collect();
    let depth = depth.min(folders.len());
    (folders[..depth - 1].join("/"), folders[..depth].join("/"))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
