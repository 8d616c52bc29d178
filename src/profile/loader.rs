use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;

use crate::error::{ImageInspectError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{
    DEFAULT_RULE_MESSAGE, DEFAULT_VARIABLE_PATTERN, Profile, Rule, Severity, Variable,
    normalize_template,
};
use super::presets::BUILTIN_DEFINITIONS;

/// Definitions file looked up in the current directory.
pub const LOCAL_DEFINITIONS_NAME: &str = "image-inspect.toml";

/// Definitions file looked up in the user config directory.
pub const USER_DEFINITIONS_NAME: &str = "profiles.toml";

/// Where a set of profile definitions was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    File(PathBuf),
    Builtin,
}

impl fmt::Display for DefinitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin => f.write_str("<built-in>"),
        }
    }
}

/// All profiles of one definitions file, keyed by name in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    pub source: Option<DefinitionSource>,
    profiles: IndexMap<String, Profile>,
}

impl Definitions {
    /// Look up a profile by name.
    ///
    /// # Errors
    /// Returns `ProfileNotFound` if no profile has this name.
    pub fn profile(&self, name: &str) -> Result<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| ImageInspectError::ProfileNotFound(name.to_string()))
    }

    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDefinitions {
    #[serde(default)]
    rules: Vec<RawRuleSet>,
    #[serde(default)]
    profile: Vec<RawProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRuleSet {
    name: String,
    #[serde(default)]
    rule: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    paths: Vec<String>,
    #[serde(default)]
    variable: Vec<RawVariable>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVariable {
    name: String,
    pattern: Option<String>,
    #[serde(default)]
    rule: Vec<RawRule>,
    #[serde(default)]
    rule_sets: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawRuleKind {
    Regex,
    Numbering,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRule {
    #[serde(rename = "type")]
    kind: RawRuleKind,
    value: Option<String>,
    #[serde(default)]
    invert: bool,
    message: Option<String>,
    #[serde(default)]
    severity: Severity,
}

impl RawRule {
    fn resolve(&self) -> Result<Rule> {
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| DEFAULT_RULE_MESSAGE.to_string());
        let rule = match self.kind {
            RawRuleKind::Regex => {
                let Some(value) = self.value.as_deref() else {
                    return Err(ImageInspectError::Config(format!(
                        "Regex rule '{message}' has no value"
                    )));
                };
                let pattern = Regex::new(value)
                    .map_err(|e| ImageInspectError::invalid_pattern(value, e))?;
                Rule::regex(pattern, message)
            }
            RawRuleKind::Numbering => Rule::numbering(message),
        };
        Ok(rule.inverted(self.invert).with_severity(self.severity))
    }
}

/// Parse a definitions file and resolve every rule-set reference.
///
/// # Errors
/// Returns an error for TOML syntax errors, duplicate names, unknown rule-set
/// references and invalid regex patterns.
pub fn parse_definitions(content: &str) -> Result<Definitions> {
    let raw: RawDefinitions = toml::from_str(content)?;

    let mut rule_sets: IndexMap<String, Vec<Rule>> = IndexMap::new();
    for set in &raw.rules {
        let rules = set
            .rule
            .iter()
            .map(RawRule::resolve)
            .collect::<Result<Vec<_>>>()?;
        if rule_sets.insert(set.name.clone(), rules).is_some() {
            return Err(ImageInspectError::Config(format!(
                "Duplicate rules name: {}",
                set.name
            )));
        }
    }

    let mut profiles = IndexMap::new();
    for raw_profile in &raw.profile {
        let profile = resolve_profile(raw_profile, &rule_sets)?;
        if profiles.insert(profile.name.clone(), profile).is_some() {
            return Err(ImageInspectError::Config(format!(
                "Duplicate profile name: {}",
                raw_profile.name
            )));
        }
    }

    Ok(Definitions {
        source: None,
        profiles,
    })
}

fn resolve_profile(raw: &RawProfile, rule_sets: &IndexMap<String, Vec<Rule>>) -> Result<Profile> {
    if raw.name.trim().is_empty() {
        return Err(ImageInspectError::Config(
            "Profile name must not be empty".to_string(),
        ));
    }

    let mut profile = Profile::new(&raw.name).with_description(&raw.description);
    for template in &raw.paths {
        profile.paths.push(normalize_template(template));
    }

    let mut seen = HashSet::new();
    for raw_var in &raw.variable {
        if raw_var.name.is_empty() {
            return Err(ImageInspectError::Config(format!(
                "Profile '{}' declares a variable without a name",
                raw.name
            )));
        }
        if !seen.insert(raw_var.name.as_str()) {
            return Err(ImageInspectError::Config(format!(
                "Duplicate variable '{}' in profile '{}'",
                raw_var.name, raw.name
            )));
        }
        profile.variables.push(resolve_variable(raw_var, rule_sets)?);
    }

    Ok(profile)
}

fn resolve_variable(
    raw: &RawVariable,
    rule_sets: &IndexMap<String, Vec<Rule>>,
) -> Result<Variable> {
    let pattern = raw
        .pattern
        .clone()
        .unwrap_or_else(|| DEFAULT_VARIABLE_PATTERN.to_string());
    Regex::new(&pattern).map_err(|e| ImageInspectError::invalid_pattern(&pattern, e))?;

    let mut variable = Variable::new(&raw.name).with_pattern(pattern);
    for rule in &raw.rule {
        variable.rules.push(rule.resolve()?);
    }
    for reference in &raw.rule_sets {
        let rules = rule_sets
            .get(reference)
            .ok_or_else(|| ImageInspectError::UnknownRuleSet(reference.clone()))?;
        variable.rules.extend(rules.iter().cloned());
    }
    Ok(variable)
}

/// Loads profile definitions from the filesystem.
///
/// Search order:
/// 1. An explicitly given definitions file
/// 2. `image-inspect.toml` in the current directory
/// 3. `profiles.toml` in the platform-specific user config directory
/// 4. The built-in definitions
#[derive(Debug, Default)]
pub struct ProfileLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl ProfileLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> ProfileLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Load definitions, preferring `explicit` when given.
    ///
    /// # Errors
    /// Returns an error if the explicit file is missing, or if the selected
    /// file cannot be read or parsed.
    pub fn load(&self, explicit: Option<&Path>) -> Result<Definitions> {
        if let Some(path) = explicit {
            if !self.fs.exists(path) {
                return Err(ImageInspectError::Config(format!(
                    "Definition file not found: {}",
                    path.display()
                )));
            }
            return self.load_from_path(path);
        }

        if let Some(path) = self.discover() {
            return self.load_from_path(&path);
        }

        tracing::debug!("No definitions file found, using built-in profiles");
        let mut definitions = parse_definitions(BUILTIN_DEFINITIONS)?;
        definitions.source = Some(DefinitionSource::Builtin);
        Ok(definitions)
    }

    /// Load definitions from a specific file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_path(&self, path: &Path) -> Result<Definitions> {
        tracing::debug!(path = %path.display(), "Loading profile definitions");
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| ImageInspectError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        let mut definitions = parse_definitions(&content)?;
        definitions.source = Some(DefinitionSource::File(path.to_path_buf()));
        Ok(definitions)
    }

    fn discover(&self) -> Option<PathBuf> {
        let local = self
            .fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_DEFINITIONS_NAME));
        let user = self
            .fs
            .config_dir()
            .map(|dir| dir.join(USER_DEFINITIONS_NAME));

        [local, user]
            .into_iter()
            .flatten()
            .find(|candidate| self.fs.exists(candidate))
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
