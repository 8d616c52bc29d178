mod filesystem;
mod loader;
mod model;
mod presets;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{
    DefinitionSource, Definitions, LOCAL_DEFINITIONS_NAME, ProfileLoader, USER_DEFINITIONS_NAME,
    parse_definitions,
};
pub use model::{
    DEFAULT_RULE_MESSAGE, DEFAULT_VARIABLE_PATTERN, Profile, Rule, RuleKind, Severity, Variable,
    normalize_template,
};
pub use presets::BUILTIN_DEFINITIONS;

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
