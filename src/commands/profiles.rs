use std::fmt::Write;

use crate::profile::{Definitions, Profile, RuleKind};

/// `name: description` for every profile, in declaration order.
#[must_use]
pub fn format_profile_list(definitions: &Definitions) -> String {
    let mut output = String::from("Available image profiles:\n");
    for profile in definitions.profiles() {
        let _ = writeln!(output, " {:<15}: {}", profile.name, profile.description);
    }
    output
}

/// Everything a profile declares, with the definitions source it came from.
#[must_use]
pub fn format_profile_help(definitions: &Definitions, profile: &Profile) -> String {
    let mut output = String::new();
    if let Some(source) = &definitions.source {
        let _ = writeln!(output, "Definition file: {source}");
        let _ = writeln!(output);
    }

    let _ = writeln!(output, " {:<15}: {}", "Profile", profile.name);
    let _ = writeln!(output, " {:<15}: {}", "Description", profile.description);
    for path in &profile.paths {
        let _ = writeln!(output, " {:<15}: {path}", "Path");
    }
    for variable in &profile.variables {
        let _ = writeln!(
            output,
            " {:<15}: {} ({})",
            "Variable", variable.name, variable.pattern
        );
        for rule in &variable.rules {
            let mut kind = rule.kind.name().to_string();
            if let RuleKind::Regex(pattern) = &rule.kind {
                let _ = write!(kind, " '{}'", pattern.as_str());
            }
            if rule.invert_match {
                kind.push_str(" inverted");
            }
            let _ = writeln!(
                output,
                " {:<15}  - {kind} [{}] {}",
                "", rule.severity, rule.message
            );
        }
    }
    output
}

#[cfg(test)]
#[path = "profiles_tests.rs"]
mod tests;
