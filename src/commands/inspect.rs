use std::path::Path;

use crate::cli::Cli;
use crate::error::Result;
use crate::message::Message;
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter, TextLayout,
};
use crate::profile::ProfileLoader;
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::color_choice_to_mode;
use super::profiles::{format_profile_help, format_profile_list};

pub fn run_inspect(cli: &Cli) -> i32 {
    match run_inspect_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::debug!(kind = e.error_type(), "Run failed");
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Load definitions, pick the profile and run the inspection.
///
/// # Errors
/// Returns an error for definition, profile, directory or output problems.
/// Findings are never errors.
pub fn run_inspect_impl(cli: &Cli) -> Result<i32> {
    let definitions = ProfileLoader::new().load(cli.definitions.as_deref())?;

    let Some(name) = cli.profile.as_deref() else {
        write_output(None, &format_profile_list(&definitions))?;
        return Ok(EXIT_SUCCESS);
    };
    let profile = match definitions.profile(name) {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprint!("{}", format_profile_list(&definitions));
            return Ok(EXIT_ERROR);
        }
    };

    if cli.profile_help {
        write_output(None, &format_profile_help(&definitions, profile))?;
        return Ok(EXIT_SUCCESS);
    }

    let messages = crate::inspect(&cli.dir, profile, cli.verbose)?;
    tracing::debug!(messages = messages.len(), "Inspection finished");

    let layout = if cli.list {
        TextLayout::List
    } else {
        TextLayout::Compact
    };
    let output = format_output(cli.format, &messages, color_choice_to_mode(cli.color), layout)?;
    write_output(cli.output.as_deref(), &output)?;

    Ok(EXIT_SUCCESS)
}

/// Render messages in the selected format.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_output(
    format: OutputFormat,
    messages: &[Message],
    color_mode: ColorMode,
    layout: TextLayout,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode)
            .with_layout(layout)
            .format(messages),
        OutputFormat::Json => JsonFormatter.format(messages),
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
