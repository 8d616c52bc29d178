use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "image-inspect")]
#[command(author, version, about = "Inspect image: checks media trees for naming or structural problems")]
#[command(long_about = "Checks that every file below a directory matches one of the path \
    templates of a profile, and that every extracted value satisfies the profile's rules.\n\n\
    Run without a profile to list the available profiles.\n\n\
    Exit codes:\n  \
    0 - The inspection ran (findings are reported, not failed on)\n  \
    1 - Configuration or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Name of the image profile
    pub profile: Option<String>,

    /// Root directory of the image
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Activate DEBUG logging
    #[arg(long)]
    pub debug: bool,

    /// Also report every extracted value (info findings)
    #[arg(short, long)]
    pub verbose: bool,

    /// Use list output
    #[arg(short, long)]
    pub list: bool,

    /// Show all details of the specified profile
    #[arg(short = 'p', long)]
    pub profile_help: bool,

    /// Profile definitions file (TOML)
    #[arg(short, long)]
    pub definitions: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
