mod inspect;
mod profiles;

pub use inspect::{format_output, run_inspect, run_inspect_impl};
pub use profiles::{format_profile_help, format_profile_list};

use crate::cli::{Cli, ColorChoice};
use crate::output::ColorMode;

pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Run the command line and return the process exit code.
pub fn run(cli: &Cli) -> i32 {
    run_inspect(cli)
}
