use clap::Parser;

use image_inspect::cli::Cli;
use image_inspect::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.debug);

    std::process::exit(commands::run(&cli));
}
