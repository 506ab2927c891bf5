use clap::Parser;

use gaffer::cli::command::{Cli, ColorChoice};
use gaffer::cli::output::{self, OutputConfig};

fn main() {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(error) = gaffer::cli::run(cli) {
        output::error(&error.to_string());
        std::process::exit(1);
    }
}
