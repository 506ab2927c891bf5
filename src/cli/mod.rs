//! CLI module graph and command dispatch.

pub mod adjustments;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod init;
pub mod optimize;
pub mod output;
pub mod paths;
pub mod teamdiff;

use crate::error::Result;
use command::{AdjustmentsCommand, Cli, Commands, ConfigCommand};

/// Dispatch a parsed command line to its handler.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Optimize(args) => optimize::execute(args),
        Commands::Teamdiff(args) => teamdiff::execute(args),
        Commands::Adjustments(AdjustmentsCommand::Export(args)) => {
            adjustments::execute_export(args)
        }
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
        Commands::Init(args) => init::execute(args.path, args.force),
    }
}
