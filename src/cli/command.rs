//! Command-line interface definitions.
//!
//! Defines the CLI structure for the gaffer application using `clap`.
//! The CLI supports subcommands for optimizing a squad, comparing saved
//! rosters, exporting availability adjustments, and managing configuration.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;

/// Fantasy football squad optimization CLI
#[derive(Parser, Debug)]
#[command(name = "gaffer")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the gaffer CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick the optimal 15-player squad from a candidate pool
    Optimize(OptimizeArgs),

    /// Compare two saved rosters by ownership-weighted overlap
    Teamdiff(TeamdiffArgs),

    /// Work with availability adjustments
    #[command(subcommand)]
    Adjustments(AdjustmentsCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Initialize configuration interactively
    Init(InitArgs),
}

/// Subcommands for `gaffer adjustments`.
#[derive(Subcommand, Debug)]
pub enum AdjustmentsCommand {
    /// Export an adjustments CSV for every player below full availability.
    Export(AdjustmentsExportArgs),
}

/// Subcommands for `gaffer config`.
///
/// Provides configuration management utilities including generation,
/// display, and validation of configuration files.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
///
/// Provides a reusable argument definition with a default path to the
/// standard configuration file location.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `optimize` subcommand.
///
/// The pool file is required; everything else falls back to the
/// configuration file, and the budget and bench-fraction flags override
/// the corresponding configuration values.
#[derive(Parser, Debug)]
pub struct OptimizeArgs {
    /// Path to the candidate pool file (.csv or .json).
    #[arg(long)]
    pub pool: PathBuf,

    /// Availability adjustments CSV applied on top of the pool.
    #[arg(long)]
    pub adjustments: Option<PathBuf>,

    /// Write the solved roster to this file as JSON.
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Override the configured budget cap.
    #[arg(long)]
    pub budget: Option<Decimal>,

    /// Override the configured bench fraction (0 to 1).
    #[arg(long)]
    pub bench_fraction: Option<Decimal>,

    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `teamdiff` subcommand.
#[derive(Parser, Debug)]
pub struct TeamdiffArgs {
    /// First saved roster (JSON).
    pub roster_a: PathBuf,

    /// Second saved roster (JSON).
    pub roster_b: PathBuf,

    /// Candidate pool the rosters were drawn from, for ownership weights.
    #[arg(long)]
    pub pool: PathBuf,
}

/// Arguments for the `adjustments export` subcommand.
#[derive(Parser, Debug)]
pub struct AdjustmentsExportArgs {
    /// Path to the candidate pool file (.csv or .json).
    #[arg(long)]
    pub pool: PathBuf,

    /// Output file path (writes to stdout if not specified).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `config init` subcommand.
///
/// Controls configuration file generation from the built-in template.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the interactive `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}
