//! Interactive setup wizard.
//!
//! Walks through budget, scoring, formation bounds, and logging format, then
//! writes the configuration file. Scripted setups should use
//! `gaffer config init` instead.

use std::fs;
use std::path::PathBuf;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::output;
use crate::error::{ConfigError, Result};

/// Default config template used by the setup wizard.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Run the interactive setup wizard.
pub fn execute(path: PathBuf, force: bool) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`gaffer init` is interactive; use `gaffer config init` for scripted setup"
                .to_string(),
        }
        .into());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    println!();
    output::note("Welcome to gaffer. Let's set up your rule book.");
    println!();

    let theme = ColorfulTheme::default();

    // ─────────────────────────────────────────────────────────────────────────
    // Budget
    // ─────────────────────────────────────────────────────────────────────────

    output::section("Budget");

    let budget: f64 = Input::with_theme(&theme)
        .with_prompt("Total squad budget (millions)")
        .default(100.0)
        .interact()?;

    if budget < 0.0 {
        return Err(ConfigError::InvalidValue {
            field: "squad.budget",
            reason: "must not be negative".to_string(),
        }
        .into());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scoring
    // ─────────────────────────────────────────────────────────────────────────

    output::section("Scoring");

    let bench_fraction: f64 = Input::with_theme(&theme)
        .with_prompt("Bench value fraction (0 to 1)")
        .default(0.1)
        .interact()?;

    if !(0.0..=1.0).contains(&bench_fraction) {
        return Err(ConfigError::InvalidValue {
            field: "scoring.bench_fraction",
            reason: "must be between 0 and 1".to_string(),
        }
        .into());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Formation
    // ─────────────────────────────────────────────────────────────────────────

    output::section("Formation");

    let presets = &["Standard (3-5 DEF, 2-5 MID, 1-3 FWD)", "Custom"];
    let preset = Select::with_theme(&theme)
        .with_prompt("Starting lineup bounds")
        .items(presets)
        .default(0)
        .interact()?;

    let formation = if preset == 0 {
        [(3, 5), (2, 5), (1, 3)]
    } else {
        [
            prompt_range(&theme, "defenders", 3, 5)?,
            prompt_range(&theme, "midfielders", 2, 5)?,
            prompt_range(&theme, "forwards", 1, 3)?,
        ]
    };

    // ─────────────────────────────────────────────────────────────────────────
    // Logging
    // ─────────────────────────────────────────────────────────────────────────

    output::section("Logging");

    let formats = &["pretty (human-readable)", "json (machine-readable)"];
    let format_choice = Select::with_theme(&theme)
        .with_prompt("Log format")
        .items(formats)
        .default(0)
        .interact()?;
    let log_format = if format_choice == 0 { "pretty" } else { "json" };

    // ─────────────────────────────────────────────────────────────────────────
    // Generate & Write Config
    // ─────────────────────────────────────────────────────────────────────────

    println!();
    let spinner = output::spinner("Writing configuration...");

    if path.exists() && !force {
        output::spinner_fail(&spinner, "Config already exists");
        let overwrite = Confirm::with_theme(&theme)
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            output::note("Setup aborted.");
            return Ok(());
        }
    }

    let config = generate_config(budget, bench_fraction, &formation, log_format)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, config)?;

    output::spinner_success(&spinner, "Configuration saved");

    // ─────────────────────────────────────────────────────────────────────────
    // Summary
    // ─────────────────────────────────────────────────────────────────────────

    output::section("Ready");

    output::success(&format!("Config   {}", path.display()));
    output::success(&format!("Budget   {budget}"));
    output::success(&format!("Bench    {bench_fraction}"));

    println!();
    output::section("Next Steps");

    output::note(&format!(
        "1. Review: {}",
        output::highlight(format!("gaffer config show -c {}", path.display()))
    ));
    output::note(&format!(
        "2. Optimize: {}",
        output::highlight("gaffer optimize --pool players.csv")
    ));

    Ok(())
}

/// Ask for the starter range of one outfield position.
fn prompt_range(
    theme: &ColorfulTheme,
    position: &str,
    default_min: u64,
    default_max: u64,
) -> Result<(u64, u64)> {
    let min: u64 = Input::with_theme(theme)
        .with_prompt(format!("Minimum starting {position}"))
        .default(default_min)
        .interact()?;
    let max: u64 = Input::with_theme(theme)
        .with_prompt(format!("Maximum starting {position}"))
        .default(default_max)
        .interact()?;

    if min > max {
        return Err(ConfigError::InvalidValue {
            field: "squad.formation",
            reason: format!("minimum starting {position} exceeds the maximum"),
        }
        .into());
    }

    Ok((min, max))
}

/// Render the wizard's answers over the template.
fn generate_config(
    budget: f64,
    bench_fraction: f64,
    formation: &[(u64, u64); 3],
    log_format: &str,
) -> Result<String> {
    let mut config: toml::Value = toml::from_str(CONFIG_TEMPLATE).map_err(ConfigError::Parse)?;
    let table = config.as_table_mut().ok_or_else(|| {
        ConfigError::Other("config template root must be a TOML table".to_string())
    })?;

    if let Some(logging) = table.get_mut("logging").and_then(toml::Value::as_table_mut) {
        logging.insert(
            "format".to_string(),
            toml::Value::String(log_format.to_string()),
        );
    }

    if let Some(squad) = table.get_mut("squad").and_then(toml::Value::as_table_mut) {
        squad.insert("budget".to_string(), toml::Value::Float(budget));

        if let Some(formation_table) = squad
            .get_mut("formation")
            .and_then(toml::Value::as_table_mut)
        {
            for (name, (min, max)) in ["defenders", "midfielders", "forwards"]
                .iter()
                .zip(formation)
            {
                let mut range = toml::value::Table::new();
                range.insert("min".to_string(), toml::Value::Integer(*min as i64));
                range.insert("max".to_string(), toml::Value::Integer(*max as i64));
                formation_table.insert((*name).to_string(), toml::Value::Table(range));
            }
        }
    }

    if let Some(scoring) = table.get_mut("scoring").and_then(toml::Value::as_table_mut) {
        scoring.insert(
            "bench_fraction".to_string(),
            toml::Value::Float(bench_fraction),
        );
    }

    toml::to_string_pretty(&config).map_err(|error| ConfigError::Other(error.to_string()).into())
}
