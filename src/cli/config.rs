//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::cli::diagnostic::ConfigDiagnostic;
use crate::cli::output;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Check it: gaffer config validate -c {}",
        path.display()
    ));
    output::note("3. Run: gaffer optimize --pool <FILE>");
    Ok(())
}

/// Execute `config show`.
///
/// Missing files are not an error here: the effective configuration is then
/// just the built-in defaults.
pub fn execute_show(path: &Path) -> Result<()> {
    let from_file = path.exists();
    let config = if from_file {
        Config::load(path)?
    } else {
        Config::default()
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "source": if from_file {
                path.display().to_string()
            } else {
                "defaults".to_string()
            },
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
            "squad": {
                "budget": config.squad.budget,
                "composition": {
                    "keepers": config.squad.composition.keepers,
                    "defenders": config.squad.composition.defenders,
                    "midfielders": config.squad.composition.midfielders,
                    "forwards": config.squad.composition.forwards,
                },
                "formation": {
                    "defenders": {
                        "min": config.squad.formation.defenders.min,
                        "max": config.squad.formation.defenders.max,
                    },
                    "midfielders": {
                        "min": config.squad.formation.midfielders.min,
                        "max": config.squad.formation.midfielders.max,
                    },
                    "forwards": {
                        "min": config.squad.formation.forwards.min,
                        "max": config.squad.formation.forwards.max,
                    },
                },
            },
            "scoring": {
                "bench_fraction": config.scoring.bench_fraction,
            },
            "solver": {
                "time_limit_secs": config.solver.time_limit_secs,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    if from_file {
        output::field("Source", path.display());
    } else {
        output::field("Source", "built-in defaults");
        output::hint(&format!(
            "create a config with {}",
            output::highlight("gaffer config init")
        ));
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Squad");
    output::field("Budget", config.squad.budget);
    output::field(
        "Composition",
        format!(
            "{} GK / {} DEF / {} MID / {} FWD",
            config.squad.composition.keepers,
            config.squad.composition.defenders,
            config.squad.composition.midfielders,
            config.squad.composition.forwards,
        ),
    );
    output::field(
        "Defenders",
        format!(
            "{}-{} starting",
            config.squad.formation.defenders.min, config.squad.formation.defenders.max
        ),
    );
    output::field(
        "Midfielders",
        format!(
            "{}-{} starting",
            config.squad.formation.midfielders.min, config.squad.formation.midfielders.max
        ),
    );
    output::field(
        "Forwards",
        format!(
            "{}-{} starting",
            config.squad.formation.forwards.min, config.squad.formation.forwards.max
        ),
    );

    output::section("Scoring");
    output::field("Bench share", config.scoring.bench_fraction);

    output::section("Solver");
    match config.solver.time_limit_secs {
        Some(secs) => output::field("Time limit", format!("{secs}s")),
        None => output::field("Time limit", "none"),
    }

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());

    match Config::load(path) {
        Ok(_) => {
            output::success("Config file is valid");
            output::field(
                "Next",
                format!("gaffer config show -c {}", path.display()),
            );
            Ok(())
        }
        Err(Error::Config(ConfigError::Parse(parse_error))) => {
            if output::is_json() {
                return Err(ConfigError::Parse(parse_error).into());
            }

            let content = fs::read_to_string(path).unwrap_or_default();
            let report =
                miette::Report::new(ConfigDiagnostic::from_toml_error(&parse_error, &content));
            eprintln!("{report:?}");
            Err(ConfigError::Other("configuration file failed validation".to_string()).into())
        }
        Err(other) => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Helper to create a temporary directory for testing
    fn create_temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    // Tests for CONFIG_TEMPLATE

    #[test]
    fn test_config_template_is_not_empty() {
        assert!(!CONFIG_TEMPLATE.is_empty());
    }

    #[test]
    fn test_config_template_is_valid_toml() {
        let result: std::result::Result<toml::Value, _> = toml::from_str(CONFIG_TEMPLATE);
        assert!(result.is_ok(), "CONFIG_TEMPLATE is not valid TOML");
    }

    #[test]
    fn test_config_template_loads_as_config() {
        // The shipped template must round-trip through the real loader
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, CONFIG_TEMPLATE).unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.squad.composition.total(), 15);
    }

    // Tests for execute_init

    #[test]
    fn test_execute_init_creates_file() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        let result = execute_init(&config_path, false);
        assert!(result.is_ok());
        assert!(config_path.exists());
    }

    #[test]
    fn test_execute_init_writes_template_content() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        execute_init(&config_path, false).unwrap();
        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_init_creates_parent_directories() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir
            .path()
            .join("nested")
            .join("dir")
            .join("config.toml");

        let result = execute_init(&config_path, false);
        assert!(result.is_ok());
        assert!(config_path.exists());
    }

    #[test]
    fn test_execute_init_fails_if_file_exists_without_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(&config_path, "existing content").unwrap();

        let result = execute_init(&config_path, false);
        assert!(result.is_err());

        // Verify original content is preserved
        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, "existing content");
    }

    #[test]
    fn test_execute_init_overwrites_with_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(&config_path, "existing content").unwrap();

        let result = execute_init(&config_path, true);
        assert!(result.is_ok());

        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_init_error_contains_force_hint() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(&config_path, "existing content").unwrap();

        let error = execute_init(&config_path, false).unwrap_err();
        assert!(
            error.to_string().contains("--force"),
            "Error should mention --force flag"
        );
    }

    // Tests for execute_validate

    #[test]
    fn test_execute_validate_accepts_template() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, CONFIG_TEMPLATE).unwrap();

        assert!(execute_validate(&config_path).is_ok());
    }

    #[test]
    fn test_execute_validate_rejects_bad_toml() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[logging\nlevel = ").unwrap();

        assert!(execute_validate(&config_path).is_err());
    }

    #[test]
    fn test_execute_validate_rejects_bad_values() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[scoring]\nbench_fraction = 1.5\n").unwrap();

        let error = execute_validate(&config_path).unwrap_err();
        assert!(error.to_string().contains("bench_fraction"));
    }

    #[test]
    fn test_execute_validate_missing_file_is_error() {
        let missing = PathBuf::from("/nonexistent/gaffer/config.toml");
        assert!(execute_validate(&missing).is_err());
    }

    // Tests for execute_show

    #[test]
    fn test_execute_show_with_defaults() {
        let missing = PathBuf::from("/nonexistent/gaffer/config.toml");
        assert!(execute_show(&missing).is_ok());
    }

    #[test]
    fn test_execute_show_with_file() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[squad]\nbudget = 85.0\n").unwrap();

        assert!(execute_show(&config_path).is_ok());
    }
}
