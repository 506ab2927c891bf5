//! Path utilities for gaffer.
//!
//! All data lives under `~/.gaffer/`:
//! - `~/.gaffer/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the gaffer home directory (`~/.gaffer/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gaffer")
}

/// Returns the default config file path (`~/.gaffer/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
