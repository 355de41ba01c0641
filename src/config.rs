use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Default number of months the calendar view looks ahead
const DEFAULT_MONTHS_AHEAD: u32 = 12;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory where weekend event files are stored
    #[serde(default = "default_planner_dir")]
    pub planner_dir: String,

    /// Display preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Display preferences, injected from config rather than kept as
/// ad-hoc state in the views.
#[derive(Debug, Deserialize)]
pub struct Preferences {
    /// Colorize terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// How many months the calendar view looks ahead
    #[serde(default = "default_months_ahead")]
    pub months_ahead: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            planner_dir: default_planner_dir(),
            preferences: Preferences::default(),
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            color: true,
            months_ahead: DEFAULT_MONTHS_AHEAD,
        }
    }
}

fn default_planner_dir() -> String {
    "~/weekends".to_string()
}

fn default_true() -> bool {
    true
}

fn default_months_ahead() -> u32 {
    DEFAULT_MONTHS_AHEAD
}

/// Get the config file path (~/.config/wknd/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("wknd");
    Ok(config_dir.join("config.toml"))
}

/// Load config from ~/.config/wknd/config.toml.
/// A missing file is not an error; defaults apply.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(&path[2..]);
        }
    }
    PathBuf::from(path)
}

/// Resolve the planner directory from config
pub fn planner_dir(cfg: &Config) -> PathBuf {
    expand_path(&cfg.planner_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_to_empty_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.planner_dir, "~/weekends");
        assert!(config.preferences.color);
        assert_eq!(config.preferences.months_ahead, 12);
    }

    #[test]
    fn test_partial_preferences_keep_other_defaults() {
        let config: Config =
            toml::from_str("planner_dir = \"/tmp/plans\"\n\n[preferences]\ncolor = false\n")
                .unwrap();

        assert_eq!(config.planner_dir, "/tmp/plans");
        assert!(!config.preferences.color);
        assert_eq!(config.preferences.months_ahead, 12);
    }
}
