//! Configuration module for `dplanner`

use crate::core::error::{PlannerError, Result};
use logger::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside config values
const DIR_VARIABLE: &str = "$DPLANNER";

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Saved plan (JSON)
    #[serde(default)]
    pub plan_file: String,
    /// Directory for exported summaries
    #[serde(default)]
    pub reports_dir: String,
    /// Course catalog (TOML); empty means the built-in catalog
    #[serde(default)]
    pub catalog_file: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override saved plan path
    pub plan_file: Option<String>,
    /// Override export directory
    pub reports_dir: Option<String>,
    /// Override catalog path
    pub catalog_file: Option<String>,
}

impl Config {
    /// Get the `$DPLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/dplanner`
    /// - macOS: `~/Library/Application Support/dplanner`
    /// - Windows: `%APPDATA%\dplanner`
    #[must_use]
    pub fn get_dplanner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dplanner")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading so that fields added in newer versions get their
    /// default values. Only fields that are empty here and non-empty in
    /// `defaults` are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.plan_file.is_empty() && !defaults.paths.plan_file.is_empty() {
            self.paths.plan_file.clone_from(&defaults.paths.plan_file);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }
        // empty catalog_file selects the built-in catalog

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values. Nothing is written back
    /// to the config file.
    ///
    /// # Arguments
    ///
    /// * `overrides` - A `ConfigOverrides` struct with optional override values
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(plan_file) = &overrides.plan_file {
            self.paths.plan_file.clone_from(plan_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(catalog_file) = &overrides.catalog_file {
            self.paths.catalog_file.clone_from(catalog_file);
        }
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (keeps a separate debug config)
    ///
    /// The file is located in the directory returned by [`get_dplanner_dir`].
    ///
    /// [`get_dplanner_dir`]: Self::get_dplanner_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_dplanner_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$DPLANNER` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_dplanner_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$DPLANNER` in path values. Missing fields use their serde
    /// defaults (empty strings or false).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.plan_file = Self::expand_variables(&config.paths.plan_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);
        config.paths.catalog_file = Self::expand_variables(&config.paths.catalog_file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// - Debug: Uses `DefaultCLIConfigDebug.toml`
    /// - Release: Uses `DefaultCLIConfigRelease.toml`
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML or cannot be parsed.
    /// This should never happen in practice since the defaults are compiled into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, or create it from defaults
    ///
    /// See [`load_from`](Self::load_from).
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`
    ///
    /// - File exists: load it, merge missing fields from defaults and save
    ///   back if anything was added
    /// - File missing (first run): write the defaults there
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        if let Err(e) = config.save_to(config_file) {
                            warn!("Could not update config file: {e}");
                        }
                    }
                    return config;
                }
            }
        } else {
            if let Err(e) = defaults.save_to(config_file) {
                warn!("Could not write default config file: {e}");
            }
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration as TOML to `config_file`, creating its directory
    ///
    /// # Errors
    /// Returns an error if serialization fails, the directory cannot be
    /// created or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<()> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent).map_err(|e| PlannerError::io(parent, e))?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str).map_err(|e| PlannerError::io(config_file, e))
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`: Logging level ("debug", "info", "warn", "error")
    /// - `file`: Log file path
    /// - `verbose`: Verbose logging boolean
    /// - `plan_file`: Saved plan path
    /// - `reports_dir`: Export directory
    /// - `catalog_file`: Course catalog path
    ///
    /// # Returns
    /// `None` if the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "plan_file" | "plan-file" => Some(self.paths.plan_file.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "catalog_file" | "catalog-file" => Some(self.paths.catalog_file.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g., "maybe" for verbose)
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "level" => {
                value
                    .parse::<logger::Level>()
                    .map_err(|_| format!("Invalid log level: '{value}'"))?;
                self.logging.level = value.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "plan_file" | "plan-file" => self.paths.plan_file = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "catalog_file" | "catalog-file" => self.paths.catalog_file = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> std::result::Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "plan_file" | "plan-file" => self.paths.plan_file.clone_from(&defaults.paths.plan_file),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "catalog_file" | "catalog-file" => self
                .paths
                .catalog_file
                .clone_from(&defaults.paths.catalog_file),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> std::result::Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  plan_file = \"{}\"", self.paths.plan_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;
        writeln!(f, "  catalog_file = \"{}\"", self.paths.catalog_file)?;

        Ok(())
    }
}
