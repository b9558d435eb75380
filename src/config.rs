//! Configuration handling for errcodegen.
//! Settings come from an optional configuration file and from the command
//! line, the latter taking precedence.

use crate::error::{Error, Result};
use crate::expander::{Dialect, LineFormat, PLACEHOLDER};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Raw configuration, as written in a configuration file.
/// Every field is optional; unset fields fall back to the next source.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub placeholder: Option<String>,
    pub dialect: Option<Dialect>,
    pub line_format: Option<String>,
    pub strict: Option<bool>,
}

impl Config {
    /// Combines two configurations. Fields set in `overrides` win.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            placeholder: overrides.placeholder.or(self.placeholder),
            dialect: overrides.dialect.or(self.dialect),
            line_format: overrides.line_format.or(self.line_format),
            strict: overrides.strict.or(self.strict),
        }
    }
}

/// Fully resolved settings used by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub placeholder: String,
    pub line_format: LineFormat,
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER.to_string(),
            line_format: LineFormat::default(),
            strict: false,
        }
    }
}

impl TryFrom<Config> for Settings {
    type Error = Error;

    /// Applies built-in defaults. A custom line format takes precedence over
    /// the dialect.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the placeholder or the line format is empty
    fn try_from(config: Config) -> Result<Self> {
        let placeholder = config.placeholder.unwrap_or_else(|| PLACEHOLDER.to_string());
        if placeholder.is_empty() {
            return Err(Error::ConfigError("placeholder must not be empty".to_string()));
        }

        let line_format = match (config.line_format, config.dialect) {
            (Some(format), _) if format.is_empty() => {
                return Err(Error::ConfigError("line format must not be empty".to_string()));
            }
            (Some(format), _) => LineFormat::new(format),
            (None, Some(dialect)) => LineFormat::from(dialect),
            (None, None) => LineFormat::default(),
        };

        Ok(Settings { placeholder, line_format, strict: config.strict.unwrap_or(false) })
    }
}

/// Returns the first configuration file from `config_files` that exists in `dir`.
pub fn find_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files
        .iter()
        .map(|file| dir.as_ref().join(file))
        .find(|path| path.is_file())
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
///   for the configuration schema
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Reads and parses the configuration file at `path`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::ReadError { path: path.to_path_buf(), source })?;
    parse_config(&content)
}

/// Loads the explicitly given configuration file, or the first default
/// configuration file found in `dir`. Without either, returns an empty configuration.
pub fn get_config<P: AsRef<Path>>(explicit: Option<&Path>, dir: P) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path),
        None => match find_config(dir, &crate::constants::CONFIG_FILES) {
            Some(path) => load_config(path),
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}
