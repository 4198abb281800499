use crate::utils::error::{Result, RosterError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "saved_data.json";
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

/// Settings file, e.g. `roster.toml`:
///
/// ```toml
/// [storage]
/// data_file = "${HOME}/.roster/saved_data.json"
/// atomic_writes = true
///
/// [logging]
/// format = "compact"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    #[serde(default = "default_true")]
    pub atomic_writes: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            atomic_writes: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_true() -> bool {
    true
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            RosterError::config(format!(
                "cannot read settings file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| RosterError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR_NAME}` with the environment value. Unset variables
    /// are an error rather than silently left in a path.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::config(e.to_string()))?;

        let mut missing = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.push(var_name.to_string());
                String::new()
            })
        });

        if !missing.is_empty() {
            return Err(RosterError::config(format!(
                "environment variable(s) not set: {}",
                missing.join(", ")
            )));
        }

        Ok(result.into_owned())
    }
}
