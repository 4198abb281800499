#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::FileStorage;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::{TomlConfig, LOG_FORMATS};

#[cfg(feature = "cli")]
pub use cli::CliArgs;

/// Fully resolved settings: command line over settings file over defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub atomic_writes: bool,
    pub log_format: String,
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_settings(settings: TomlConfig) -> Self {
        Self {
            data_file: settings.storage.data_file,
            atomic_writes: settings.storage.atomic_writes,
            log_format: settings.logging.format,
            verbose: false,
        }
    }

    #[cfg(feature = "cli")]
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        let settings = match &args.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut config = Self::from_settings(settings);
        if let Some(data_file) = &args.data_file {
            config.data_file = data_file.clone();
        }
        if args.json_logs {
            config.log_format = "json".to_string();
        }
        config.verbose = args.verbose;

        config.validate()?;
        Ok(config)
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::from_config(self)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_settings(TomlConfig::default())
    }
}

impl ConfigProvider for AppConfig {
    fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn atomic_writes(&self) -> bool {
        self.atomic_writes
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage.data_file", &self.data_file.to_string_lossy())?;
        validate_one_of("logging.format", &self.log_format, &LOG_FORMATS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.data_file(), Path::new("saved_data.json"));
        assert!(config.atomic_writes());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let mut config = AppConfig::default();
        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_settings_file() {
        use std::io::Write;

        let mut settings = tempfile::NamedTempFile::new().unwrap();
        settings
            .write_all(b"[storage]\ndata_file = \"from_file.json\"\natomic_writes = false\n")
            .unwrap();

        let args = CliArgs {
            data_file: Some(PathBuf::from("from_cli.json")),
            config: Some(settings.path().to_path_buf()),
            verbose: true,
            json_logs: true,
        };

        let config = AppConfig::resolve(&args).unwrap();
        assert_eq!(config.data_file, PathBuf::from("from_cli.json"));
        assert!(!config.atomic_writes);
        assert!(config.json_logs());
        assert!(config.verbose);
    }
}
