//! Merges CLI flags over file-based settings
//!
//! Flags win over everything the loader read, including `OCEAN_*` variables.

use std::path::Path;

use super::parser::Cli;
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Environment, settings::Settings};

/// Applies CLI overrides to a loaded [`Settings`]
#[derive(Debug)]
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base settings the way the CLI asked for
    ///
    /// `--config` selects a single file, otherwise the layered directory is
    /// used. `--env` overrides `OCEAN_APP_ENV` in both cases.
    ///
    /// # Errors
    /// Returns ConfigError if loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let environment = cli.env.map(Environment::from);
        let loader = Self::loader(cli.config.as_deref(), environment)?;
        Ok(Self::new(loader.load()?))
    }

    fn loader(
        config_path: Option<&Path>,
        environment: Option<Environment>,
    ) -> Result<ConfigLoader, ConfigError> {
        let loader = match config_path {
            Some(path) => {
                Self::validate_config_file_access(path)?;
                ConfigLoader::from_file(path)
            }
            None => ConfigLoader::new()?,
        };

        Ok(match environment {
            Some(environment) => loader.with_environment(environment),
            None => loader,
        })
    }

    fn validate_config_file_access(path: &Path) -> Result<(), ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::validation(
                "config_file".to_string(),
                format!("Configuration path is not a readable file: '{}'", path.display()),
            ));
        }

        std::fs::File::open(path).map(|_| ()).map_err(|e| {
            ConfigError::validation(
                "config_file".to_string(),
                format!("Cannot read configuration file '{}': {e}", path.display()),
            )
        })
    }

    /// Apply CLI overrides and validate the result
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(seconds) = cli.timeout {
            config.cache.operation_timeout = Some(seconds);
        }

        config.validate()?;
        Ok(config)
    }
}
