//! Layered settings loader
//!
//! Sources, lowest priority first:
//! 1. `default.toml` (required)
//! 2. `{environment}.toml` (optional)
//! 3. `local.toml` (optional)
//! 4. `OCEAN_*` environment variables
//!
//! When a single file is selected, either through `OCEAN_CONFIG_FILE` or
//! [`ConfigLoader::from_file`], it replaces the three file layers.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

pub const CONFIG_DIR_ENV: &str = "OCEAN_CONFIG_DIR";
pub const CONFIG_FILE_ENV: &str = "OCEAN_CONFIG_FILE";

const DEFAULT_CONFIG_DIR: &str = "config";
const ENV_PREFIX: &str = "OCEAN";
const ENV_SEPARATOR: &str = "__";

type Builder = ConfigBuilder<DefaultState>;

/// Resolves where settings come from and loads them into [`Settings`]
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Build a loader from `OCEAN_CONFIG_DIR`, `OCEAN_CONFIG_FILE` and `OCEAN_APP_ENV`
    ///
    /// # Errors
    ///
    /// Fails when both `OCEAN_CONFIG_DIR` and `OCEAN_CONFIG_FILE` are set.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from);
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_dir.is_some() && config_file.is_some() {
            return Err(ConfigError::mutual_exclusivity(format!(
                "{CONFIG_DIR_ENV} and {CONFIG_FILE_ENV} cannot both be set. \
                 Use {CONFIG_DIR_ENV} for layered configuration or \
                 {CONFIG_FILE_ENV} for a single configuration file."
            )));
        }

        Ok(Self {
            config_dir: config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Load a single file plus `OCEAN_*` overrides, ignoring the directory layers
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Override the environment used to pick `{environment}.toml`
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Read every source, deserialize and validate
    ///
    /// # Errors
    ///
    /// - [`ConfigError::FileNotFound`] when `default.toml` (or the single file) is missing
    /// - [`ConfigError::ParseError`] when the merged sources do not fit [`Settings`]
    /// - [`ConfigError::ValidationError`] when a value is out of range
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let settings: Settings = self.build_config()?.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {e}"))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = match &self.config_file {
            Some(file) => add_file(Config::builder(), file, true)?,
            None => self.add_layers(Config::builder())?,
        };

        // OCEAN_REDIS__POOL_SIZE -> redis.pool_size
        add_env(builder).build().map_err(ConfigError::from)
    }

    fn add_layers(&self, builder: Builder) -> Result<Builder, ConfigError> {
        let builder = add_file(builder, &self.config_dir.join("default.toml"), true)?;
        let builder = add_file(
            builder,
            &self.config_dir.join(self.environment.config_file_name()),
            false,
        )?;
        add_file(builder, &self.config_dir.join("local.toml"), false)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: None,
            environment: AppEnvironment::default(),
        })
    }
}

fn add_file(builder: Builder, path: &Path, required: bool) -> Result<Builder, ConfigError> {
    if required && !path.exists() {
        return Err(ConfigError::file_not_found(format!(
            "Required configuration file not found: {}",
            path.display()
        )));
    }

    let name = path.to_str().ok_or_else(|| {
        ConfigError::ParseError(format!("Non UTF-8 configuration path: {}", path.display()))
    })?;

    Ok(builder.add_source(File::new(name, FileFormat::Toml).required(required)))
}

fn add_env(builder: Builder) -> Builder {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .ignore_empty(true)
            .try_parsing(true),
    )
}
