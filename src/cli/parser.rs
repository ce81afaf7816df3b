//! CLI argument parsing with clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Key used by `roundtrip` when none is given
pub const DEFAULT_ROUNDTRIP_KEY: &str = "ocean:roundtrip";

/// Value used by `roundtrip` when none is given
pub const DEFAULT_ROUNDTRIP_VALUE: &str = "Hello world";

/// Typed get/set cache client over Redis
#[derive(Parser, Debug)]
#[command(name = "ocean")]
#[command(about = "Typed get/set cache client over Redis")]
#[command(long_about = "
Ocean stores JSON values in Redis under generated keys with a fixed expiration
(24 hours unless configured otherwise) and reads them back.

EXAMPLES:
    # Write a value then read it back (the default command)
    ocean roundtrip

    # Store a JSON document
    ocean set user:42 '{\"name\":\"Ada\"}'

    # Read it back, failing with exit code 2 when the key is absent
    ocean get user:42

    # Use the in-process store, no Redis needed
    OCEAN_STORE__BACKEND=memory ocean roundtrip

    # Bound every store call to 2 seconds
    ocean --timeout 2 get user:42

    # Validate configuration without touching the store
    ocean --env production check
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute (defaults to `roundtrip`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load this TOML file instead of the layered `config/` directory.
    /// `OCEAN_*` environment variables still apply on top of it.
    ///
    /// Example: --config /etc/ocean/ocean.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` overlay is read.
    /// Available values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Deadline for each store operation, in seconds
    ///
    /// Overrides `cache.operation_timeout`. The pending call is dropped when
    /// the deadline passes.
    #[arg(short, long, value_name = "SECONDS", value_parser = super::validation::validate_timeout)]
    pub timeout: Option<u64>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Store a value under a key
    ///
    /// VALUE is parsed as JSON; anything that is not valid JSON is stored as a
    /// JSON string.
    ///
    /// Examples:
    ///   ocean set greeting "Hello world"
    ///   ocean set counter 42
    Set {
        /// Logical key, before prefixing
        #[arg(value_parser = super::validation::validate_key)]
        key: String,

        /// Value to store
        value: String,
    },
    /// Print the value stored under a key as JSON
    Get {
        /// Logical key, before prefixing
        #[arg(value_parser = super::validation::validate_key)]
        key: String,
    },
    /// Set a value and read it back
    Roundtrip {
        /// Key to write
        #[arg(long, default_value = DEFAULT_ROUNDTRIP_KEY, value_parser = super::validation::validate_key)]
        key: String,

        /// Text to write
        #[arg(long, default_value = DEFAULT_ROUNDTRIP_VALUE)]
        value: String,
    },
    /// Validate configuration and print the effective settings
    Check,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Roundtrip {
            key: DEFAULT_ROUNDTRIP_KEY.to_string(),
            value: DEFAULT_ROUNDTRIP_VALUE.to_string(),
        }
    }
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl Cli {
    /// Checks clap cannot express through attributes
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        if let Some(Commands::Set { value, .. }) = &self.command
            && value.is_empty()
        {
            return Err("Refusing to store an empty value".to_string());
        }

        Ok(())
    }

    /// The command to run, `roundtrip` when none was given
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
