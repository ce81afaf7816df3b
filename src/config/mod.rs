//! Settings for the `ocean` binary and for callers that build a facade from files
//!
//! Priority, lowest to highest:
//! 1. `default.toml`
//! 2. `{environment}.toml`
//! 3. `local.toml` (kept out of version control)
//! 4. `OCEAN_*` environment variables, `__` separating nested keys

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{
    ApplicationConfig, CacheSettings, ConsoleSettings, FileSettings, LoggerSettings,
    RedisSettings, Settings, StoreBackend, StoreSettings,
};
