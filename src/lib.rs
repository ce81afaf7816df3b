//! Ocean
//!
//! A small typed caching facade: `get` and `set` values by key over Redis,
//! with pluggable key generation, serialization and expiration.

use shadow_rs::shadow;
shadow!(build);

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;

pub use cache::{KeyValueStore, Ocean, OceanError, OceanOptions, StoreOcean};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
