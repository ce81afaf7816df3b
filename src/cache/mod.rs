//! Typed get/set caching facade over a remote key-value store.
//!
//! The [`Ocean`] trait is the capability callers depend on. [`StoreOcean`] is
//! its implementation: it maps logical keys to storage keys, encodes values with
//! a [`Codec`] and writes them with a fixed expiration to any
//! [`KeyValueStore`].
//!
//! # Configuration
//!
//! ```toml
//! [store]
//! backend = "redis"  # or "memory"
//!
//! [redis]
//! url = "redis://127.0.0.1:6379"
//! pool_size = 4
//! connection_timeout = 5
//!
//! [cache]
//! expiration_seconds = 86400
//! key_prefix = "ocean"
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let store = RedisStore::connect(&settings.redis).await?;
//! let ocean = StoreOcean::with_options(store, OceanOptions::from_settings(&settings.cache));
//!
//! ocean.set("greeting", "Hello world").await?;
//! let value: String = ocean.get("greeting").await?;
//! ```

mod adapter;
mod codec;
mod error;
mod memory;
mod options;
mod redis;
mod traits;

use std::sync::Arc;

pub use adapter::StoreOcean;
pub use codec::{Codec, JsonCodec};
pub use error::{CodecError, OceanError, Operation, StoreError};
pub use memory::MemoryStore;
pub use options::{DEFAULT_EXPIRATION, KEY_SEPARATOR, KeyGenerator, OceanOptions, OceanOptionsBuilder};
pub use self::redis::RedisStore;
pub use traits::{KeyValueStore, Ocean};

// Re-export config types
pub use crate::config::settings::{CacheSettings, RedisSettings, StoreBackend, StoreSettings};

/// Store chosen at runtime from configuration.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Build the store selected by `[store] backend`.
///
/// The caller owns the result and decides when to drop it.
pub async fn connect_store(
    store: &StoreSettings,
    redis: &RedisSettings,
) -> Result<SharedStore, StoreError> {
    let shared: SharedStore = match store.backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Redis => Arc::new(RedisStore::connect(redis).await?),
    };
    Ok(shared)
}
