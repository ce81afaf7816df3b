//! Store adapter implementing the Ocean facade.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache::{Codec, JsonCodec, KeyValueStore, Ocean, OceanError, OceanOptions};

/// [`Ocean`] implementation that delegates to a [`KeyValueStore`].
///
/// The store handle is supplied fully constructed; the adapter never connects,
/// retries or shuts it down. Apart from the store and the options there is no
/// state, so the adapter is as safe to share as the store itself.
#[derive(Debug, Clone)]
pub struct StoreOcean<S, C = JsonCodec> {
    store: S,
    options: OceanOptions<C>,
}

impl<S: KeyValueStore> StoreOcean<S, JsonCodec> {
    /// Adapter with default options: 24h expiration, identity keys, JSON.
    pub fn new(store: S) -> Self {
        Self::with_options(store, OceanOptions::default())
    }
}

impl<S: KeyValueStore, C: Codec> StoreOcean<S, C> {
    pub fn with_options(store: S, options: OceanOptions<C>) -> Self {
        Self { store, options }
    }

    /// The wrapped store, for operations the facade does not offer.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn options(&self) -> &OceanOptions<C> {
        &self.options
    }
}

#[async_trait]
impl<S, C> Ocean for StoreOcean<S, C>
where
    S: KeyValueStore,
    C: Codec,
{
    async fn get<T>(&self, key: &str) -> Result<T, OceanError>
    where
        T: DeserializeOwned + Send,
    {
        let key = self.options.storage_key(key);
        tracing::debug!(key = %key, "reading value");

        let data = match self.store.read(&key).await {
            Ok(Some(data)) => data,
            Ok(None) => {
                tracing::debug!(key = %key, "key does not exist");
                return Err(OceanError::NotFound { key });
            }
            Err(source) => {
                tracing::warn!(key = %key, error = ?source, "store read failed");
                return Err(OceanError::StoreRead { key, source });
            }
        };

        self.options
            .codec()
            .deserialize(&data)
            .map_err(|source| OceanError::Deserialization { key, source })
    }

    async fn set<T>(&self, key: &str, value: &T) -> Result<(), OceanError>
    where
        T: Serialize + Sync + ?Sized,
    {
        let key = self.options.storage_key(key);

        let data = match self.options.codec().serialize(value) {
            Ok(data) => data,
            Err(source) => return Err(OceanError::Serialization { key, source }),
        };

        let ttl = self.options.expiration();
        tracing::debug!(key = %key, bytes = data.len(), ttl_ms = ttl.as_millis() as u64, "writing value");

        if let Err(source) = self.store.write(&key, data, ttl).await {
            tracing::warn!(key = %key, error = ?source, "store write failed");
            return Err(OceanError::StoreWrite { key, source });
        }

        Ok(())
    }
}
