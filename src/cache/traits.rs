//! Ocean and KeyValueStore trait definitions.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache::{OceanError, StoreError};

/// Typed get/set facade over a key-value store.
///
/// Calls are plain futures: dropping one cancels the in-flight store call, and
/// callers that need a deadline wrap it in `tokio::time::timeout`. No operation
/// besides get and set is offered here; use the underlying store for anything
/// else.
#[async_trait]
pub trait Ocean: Send + Sync {
    /// Read the value stored under `key` and decode it as `T`.
    async fn get<T>(&self, key: &str) -> Result<T, OceanError>
    where
        T: DeserializeOwned + Send;

    /// Store `value` under `key`, replacing any previous value and resetting its
    /// expiration.
    async fn set<T>(&self, key: &str, value: &T) -> Result<(), OceanError>
    where
        T: Serialize + Sync + ?Sized;

    /// Read the value stored under `key` into `dest`.
    ///
    /// `dest` is only written once the value has been read and decoded; on
    /// error it keeps whatever it held before.
    async fn get_into<T>(&self, key: &str, dest: &mut T) -> Result<(), OceanError>
    where
        T: DeserializeOwned + Send,
    {
        *dest = self.get::<T>(key).await?;
        Ok(())
    }
}

/// Raw byte store the facade delegates to.
///
/// Implementations own connection handling; the facade never opens, retries or
/// closes anything.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the bytes stored under `key`, `None` if the key is absent.
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`. A zero `ttl` stores the entry without
    /// expiration.
    async fn write(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), StoreError> {
        (**self).write(key, value, ttl).await
    }
}
