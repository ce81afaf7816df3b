//! Behavioural options for the store adapter.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{Codec, JsonCodec};
use crate::config::settings::CacheSettings;

/// Expiration applied to writes when none is configured: 24 hours.
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(24 * 60 * 60);

/// Separator placed between a key prefix and the logical key.
pub const KEY_SEPARATOR: char = ':';

/// Maps a logical key to the storage key sent to the store.
///
/// Wraps an `Fn`, so the mapping cannot carry mutable state and the same
/// logical key always yields the same storage key.
#[derive(Clone)]
pub struct KeyGenerator(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl KeyGenerator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Storage key equals logical key.
    pub fn identity() -> Self {
        Self::new(str::to_string)
    }

    /// Storage key is `"{prefix}:{key}"`.
    pub fn prefixed(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self::new(move |key| format!("{prefix}{KEY_SEPARATOR}{key}"))
    }

    pub fn generate(&self, key: &str) -> String {
        (self.0)(key)
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for KeyGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyGenerator").finish_non_exhaustive()
    }
}

/// Options bundle held by a [`StoreOcean`](crate::cache::StoreOcean).
///
/// Built once through [`OceanOptions::builder`] and immutable afterwards.
#[derive(Debug, Clone)]
pub struct OceanOptions<C = JsonCodec> {
    expiration: Duration,
    key_generator: KeyGenerator,
    codec: C,
}

impl OceanOptions<JsonCodec> {
    pub fn builder() -> OceanOptionsBuilder<JsonCodec> {
        OceanOptionsBuilder::default()
    }

    /// Options derived from the `[cache]` configuration section.
    pub fn from_settings(settings: &CacheSettings) -> Self {
        let builder = Self::builder().expiration(settings.expiration());
        match settings.key_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => builder.key_prefix(prefix).build(),
            _ => builder.build(),
        }
    }
}

impl Default for OceanOptions<JsonCodec> {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<C: Codec> OceanOptions<C> {
    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    pub fn key_generator(&self) -> &KeyGenerator {
        &self.key_generator
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Storage key for `key`.
    pub fn storage_key(&self, key: &str) -> String {
        self.key_generator.generate(key)
    }
}

/// Builder for [`OceanOptions`]. Setting a field twice keeps the last value.
#[derive(Debug, Clone)]
pub struct OceanOptionsBuilder<C = JsonCodec> {
    expiration: Duration,
    key_generator: KeyGenerator,
    codec: C,
}

impl Default for OceanOptionsBuilder<JsonCodec> {
    fn default() -> Self {
        Self {
            expiration: DEFAULT_EXPIRATION,
            key_generator: KeyGenerator::identity(),
            codec: JsonCodec,
        }
    }
}

impl<C: Codec> OceanOptionsBuilder<C> {
    /// Expiration applied to every write. Not validated; zero means the entry
    /// never expires.
    pub fn expiration(mut self, expiration: Duration) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn key_generator<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.key_generator = KeyGenerator::new(f);
        self
    }

    /// Shorthand for `key_generator(KeyGenerator::prefixed(prefix))`.
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_generator = KeyGenerator::prefixed(prefix);
        self
    }

    /// Replace the codec.
    pub fn codec<D: Codec>(self, codec: D) -> OceanOptionsBuilder<D> {
        OceanOptionsBuilder {
            expiration: self.expiration,
            key_generator: self.key_generator,
            codec,
        }
    }

    pub fn build(self) -> OceanOptions<C> {
        OceanOptions {
            expiration: self.expiration,
            key_generator: self.key_generator,
            codec: self.codec,
        }
    }
}
