//! Cache error types.

use std::fmt;

use thiserror::Error;

/// The facade operation an error was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Set,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Get => f.write_str("get"),
            Operation::Set => f.write_str("set"),
        }
    }
}

/// Errors returned by [`Ocean`](crate::cache::Ocean) operations.
///
/// Every variant carries the storage key (the key after the key generator ran),
/// so callers can tell which entry failed without re-deriving it. None of these
/// are retried internally.
#[derive(Error, Debug)]
pub enum OceanError {
    /// The value could not be encoded before the write.
    #[error("failed to serialize value for key {key}")]
    Serialization {
        key: String,
        #[source]
        source: CodecError,
    },

    /// The store rejected or failed the write.
    #[error("failed to set key {key}")]
    StoreWrite {
        key: String,
        #[source]
        source: StoreError,
    },

    /// The store failed the read for a reason other than absence.
    #[error("failed to get key {key}")]
    StoreRead {
        key: String,
        #[source]
        source: StoreError,
    },

    /// The storage key does not exist in the store.
    #[error("key {key} does not exist")]
    NotFound { key: String },

    /// The stored bytes could not be decoded into the requested type.
    #[error("failed to deserialize value for key {key}")]
    Deserialization {
        key: String,
        #[source]
        source: CodecError,
    },
}

impl OceanError {
    /// Returns `true` when the key was simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, OceanError::NotFound { .. })
    }

    /// The storage key the failed operation addressed.
    pub fn key(&self) -> &str {
        match self {
            OceanError::Serialization { key, .. }
            | OceanError::StoreWrite { key, .. }
            | OceanError::StoreRead { key, .. }
            | OceanError::NotFound { key }
            | OceanError::Deserialization { key, .. } => key,
        }
    }

    /// The facade operation that produced this error.
    pub fn operation(&self) -> Operation {
        match self {
            OceanError::Serialization { .. } | OceanError::StoreWrite { .. } => Operation::Set,
            OceanError::StoreRead { .. }
            | OceanError::NotFound { .. }
            | OceanError::Deserialization { .. } => Operation::Get,
        }
    }
}

/// Errors raised by a [`Codec`](crate::cache::Codec).
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("JSON codec error")]
    Json(#[from] serde_json::Error),

    #[error("codec error: {0}")]
    Custom(String),
}

impl CodecError {
    /// Build an error for codecs that do not wrap a library error type.
    pub fn custom(message: impl Into<String>) -> Self {
        CodecError::Custom(message.into())
    }
}

/// Errors raised by a [`KeyValueStore`](crate::cache::KeyValueStore).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis error")]
    Redis(#[from] redis::RedisError),

    #[error("Connection pool error: {0}")]
    Pool(String),

    #[error("Store operation failed: {0}")]
    Backend(String),
}

impl From<bb8::RunError<redis::RedisError>> for StoreError {
    fn from(err: bb8::RunError<redis::RedisError>) -> Self {
        match err {
            bb8::RunError::User(e) => StoreError::Redis(e),
            bb8::RunError::TimedOut => {
                StoreError::Pool("timed out waiting for a pooled connection".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_storage_key() {
        let err = OceanError::NotFound {
            key: "app:user:1".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.key(), "app:user:1");
        assert_eq!(err.operation(), Operation::Get);
        assert_eq!(err.to_string(), "key app:user:1 does not exist");
    }

    #[test]
    fn test_operation_mapping() {
        let ser = OceanError::Serialization {
            key: "k".to_string(),
            source: CodecError::custom("boom"),
        };
        let write = OceanError::StoreWrite {
            key: "k".to_string(),
            source: StoreError::Backend("down".to_string()),
        };
        let read = OceanError::StoreRead {
            key: "k".to_string(),
            source: StoreError::Backend("down".to_string()),
        };
        let de = OceanError::Deserialization {
            key: "k".to_string(),
            source: CodecError::custom("bad bytes"),
        };

        assert_eq!(ser.operation(), Operation::Set);
        assert_eq!(write.operation(), Operation::Set);
        assert_eq!(read.operation(), Operation::Get);
        assert_eq!(de.operation(), Operation::Get);
        assert!(!read.is_not_found());
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = OceanError::StoreWrite {
            key: "k".to_string(),
            source: StoreError::Pool("timed out".to_string()),
        };
        let source = err.source().expect("store error should be the source");
        assert_eq!(source.to_string(), "Connection pool error: timed out");
        assert_eq!(err.to_string(), "failed to set key k");
    }

    #[test]
    fn test_error_chain_prints_cause_once() {
        let err = OceanError::Deserialization {
            key: "app:user:1".to_string(),
            source: CodecError::custom("bad bytes"),
        };
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(
            chain,
            "failed to deserialize value for key app:user:1: codec error: bad bytes"
        );
    }

    #[test]
    fn test_pool_timeout_conversion() {
        let err: StoreError = bb8::RunError::<redis::RedisError>::TimedOut.into();
        assert!(matches!(err, StoreError::Pool(_)));
    }
}
