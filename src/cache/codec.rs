//! Value codecs.
//!
//! A codec is the serialize/deserialize pair that decides how values are laid
//! out as bytes in the store. The two halves must be inverses of each other.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache::CodecError;

/// Encodes values to bytes before a write and decodes them after a read.
pub trait Codec: Send + Sync {
    /// Encode `value` into the bytes that will be written to the store.
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>, CodecError>
    where
        T: Serialize + ?Sized;

    /// Decode bytes read from the store.
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, CodecError>
    where
        T: DeserializeOwned;
}

/// The default codec: JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>, CodecError>
    where
        T: Serialize + ?Sized,
    {
        Ok(serde_json::to_vec(value)?)
    }

    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, CodecError>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_slice(bytes)?)
    }
}
