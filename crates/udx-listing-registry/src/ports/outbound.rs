//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the Listing Registry service. These are the
//! interfaces the host application must supply; test adapters live in the
//! `adapters` module.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ListingId, StoreError, ValueError};

/// Abstract interface to the key-value contract storage slot.
///
/// Every call suspends on an external service. The store offers plain
/// get/set only: no transactions, no conditional writes. Concurrent
/// read-modify-write cycles against the same key from independent callers
/// can therefore lose updates; the registry documents this and serializes
/// its own writers, but cannot guard callers it does not know about.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Readiness probe. `false` means "no data", not an error, on read
    /// paths; write paths refuse to proceed.
    async fn is_available(&self) -> Result<bool, StoreError>;

    /// Fetch the payload under `key`. Missing keys yield empty bytes.
    async fn get_data(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Write the payload under `key`.
    async fn set_data(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: DataStore + ?Sized> DataStore for Arc<T> {
    async fn is_available(&self) -> Result<bool, StoreError> {
        (**self).is_available().await
    }

    async fn get_data(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        (**self).get_data(key).await
    }

    async fn set_data(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        (**self).set_data(key, value).await
    }
}

/// Abstract interface for the amount/price value envelope.
///
/// The registry treats encoded values as opaque strings; only this codec
/// interprets them. The default adapter is a reversible base64 marking,
/// not cryptography.
pub trait ValueCodec: Send + Sync {
    /// Envelope a plain number.
    fn encode(&self, value: f64) -> String;

    /// Recover the plain number from an envelope.
    fn decode(&self, encoded: &str) -> Result<f64, ValueError>;
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Abstract interface for listing id generation.
///
/// Ids must be collision-resistant; they become store keys and index
/// entries and are never reused.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ListingId;
}
