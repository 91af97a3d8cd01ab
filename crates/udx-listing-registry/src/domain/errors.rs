//! # Domain Errors
//!
//! Error types for the Listing Registry subsystem.
//!
//! ## Design Principles
//!
//! - Read paths degrade: malformed payloads are skipped or treated as empty
//! - Write paths surface every failure so the caller can retry or alert
//! - No panics in domain logic (use Result instead)

use thiserror::Error;

use super::entities::{ListingId, ListingStatus};

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No record resolves for this id.
    #[error("listing not found: {id}")]
    NotFound { id: ListingId },

    /// Transition requested from a non-active state, or to a
    /// non-terminal target state.
    #[error("invalid transition for listing {id}: {from} -> {to}")]
    InvalidTransition {
        id: ListingId,
        from: ListingStatus,
        to: ListingStatus,
    },

    /// The backing store reports not ready. Only surfaced on write
    /// paths; read paths treat it as "no data".
    #[error("backing store is not available")]
    StoreUnavailable,

    /// Transport failure talking to the backing store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Payload failed to encode. Decode failures on read paths are
    /// recovered locally and never reach the caller through this variant.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Store proxy errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// I/O or transport error during a store call.
    #[error("store I/O error: {message}")]
    Io { message: String },

    /// Store call timed out.
    #[error("store request timed out")]
    Timeout,
}

/// Record/index payload codec errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Zero-byte payload where a record was expected.
    #[error("empty payload")]
    Empty,

    /// Payload bytes are not valid UTF-8 text.
    #[error("payload is not valid UTF-8")]
    NotUtf8(#[from] std::str::Utf8Error),

    /// Record payload is not a well-formed record object.
    #[error("malformed record payload: {0}")]
    MalformedRecord(serde_json::Error),

    /// Index payload is not a list of id strings.
    #[error("malformed index payload: {0}")]
    MalformedIndex(serde_json::Error),
}

/// Value envelope decode errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Envelope body is not valid base64.
    #[error("envelope payload is not valid base64")]
    InvalidBase64,

    /// Decoded text does not parse as a number.
    #[error("envelope payload is not a number: {text:?}")]
    NotANumber { text: String },
}
