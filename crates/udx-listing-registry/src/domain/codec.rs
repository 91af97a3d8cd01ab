//! # Payload Codec
//!
//! Reversible mapping between domain data and the UTF-8 JSON byte payloads
//! held in the store: one record object per listing, one ordered array of
//! id strings for the index.
//!
//! Decoding is strict for records (an undecodable record is an error the
//! caller recovers from by skipping the entry) and lenient for the index
//! (an empty or blank payload is an empty index, not an error).

use super::entities::{ListingId, RecordPayload};
use super::errors::CodecError;

/// Encode one listing record as UTF-8 JSON bytes.
pub fn encode_record(payload: &RecordPayload) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(payload).map_err(CodecError::MalformedRecord)
}

/// Decode one listing record from UTF-8 JSON bytes.
///
/// Fails on empty payloads, non-text payloads, and payloads that are not
/// a well-formed record object. A record with no `status` field decodes
/// with `status = active`.
pub fn decode_record(bytes: &[u8]) -> Result<RecordPayload, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::Empty);
    }
    let text = std::str::from_utf8(bytes)?;
    serde_json::from_str(text).map_err(CodecError::MalformedRecord)
}

/// Encode the ordered id index as UTF-8 JSON bytes.
pub fn encode_index(ids: &[ListingId]) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(ids).map_err(CodecError::MalformedIndex)
}

/// Decode the ordered id index from UTF-8 JSON bytes.
///
/// An empty or blank payload decodes to an empty index; anything else
/// must be a JSON array of id strings.
pub fn decode_index(bytes: &[u8]) -> Result<Vec<ListingId>, CodecError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let text = std::str::from_utf8(bytes)?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).map_err(CodecError::MalformedIndex)
}
