//! # Value Objects
//!
//! Immutable value objects for the Listing Registry subsystem.

/// Well-known key holding the serialized listing index.
pub const INDEX_KEY: &str = "listing_keys";

/// Prefix of per-record keys: one `listing_{id}` payload per listing.
pub const RECORD_KEY_PREFIX: &str = "listing_";

/// Store key layout for the registry.
///
/// The defaults match the wire format of the deployed contract slot.
/// Overriding the keys namespaces a registry inside a shared store,
/// which the tests use to run registries side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyScheme {
    index_key: String,
    record_prefix: String,
}

impl Default for KeyScheme {
    fn default() -> Self {
        Self {
            index_key: INDEX_KEY.to_string(),
            record_prefix: RECORD_KEY_PREFIX.to_string(),
        }
    }
}

impl KeyScheme {
    /// Key layout with a custom index key and record prefix.
    pub fn new(index_key: impl Into<String>, record_prefix: impl Into<String>) -> Self {
        Self {
            index_key: index_key.into(),
            record_prefix: record_prefix.into(),
        }
    }

    /// Key under which the id index is stored.
    pub fn index_key(&self) -> &str {
        &self.index_key
    }

    /// Key under which the record for `id` is stored.
    pub fn record_key(&self, id: &str) -> String {
        format!("{}{}", self.record_prefix, id)
    }
}
