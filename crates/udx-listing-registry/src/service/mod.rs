//! # Listing Registry Service
//!
//! The main service implementing the Listing Registry API.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `ListingRegistryApi` over a host-supplied `DataStore`
//! 2. Owns the index read-modify-write cycle and serializes its writers
//! 3. Uses dependency injection for the store, value codec, and id source

mod registry;

use tokio::sync::Mutex;

use crate::domain::KeyScheme;
use crate::ports::outbound::{DataStore, IdGenerator, ValueCodec};

/// The Listing Registry Service.
///
/// ## Concurrency
///
/// The index lives under a single store key and every mutation is a
/// read-modify-write cycle. Writers going through one service instance
/// are serialized by an internal async mutex; the store contract offers
/// no conditional write, so mutations racing from *independent*
/// processes can still lose an update. Hosts that run multiple writers
/// must route them through one registry instance.
pub struct ListingRegistryService<S, V, G>
where
    S: DataStore,
    V: ValueCodec,
    G: IdGenerator,
{
    /// Store proxy for the contract storage slot.
    pub(crate) store: S,
    /// Envelope codec for amounts and prices.
    pub(crate) values: V,
    /// Listing id source.
    pub(crate) ids: G,
    /// Store key layout.
    pub(crate) keys: KeyScheme,
    /// Serializes index and record rewrites issued through this instance.
    pub(crate) write_guard: Mutex<()>,
}

impl<S, V, G> ListingRegistryService<S, V, G>
where
    S: DataStore,
    V: ValueCodec,
    G: IdGenerator,
{
    /// Create a service over the default key layout.
    pub fn new(store: S, values: V, ids: G) -> Self {
        Self::with_keys(store, values, ids, KeyScheme::default())
    }

    /// Create a service over a custom key layout.
    pub fn with_keys(store: S, values: V, ids: G, keys: KeyScheme) -> Self {
        Self {
            store,
            values,
            ids,
            keys,
            write_guard: Mutex::new(()),
        }
    }
}
