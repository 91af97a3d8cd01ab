//! # Listing Registry Subsystem
//!
//! The Listing Registry is the synchronization and state-transition core
//! of the unvested-token marketplace. It indexes, loads, creates, and
//! transitions listing records held in a generic key-value contract
//! storage slot accessed through a host-supplied store proxy.
//!
//! ## Data Layout
//!
//! ```text
//! listing_keys  ──▶ ["<id>", "<id>", ...]        (the index: JSON array)
//! listing_<id>  ──▶ {amount, price, vestingDate,
//!                    seller, project, status}    (one record: JSON object)
//! ```
//!
//! The index is the sole source of truth for which ids exist; a record
//! the index does not reference is unreachable. Creation writes the
//! record first and appends the id second, so an id never becomes
//! discoverable before its record exists.
//!
//! ## Status State Machine
//!
//! ```text
//!            buy                 cancel
//! active ──────────▶ completed        ┌─▶ canceled
//!    │                                │
//!    └────────────────────────────────┘
//! ```
//!
//! `completed` and `canceled` are terminal; a transition out of a
//! terminal state fails with `InvalidTransition`.
//!
//! ## Failure Posture
//!
//! - Read paths degrade: an unavailable store reads as empty, a corrupt
//!   record is skipped, a corrupt index is treated as empty.
//! - Write paths surface every failure; nothing is retried automatically
//!   and nothing is rolled back. Dangling index entries and unreachable
//!   records are tolerated states.
//! - The store offers no conditional write. Writers sharing one service
//!   instance are serialized internally; writers in independent
//!   processes can still lose index updates (last write wins).
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): listing entity, status machine, JSON
//!   codec, key layout, view projections. No I/O dependencies.
//! - **Ports Layer** (`ports/`): inbound registry API, outbound store
//!   proxy / value envelope / time / id traits.
//! - **Adapters Layer** (`adapters/`): default envelope codec, system
//!   clock and id generator, in-memory store for tests.
//! - **Service Layer** (`service/`): the registry orchestration.
//!
//! ## Privacy Caveat
//!
//! Amounts and prices are stored behind a reversible base64 envelope
//! with an `FHE-` marker. That encoding is publicly invertible and is
//! NOT a confidentiality boundary; see `adapters::envelope`.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export main types for convenience
pub use domain::{
    codec, filter_listings, seller_history, CodecError, KeyScheme, Listing, ListingDraft,
    ListingFilter, ListingId, ListingStats, ListingStatus, RecordPayload, RegistryError,
    StatusFilter, StoreError, ValueError, INDEX_KEY, RECORD_KEY_PREFIX,
};

pub use ports::{DataStore, IdGenerator, ListingRegistryApi, TimeSource, ValueCodec};

pub use adapters::{
    EnvelopeValueCodec, InMemoryDataStore, RandomIdGenerator, SequenceIdGenerator,
    SystemTimeSource, ENVELOPE_PREFIX,
};

pub use service::ListingRegistryService;
