//! # Adapters Layer
//!
//! Default implementations of the outbound ports: the value envelope,
//! system time and id generation, and the in-memory store used by tests.

pub mod envelope;
pub mod infra;
pub mod store;

pub use envelope::{EnvelopeValueCodec, ENVELOPE_PREFIX};
pub use infra::{RandomIdGenerator, SequenceIdGenerator, SystemTimeSource};
pub use store::InMemoryDataStore;
