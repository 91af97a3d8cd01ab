//! # Infrastructure Adapters
//!
//! System clock and id generation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::domain::ListingId;
use crate::ports::outbound::{IdGenerator, TimeSource};

/// Default time source using system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Default id generator: creation time in milliseconds plus a random
/// UUIDv4 suffix, e.g. `1754520000000-0b9d7f2c6f584e3e9a2f1c8d4b7a6e51`.
///
/// The millisecond prefix keeps ids roughly sortable by creation time;
/// the random suffix makes collisions negligible.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator {
    time: SystemTimeSource,
}

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> ListingId {
        format!("{}-{}", self.time.now_millis(), Uuid::new_v4().simple())
    }
}

/// Deterministic id generator for tests: `id-0`, `id-1`, ...
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> ListingId {
        format!("id-{}", self.next.fetch_add(1, Ordering::Relaxed))
    }
}
