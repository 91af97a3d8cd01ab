//! # Inbound Ports (Driving Ports)
//!
//! Public API exposed by the Listing Registry subsystem.

use async_trait::async_trait;

use crate::domain::{Listing, ListingDraft, ListingStats, ListingStatus, RegistryError};

/// Primary API for the Listing Registry subsystem.
///
/// Read paths degrade gracefully: an unavailable store or a corrupt
/// record yields partial data, never an error. Write paths surface every
/// failure distinctly so the caller can retry or alert the user; nothing
/// is retried automatically.
#[async_trait]
pub trait ListingRegistryApi: Send + Sync {
    /// Load every discoverable listing, ordered by descending vesting date.
    ///
    /// ## Partial-Failure Tolerance
    ///
    /// Ids whose record is missing or undecodable are skipped
    /// individually; one corrupt record never blocks the rest. An
    /// unavailable store yields an empty set.
    async fn list_all(&self) -> Result<Vec<Listing>, RegistryError>;

    /// Create a listing from a draft and make it discoverable.
    ///
    /// The amount and price are enveloped with the registry's value
    /// codec, the record is written first, and only then is the fresh id
    /// appended to the index, so an id never becomes discoverable before
    /// its record exists.
    async fn create(&self, draft: ListingDraft) -> Result<Listing, RegistryError>;

    /// Move a listing from `active` to a terminal status.
    ///
    /// ## Returns
    ///
    /// - `Ok(Listing)`: the rewritten record
    /// - `Err(NotFound)`: no record resolves for `id`
    /// - `Err(InvalidTransition)`: the listing is not `active`, or the
    ///   target status is not terminal
    async fn transition(
        &self,
        id: &str,
        target: ListingStatus,
    ) -> Result<Listing, RegistryError>;

    /// Buy: transition the listing to `completed`.
    async fn complete(&self, id: &str) -> Result<Listing, RegistryError> {
        self.transition(id, ListingStatus::Completed).await
    }

    /// Seller cancel: transition the listing to `canceled`.
    async fn cancel(&self, id: &str) -> Result<Listing, RegistryError> {
        self.transition(id, ListingStatus::Canceled).await
    }

    /// Aggregate a listing set for the dashboard: counts per status and
    /// total value. A listing whose amount or price fails to decode
    /// contributes zero; the aggregate never aborts for one bad record.
    fn compute_aggregate(&self, listings: &[Listing]) -> ListingStats;
}
