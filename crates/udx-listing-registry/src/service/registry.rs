//! # Listing Registry API Implementation
//!
//! Implements the `ListingRegistryApi` trait: load, create, transition,
//! aggregate.

use async_trait::async_trait;

use super::ListingRegistryService;
use crate::domain::codec;
use crate::domain::{
    Listing, ListingDraft, ListingId, ListingStats, ListingStatus, RecordPayload, RegistryError,
};
use crate::ports::inbound::ListingRegistryApi;
use crate::ports::outbound::{DataStore, IdGenerator, ValueCodec};

#[async_trait]
impl<S, V, G> ListingRegistryApi for ListingRegistryService<S, V, G>
where
    S: DataStore,
    V: ValueCodec,
    G: IdGenerator,
{
    async fn list_all(&self) -> Result<Vec<Listing>, RegistryError> {
        match self.store.is_available().await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("[registry] store not ready, returning empty listing set");
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::warn!("[registry] readiness probe failed, treating as empty: {e}");
                return Ok(Vec::new());
            }
        }

        let ids = self.load_index().await;
        let mut listings = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(listing) = self.load_record(id).await {
                listings.push(listing);
            }
        }

        // Newest vesting dates first.
        listings.sort_by(|a, b| b.vesting_date.cmp(&a.vesting_date));

        Ok(listings)
    }

    async fn create(&self, draft: ListingDraft) -> Result<Listing, RegistryError> {
        self.ensure_writable().await?;

        let id = self.ids.next_id();
        let payload = RecordPayload {
            amount: self.values.encode(draft.amount),
            price: self.values.encode(draft.price),
            vesting_date: draft.vesting_date,
            seller: draft.seller,
            project: draft.project,
            status: ListingStatus::Active,
        };

        // Record first, index second: an id must never be discoverable
        // before its record exists. The reverse failure (record written,
        // index append lost) leaves an unreachable record, which readers
        // tolerate.
        let bytes = codec::encode_record(&payload)?;
        self.store
            .set_data(&self.keys.record_key(&id), bytes)
            .await?;
        self.append_to_index(&id).await?;

        let listing = Listing::from_payload(id, payload);
        tracing::info!(
            "[registry] 📝 listing {} created for project '{}'",
            listing.id,
            listing.project
        );
        Ok(listing)
    }

    async fn transition(
        &self,
        id: &str,
        target: ListingStatus,
    ) -> Result<Listing, RegistryError> {
        self.ensure_writable().await?;

        let _guard = self.write_guard.lock().await;

        let key = self.keys.record_key(id);
        let bytes = self.store.get_data(&key).await?;
        if bytes.is_empty() {
            return Err(RegistryError::NotFound { id: id.to_string() });
        }
        let mut payload = match codec::decode_record(&bytes) {
            Ok(payload) => payload,
            Err(e) => {
                // An undecodable record is treated as absent.
                tracing::warn!("[registry] record for {id} is undecodable: {e}");
                return Err(RegistryError::NotFound { id: id.to_string() });
            }
        };

        if !payload.status.can_transition_to(target) {
            return Err(RegistryError::InvalidTransition {
                id: id.to_string(),
                from: payload.status,
                to: target,
            });
        }

        payload.status = target;
        let bytes = codec::encode_record(&payload)?;
        self.store.set_data(&key, bytes).await?;

        tracing::info!("[registry] listing {id} -> {target}");
        Ok(Listing::from_payload(id.to_string(), payload))
    }

    fn compute_aggregate(&self, listings: &[Listing]) -> ListingStats {
        let mut stats = ListingStats::default();
        for listing in listings {
            stats.total += 1;
            match listing.status {
                ListingStatus::Active => stats.active += 1,
                ListingStatus::Completed => stats.completed += 1,
                ListingStatus::Canceled => stats.canceled += 1,
            }
            // An undecodable amount or price contributes zero; the
            // aggregate never aborts for one bad record.
            let value = self
                .values
                .decode(&listing.encrypted_amount)
                .ok()
                .zip(self.values.decode(&listing.encrypted_price).ok())
                .map(|(amount, price)| amount * price)
                .unwrap_or(0.0);
            stats.total_value += value;
        }
        stats
    }
}

impl<S, V, G> ListingRegistryService<S, V, G>
where
    S: DataStore,
    V: ValueCodec,
    G: IdGenerator,
{
    /// Write paths refuse to proceed against a store that is not ready;
    /// no write happened, so the caller must see the failure.
    async fn ensure_writable(&self) -> Result<(), RegistryError> {
        match self.store.is_available().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(RegistryError::StoreUnavailable),
            Err(e) => Err(RegistryError::Store(e)),
        }
    }

    /// Load the id index. Absent keys, transport failures, and malformed
    /// payloads all degrade to an empty index on this path.
    async fn load_index(&self) -> Vec<ListingId> {
        let bytes = match self.store.get_data(self.keys.index_key()).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("[registry] failed to read listing index: {e}");
                return Vec::new();
            }
        };
        match codec::decode_index(&bytes) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("[registry] malformed listing index, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Load one record. Any failure (transport, absent, undecodable)
    /// skips the entry so one bad record never blocks the rest.
    async fn load_record(&self, id: ListingId) -> Option<Listing> {
        let bytes = match self.store.get_data(&self.keys.record_key(&id)).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("[registry] failed to load listing {id}: {e}");
                return None;
            }
        };
        if bytes.is_empty() {
            // Dangling index entry: the record write was lost or never
            // happened. Tolerated.
            tracing::warn!("[registry] index references {id} but no record exists");
            return None;
        }
        match codec::decode_record(&bytes) {
            Ok(payload) => Some(Listing::from_payload(id, payload)),
            Err(e) => {
                tracing::warn!("[registry] skipping undecodable listing {id}: {e}");
                None
            }
        }
    }

    /// Append `id` to the index under the write guard.
    ///
    /// Duplicate ids are possible by contract and left to readers to
    /// tolerate; the guard only serializes writers sharing this instance.
    async fn append_to_index(&self, id: &str) -> Result<(), RegistryError> {
        let _guard = self.write_guard.lock().await;
        let mut ids = self.load_index().await;
        ids.push(id.to_string());
        let bytes = codec::encode_index(&ids)?;
        self.store
            .set_data(self.keys.index_key(), bytes)
            .await
            .map_err(RegistryError::from)
    }
}
