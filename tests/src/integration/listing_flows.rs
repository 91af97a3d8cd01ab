//! # Integration Test Flows
//!
//! End-to-end marketplace flows through the listing registry: multiple
//! sellers create listings against one shared store, buyers complete
//! them, sellers cancel them, and the dashboard projections consume the
//! result.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use udx_listing_registry::{
        filter_listings, seller_history, DataStore, EnvelopeValueCodec, InMemoryDataStore,
        ListingDraft, ListingFilter, ListingRegistryApi, ListingRegistryService, ListingStatus,
        SequenceIdGenerator, StoreError, ValueCodec,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const ALICE: &str = "0xA11CE00000000000000000000000000000000001";
    const BOB: &str = "0xB0B0000000000000000000000000000000000002";

    type Registry =
        ListingRegistryService<Arc<InMemoryDataStore>, EnvelopeValueCodec, SequenceIdGenerator>;

    fn registry() -> (Arc<InMemoryDataStore>, Registry) {
        crate::init_tracing();
        let store = Arc::new(InMemoryDataStore::new());
        let service = ListingRegistryService::new(
            store.clone(),
            EnvelopeValueCodec::new(),
            SequenceIdGenerator::new(),
        );
        (store, service)
    }

    /// Store wrapper that fails `get_data` for one key, simulating a
    /// transport fault scoped to a single record.
    struct FaultyKeyStore {
        inner: Arc<InMemoryDataStore>,
        faulty_key: String,
    }

    #[async_trait::async_trait]
    impl DataStore for FaultyKeyStore {
        async fn is_available(&self) -> Result<bool, StoreError> {
            self.inner.is_available().await
        }

        async fn get_data(&self, key: &str) -> Result<Vec<u8>, StoreError> {
            if key == self.faulty_key {
                return Err(StoreError::Timeout);
            }
            self.inner.get_data(key).await
        }

        async fn set_data(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
            self.inner.set_data(key, value).await
        }
    }

    fn draft(project: &str, amount: f64, price: f64, vesting_date: i64, seller: &str) -> ListingDraft {
        ListingDraft {
            project: project.to_string(),
            amount,
            price,
            vesting_date,
            seller: seller.to_string(),
        }
    }

    // =============================================================================
    // INTEGRATION TESTS: FULL MARKETPLACE FLOW
    // =============================================================================

    /// Create, buy, cancel, then check every projection the dashboard
    /// consumes: listing order, counts, total value, filters, history.
    #[tokio::test]
    async fn test_full_marketplace_flow() {
        let (_store, registry) = registry();

        let acme = registry
            .create(draft("Acme", 100.0, 2.5, 300, ALICE))
            .await
            .unwrap();
        let borealis = registry
            .create(draft("Borealis", 50.0, 4.0, 100, BOB))
            .await
            .unwrap();
        let cirrus = registry
            .create(draft("Cirrus", 10.0, 1.0, 200, ALICE))
            .await
            .unwrap();

        // Bob's listing sells; Alice withdraws Cirrus.
        registry.complete(&borealis.id).await.unwrap();
        registry.cancel(&cirrus.id).await.unwrap();

        let listings = registry.list_all().await.unwrap();
        let projects: Vec<_> = listings.iter().map(|l| l.project.as_str()).collect();
        assert_eq!(projects, vec!["Acme", "Cirrus", "Borealis"]);

        let stats = registry.compute_aggregate(&listings);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.canceled, 1);
        assert!((stats.total_value - (250.0 + 200.0 + 10.0)).abs() < 1e-9);

        // Status tab on the dashboard.
        let active = filter_listings(&listings, &ListingFilter::all().status(ListingStatus::Active));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, acme.id);

        // Search box matches projects case-insensitively.
        let hits = filter_listings(&listings, &ListingFilter::all().search("bore"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, borealis.id);

        // Seller history panel.
        let alice_history = seller_history(&listings, &ALICE.to_lowercase());
        assert_eq!(alice_history.len(), 2);
    }

    /// Two registry instances sharing one store see each other's
    /// listings: the index under `listing_keys` is common state.
    #[tokio::test]
    async fn test_two_registries_share_one_store() {
        let store = Arc::new(InMemoryDataStore::new());
        let first = ListingRegistryService::new(
            store.clone(),
            EnvelopeValueCodec::new(),
            SequenceIdGenerator::new(),
        );
        let second = ListingRegistryService::new(
            store.clone(),
            EnvelopeValueCodec::new(),
            // Distinct id space so the two writers cannot collide.
            SequenceIdGenerator::new(),
        );

        first
            .create(draft("FromFirst", 1.0, 1.0, 1, ALICE))
            .await
            .unwrap();
        let from_second = second
            .create(draft("FromSecond", 2.0, 2.0, 2, BOB))
            .await
            .unwrap();

        // Both instances enumerate both listings...
        assert_eq!(first.list_all().await.unwrap().len(), 2);
        assert_eq!(second.list_all().await.unwrap().len(), 2);

        // ...and a transition through one is visible through the other.
        first.complete(&from_second.id).await.unwrap();
        let seen = second.list_all().await.unwrap();
        let sold = seen.iter().find(|l| l.id == from_second.id).unwrap();
        assert_eq!(sold.status, ListingStatus::Completed);
    }

    /// A listing bought through one instance cannot be canceled through
    /// another: terminal-state immutability holds across instances.
    #[tokio::test]
    async fn test_terminal_immutability_across_instances() {
        let store = Arc::new(InMemoryDataStore::new());
        let seller_side = ListingRegistryService::new(
            store.clone(),
            EnvelopeValueCodec::new(),
            SequenceIdGenerator::new(),
        );
        let buyer_side = ListingRegistryService::new(
            store.clone(),
            EnvelopeValueCodec::new(),
            SequenceIdGenerator::new(),
        );

        let listing = seller_side
            .create(draft("Acme", 1.0, 1.0, 1, ALICE))
            .await
            .unwrap();
        buyer_side.complete(&listing.id).await.unwrap();

        assert!(seller_side.cancel(&listing.id).await.is_err());
    }

    /// A store outage mid-session degrades reads to empty and surfaces
    /// write failures; recovery restores the full listing set.
    #[tokio::test]
    async fn test_store_outage_and_recovery() {
        let (store, registry) = registry();

        registry.create(draft("Acme", 1.0, 1.0, 1, ALICE)).await.unwrap();

        store.set_available(false);
        assert!(registry.list_all().await.unwrap().is_empty());
        assert!(registry.create(draft("Lost", 1.0, 1.0, 2, BOB)).await.is_err());

        store.set_available(true);
        let listings = registry.list_all().await.unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].project, "Acme");
    }

    /// One vandalized record hides that listing and zeroes its value,
    /// and nothing else.
    #[tokio::test]
    async fn test_one_corrupt_record_does_not_poison_the_dashboard() {
        let (store, registry) = registry();

        registry.create(draft("Good", 5.0, 2.0, 10, ALICE)).await.unwrap();
        let victim = registry.create(draft("Victim", 7.0, 3.0, 20, BOB)).await.unwrap();
        store.put_raw(&format!("listing_{}", victim.id), &b"\xFF\xFE"[..]);

        let listings = registry.list_all().await.unwrap();
        assert_eq!(listings.len(), 1);

        let stats = registry.compute_aggregate(&listings);
        assert_eq!(stats.total, 1);
        assert!((stats.total_value - 10.0).abs() < 1e-9);
    }

    /// A transport fault on one record's read skips that listing only;
    /// the other records still load.
    #[tokio::test]
    async fn test_transport_fault_on_one_record_skips_it() {
        let store = Arc::new(InMemoryDataStore::new());
        let seed = ListingRegistryService::new(
            store.clone(),
            EnvelopeValueCodec::new(),
            SequenceIdGenerator::new(),
        );
        seed.create(draft("Reachable", 1.0, 1.0, 1, ALICE)).await.unwrap();
        let unlucky = seed.create(draft("Unlucky", 1.0, 1.0, 2, BOB)).await.unwrap();

        let faulty = FaultyKeyStore {
            inner: store,
            faulty_key: format!("listing_{}", unlucky.id),
        };
        let registry = ListingRegistryService::new(
            faulty,
            EnvelopeValueCodec::new(),
            SequenceIdGenerator::new(),
        );

        let listings = registry.list_all().await.unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].project, "Reachable");
    }

    /// The envelope decodes through the public trait the same way the
    /// registry decodes internally: what a buyer reveals matches what
    /// the seller listed.
    #[tokio::test]
    async fn test_reveal_matches_drafted_values() {
        let (_store, registry) = registry();
        let codec = EnvelopeValueCodec::new();

        let listing = registry
            .create(draft("Acme", 1234.5, 0.25, 1, ALICE))
            .await
            .unwrap();

        assert_eq!(codec.decode(&listing.encrypted_amount).unwrap(), 1234.5);
        assert_eq!(codec.decode(&listing.encrypted_price).unwrap(), 0.25);
    }
}
