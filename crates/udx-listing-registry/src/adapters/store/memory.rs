//! In-memory store proxy for unit and integration tests.
//!
//! Production supplies a contract-backed [`DataStore`]; this adapter
//! mimics its observable contract (empty bytes for missing keys, a
//! readiness flag) and adds test controls: raw payload seeding, write
//! failure injection, and a log of write order.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::StoreError;
use crate::ports::outbound::DataStore;

/// In-memory key-value store with test controls.
pub struct InMemoryDataStore {
    data: Mutex<HashMap<String, Vec<u8>>>,
    available: AtomicBool,
    fail_writes: AtomicBool,
    write_log: Mutex<Vec<String>>,
}

impl Default for InMemoryDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDataStore {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
            fail_writes: AtomicBool::new(false),
            write_log: Mutex::new(Vec::new()),
        }
    }

    /// Flip the readiness probe.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Make every subsequent `set_data` fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Seed a payload directly, bypassing the write log. Used to plant
    /// corrupt or legacy payloads.
    pub fn put_raw(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.data
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value.into());
    }

    /// Keys written through `set_data`, in order.
    pub fn write_log(&self) -> Vec<String> {
        self.write_log.lock().expect("store mutex poisoned").clone()
    }
}

#[async_trait]
impl DataStore for InMemoryDataStore {
    async fn is_available(&self) -> Result<bool, StoreError> {
        Ok(self.available.load(Ordering::SeqCst))
    }

    async fn get_data(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let data = self.data.lock().expect("store mutex poisoned");
        Ok(data.get(key).cloned().unwrap_or_default())
    }

    async fn set_data(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Io {
                message: "injected write failure".to_string(),
            });
        }
        self.write_log
            .lock()
            .expect("store mutex poisoned")
            .push(key.to_string());
        self.data
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }
}
