//! # Unvested-DEX Test Suite
//!
//! Unified test crate for cross-component flows:
//!
//! ```text
//! tests/src/
//! └── integration/      # End-to-end registry flows over a shared store
//!     ├── listing_flows.rs
//!     └── wire_format.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p udx-tests
//!
//! # By category
//! cargo test -p udx-tests integration::
//! ```


/// Env-filtered log output for ad-hoc debugging runs
/// (`RUST_LOG=udx_listing_registry=debug cargo test -p udx-tests`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
