//! # Ports Layer
//!
//! Hexagonal architecture ports (interfaces) for the Listing Registry
//! subsystem.
//!
//! - **Driving Ports (Inbound)**: the registry API consumed by callers
//! - **Driven Ports (Outbound)**: the store proxy, value envelope, time
//!   and id sources the host must supply

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
