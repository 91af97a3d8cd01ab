//! # Domain Entities
//!
//! Core domain entities for the Listing Registry subsystem: the listing
//! record, its status state machine, and the dashboard aggregate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque listing identifier, unique, assigned at creation time.
pub type ListingId = String;

/// Lifecycle status of a listing.
///
/// State machine: `active` is the initial state, `completed` and `canceled`
/// are terminal. The only valid transitions are `active -> completed` (buy)
/// and `active -> canceled` (seller cancel). Terminal states are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Listed for sale.
    Active,
    /// Sold.
    Completed,
    /// Withdrawn by the seller.
    Canceled,
}

impl Default for ListingStatus {
    fn default() -> Self {
        ListingStatus::Active
    }
}

impl ListingStatus {
    /// Whether this status admits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, ListingStatus::Completed | ListingStatus::Canceled)
    }

    /// Whether the state machine permits moving from `self` to `target`.
    pub fn can_transition_to(self, target: ListingStatus) -> bool {
        self == ListingStatus::Active && target.is_terminal()
    }

    /// Lowercase wire spelling, as stored in record payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Completed => "completed",
            ListingStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tradable unvested-token offer.
///
/// `encrypted_amount` and `encrypted_price` are opaque envelope strings;
/// the registry never interprets their content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub encrypted_amount: String,
    pub encrypted_price: String,
    /// Unix timestamp (seconds) at which the tokens vest.
    pub vesting_date: i64,
    /// External-account address of the seller.
    pub seller: String,
    /// Free-text project label.
    pub project: String,
    pub status: ListingStatus,
}

impl Listing {
    /// Assemble a listing from its id and the stored record payload.
    pub fn from_payload(id: ListingId, payload: RecordPayload) -> Self {
        Self {
            id,
            encrypted_amount: payload.amount,
            encrypted_price: payload.price,
            vesting_date: payload.vesting_date,
            seller: payload.seller,
            project: payload.project,
            status: payload.status,
        }
    }

    /// The record payload this listing serializes to. The id is not part
    /// of the payload; it lives in the store key and the index.
    pub fn to_payload(&self) -> RecordPayload {
        RecordPayload {
            amount: self.encrypted_amount.clone(),
            price: self.encrypted_price.clone(),
            vesting_date: self.vesting_date,
            seller: self.seller.clone(),
            project: self.project.clone(),
            status: self.status,
        }
    }
}

/// Wire shape of one listing record.
///
/// A record with a missing `status` field decodes as `active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPayload {
    pub amount: String,
    pub price: String,
    #[serde(rename = "vestingDate")]
    pub vesting_date: i64,
    pub seller: String,
    pub project: String,
    #[serde(default)]
    pub status: ListingStatus,
}

/// Caller input for creating a listing.
///
/// Amount and price arrive in the clear and are enveloped by the registry;
/// `seller` is an explicit parameter, never ambient wallet state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub project: String,
    pub amount: f64,
    pub price: f64,
    pub vesting_date: i64,
    pub seller: String,
}

/// Dashboard aggregate over a set of listings.
///
/// `total_value` sums `amount * price` over listings whose envelopes
/// decode; a listing with an undecodable amount or price contributes zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ListingStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub canceled: usize,
    pub total_value: f64,
}
