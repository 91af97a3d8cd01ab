//! # View Projection
//!
//! Pure helpers that shape registry output for display: status filtering,
//! free-text search over project and seller, and per-seller history.
//! No I/O; consumers pass in the listing set returned by the registry.

use super::entities::{Listing, ListingStatus};

/// Which statuses a view includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every listing regardless of status.
    #[default]
    All,
    /// Only listings in the given status.
    Only(ListingStatus),
}

/// Display filter over a listing set.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub status: StatusFilter,
    /// Case-insensitive substring matched against project and seller.
    pub search: Option<String>,
}

impl ListingFilter {
    /// Filter that passes everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one status.
    pub fn status(mut self, status: ListingStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    /// Add a search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Whether `listing` passes this filter.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let StatusFilter::Only(status) = self.status {
            if listing.status != status {
                return false;
            }
        }
        match &self.search {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                listing.project.to_lowercase().contains(&term)
                    || listing.seller.to_lowercase().contains(&term)
            }
        }
    }
}

/// Project a listing set through a filter, preserving order.
pub fn filter_listings<'a>(listings: &'a [Listing], filter: &ListingFilter) -> Vec<&'a Listing> {
    listings.iter().filter(|l| filter.matches(l)).collect()
}

/// Listings sold by `seller`, matched case-insensitively on the address.
pub fn seller_history<'a>(listings: &'a [Listing], seller: &str) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|l| l.seller.eq_ignore_ascii_case(seller))
        .collect()
}
