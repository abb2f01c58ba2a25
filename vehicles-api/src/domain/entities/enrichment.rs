//! Enrichment outcomes
//!
//! Each remote lookup moves through `NotStarted -> InFlight -> {Succeeded, Failed}`.
//! Only the terminal state is kept; the in-between states exist while the
//! lookup future is pending. A failed lookup is never retried within a request.

use super::{AddressInfo, PriceInfo, Vehicle};

/// Terminal state of a single enrichment call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enrichment<T> {
    Succeeded(T),
    Failed,
}

impl<T> Enrichment<T> {
    /// Whether the remote source answered in time
    pub fn is_available(&self) -> bool {
        matches!(self, Enrichment::Succeeded(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Enrichment::Succeeded(value) => Some(value),
            Enrichment::Failed => None,
        }
    }
}

/// A stored vehicle merged with its price and address lookups
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleView {
    pub vehicle: Vehicle,
    pub price: Enrichment<PriceInfo>,
    pub address: Enrichment<AddressInfo>,
}
