//! Price enrichment data
//!
//! Prices come from the remote pricing service and live only for the
//! duration of a single request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::VehicleId;

/// Amount shown in place of a price when the pricing service could not answer
pub const PRICE_UNAVAILABLE: &str = "(consult price)";

/// A quoted price for a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceInfo {
    pub vehicle_id: VehicleId,
    /// ISO 4217 currency code
    pub currency: String,
    pub amount: Decimal,
}

impl PriceInfo {
    pub fn new(vehicle_id: VehicleId, currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            vehicle_id,
            currency: currency.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn amount_keeps_exact_decimal() {
        let price = PriceInfo::new(VehicleId(1), "USD", Decimal::from_str("13779.96").unwrap());
        assert_eq!(price.amount.to_string(), "13779.96");
        assert_eq!(price.currency, "USD");
    }
}
