//! Price table
//!
//! Prices are generated once at startup for a fixed range of vehicle ids
//! and served unchanged for the life of the process.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Vehicle ids that have a price
pub const PRICED_VEHICLES: RangeInclusive<i64> = 1..=19;

/// Price quote returned by `GET /services/price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub vehicle_id: i64,
    pub currency: String,
    pub price: Decimal,
}

/// In-memory price lookup keyed by vehicle id
#[derive(Debug, Default)]
pub struct PriceTable {
    prices: HashMap<i64, Price>,
}

impl PriceTable {
    /// Generate a random USD price for every id in `ids`
    pub fn generate<R: Rng>(ids: RangeInclusive<i64>, rng: &mut R) -> Self {
        let prices = ids
            .map(|id| {
                let price = Price {
                    vehicle_id: id,
                    currency: "USD".to_string(),
                    price: random_price(rng),
                };
                (id, price)
            })
            .collect();

        Self { prices }
    }

    /// Add or replace a single price
    #[cfg(test)]
    pub fn with_price(mut self, vehicle_id: i64, currency: &str, price: Decimal) -> Self {
        self.prices.insert(
            vehicle_id,
            Price {
                vehicle_id,
                currency: currency.to_string(),
                price,
            },
        );
        self
    }

    pub fn get(&self, vehicle_id: i64) -> Result<&Price, PricingError> {
        self.prices
            .get(&vehicle_id)
            .ok_or(PricingError::PriceNotFound(vehicle_id))
    }

    pub fn count(&self) -> usize {
        self.prices.len()
    }
}

/// A price between 5,000.00 and 24,999.99 with exactly two decimal places
fn random_price<R: Rng>(rng: &mut R) -> Decimal {
    let cents: i64 = rng.gen_range(500_000..2_500_000);
    Decimal::new(cents, 2)
}
