//! Address enrichment data

use serde::{Deserialize, Serialize};

/// Human-readable address resolved from coordinates
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressInfo {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}
