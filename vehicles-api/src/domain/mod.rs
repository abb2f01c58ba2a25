//! Domain layer
//!
//! Vehicle records, enrichment data and the ports the orchestrator needs.
//! - `entities`: vehicles, prices, addresses and the aggregated view
//! - `ports`: traits for the vehicle store and the two remote sources

pub mod entities;
pub mod ports;
