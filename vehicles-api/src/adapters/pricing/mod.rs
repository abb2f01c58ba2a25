//! Pricing service adapter
//!
//! HTTP implementation of the price client.

pub mod client;

pub use client::HttpPriceClient;
