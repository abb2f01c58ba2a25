//! Maps service adapter

pub mod client;

pub use client::HttpLocationClient;
