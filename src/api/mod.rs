//! Metrics gateway: typed fetch functions over the analytics REST API.

pub mod client;
pub mod types;

pub use client::{MetricsApi, MetricsClient};
