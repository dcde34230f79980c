//! JSON exporter server library entry.
//!
//! Wires configuration, the upstream prober, the per-scrape registry, and the
//! HTTP endpoints together. It is consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod probe;
pub mod router;
pub mod scrape;
