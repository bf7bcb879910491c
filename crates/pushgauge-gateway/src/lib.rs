//! pushgauge gateway library entry.
//!
//! Wires config loading, the shared registry state, and the HTTP surface.
//! Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
