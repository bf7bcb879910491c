//! pushgauge core: instruments, the metric registry, and the push-update
//! dispatcher.
//!
//! Everything here is synchronous and transport-agnostic. The gateway crate
//! owns HTTP, config files, and process lifecycle; this crate only knows how
//! to hold named values, mutate them by name, and render them in the
//! Prometheus text exposition format.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed push payloads surface as `PushGaugeError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod dispatch;
pub mod error;
pub mod instrument;
pub mod protocol;
pub mod registry;

/// Shared result type.
pub use error::{Result, PushGaugeError};

pub use dispatch::Dispatcher;
pub use instrument::{Gauge, Instrument, MetricDeclaration, MetricKind};
pub use registry::Registry;
