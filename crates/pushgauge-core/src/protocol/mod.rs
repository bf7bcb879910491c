//! Wire formats (push payload in, exposition text out).
//!
//! - Push lane: a JSON object `{"name": ..., "value": ...}` per request.
//! - Scrape lane: Prometheus text exposition format, version 0.0.4.
//!
//! Decoding is panic-free: malformed input is reported as `PushGaugeError`.

pub mod exposition;
pub mod update;
