//! Top-level facade crate for pushgauge.
//!
//! Re-exports the core registry types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use pushgauge_core::*;
}

pub mod gateway {
    pub use pushgauge_gateway::*;
}
