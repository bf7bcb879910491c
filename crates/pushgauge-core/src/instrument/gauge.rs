use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;
use crate::protocol::exposition;

use super::{Instrument, MetricKind};

/// Settable gauge. The value lives in an `AtomicU64` holding the `f64` bit
/// pattern, so a read never observes a torn write.
///
/// `set` stores whatever it is given: no range, NaN, or infinity checks are
/// made at this level. Callers are trusted to pass a finite value; the
/// dispatcher filters non-finite pushes before they get here.
#[derive(Debug)]
pub struct Gauge {
    name: String,
    help: String,
    bits: AtomicU64,
}

impl Gauge {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            bits: AtomicU64::new(0.0_f64.to_bits()),
        }
    }
}

impl Instrument for Gauge {
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self) -> &str {
        &self.help
    }

    fn kind(&self) -> MetricKind {
        MetricKind::Gauge
    }

    fn value(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    fn set(&self, value: f64) -> Result<()> {
        self.bits.store(value.to_bits(), Ordering::Release);
        Ok(())
    }

    fn render_into(&self, out: &mut String) {
        exposition::write_block(out, &self.name, &self.help, "gauge", self.value());
    }
}
