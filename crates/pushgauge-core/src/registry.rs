//! Metric registry: fixed membership after `build`, mutable values.
//!
//! Membership never changes once built, so the registry itself needs no
//! lock and is shared as `Arc<Registry>`. Each instrument guards its own
//! value cell.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{PushGaugeError, Result};
use crate::instrument::{self, Instrument, MetricDeclaration};

#[derive(Debug, Default)]
pub struct Registry {
    /// Registration order (= declaration order).
    ordered: Vec<Arc<dyn Instrument>>,
    /// `name -> index into ordered`
    index: HashMap<String, usize>,
}

impl Registry {
    /// Build from declarations.
    ///
    /// Unsupported kinds are skipped with a warning. A name registered twice
    /// is a startup error.
    pub fn build<I>(declarations: I) -> Result<Self>
    where
        I: IntoIterator<Item = MetricDeclaration>,
    {
        let mut reg = Registry::default();
        let mut skipped = 0usize;

        for decl in declarations {
            let Some(inst) = instrument::from_declaration(&decl) else {
                warn!(metric = %decl.name, kind = %decl.kind, "metric type not supported, skipping");
                skipped += 1;
                continue;
            };
            if reg.index.contains_key(&decl.name) {
                return Err(PushGaugeError::DuplicateMetric(decl.name));
            }
            reg.index.insert(decl.name, reg.ordered.len());
            reg.ordered.push(inst);
        }

        info!(registered = reg.ordered.len(), skipped, "metric registry built");
        Ok(reg)
    }

    /// Exact-name lookup.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Instrument>> {
        self.index
            .get(name)
            .and_then(|&i| self.ordered.get(i))
            .cloned()
    }

    /// Full scrape body, instruments in registration order.
    pub fn render_all(&self) -> String {
        let mut out = String::new();
        for inst in &self.ordered {
            inst.render_into(&mut out);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.ordered.iter().map(|i| i.name()).collect()
    }
}
