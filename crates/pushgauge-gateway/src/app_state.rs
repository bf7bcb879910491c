//! Shared application state.
//!
//! Built once from the loaded metrics file and cloned into every handler.
//! Cloning only bumps reference counts.

use std::sync::Arc;

use pushgauge_core::error::Result;
use pushgauge_core::{Dispatcher, MetricDeclaration, Registry};

use crate::config::MetricsFile;

#[derive(Clone)]
pub struct AppState {
    registry: Arc<Registry>,
    dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Build state from a validated metrics file.
    /// Returns Result so main can report duplicate names instead of panicking.
    pub fn new(cfg: MetricsFile) -> Result<Self> {
        Self::from_declarations(cfg.into_declarations())
    }

    pub fn from_declarations(decls: Vec<MetricDeclaration>) -> Result<Self> {
        let registry = Arc::new(Registry::build(decls)?);
        let dispatcher = Arc::new(Dispatcher::new(Arc::clone(&registry)));
        Ok(Self {
            registry,
            dispatcher,
        })
    }

    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }
}
