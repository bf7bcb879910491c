//! Push-update dispatcher.
//!
//! decode -> resolve -> set. Every call is synchronous and independent; the
//! outcome is surfaced as `Result<()>` and mapped to a status by the caller
//! via [`PushGaugeError::client_code`].

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::error::{PushGaugeError, Result};
use crate::protocol::update::UpdateRequest;
use crate::registry::Registry;

pub struct Dispatcher {
    registry: Arc<Registry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Decode a raw push body and apply it.
    pub fn dispatch(&self, body: &[u8]) -> Result<()> {
        let req = UpdateRequest::decode(body).inspect_err(|e| {
            warn!(error = %e, "rejecting push update");
        })?;
        self.apply(req)
    }

    /// Apply an already-decoded update.
    ///
    /// Non-finite values are refused before any instrument is touched.
    pub fn apply(&self, req: UpdateRequest) -> Result<()> {
        if !req.value.is_finite() {
            warn!(metric = %req.name, value = %req.value, "rejecting non-finite value");
            return Err(PushGaugeError::BadRequest(format!(
                "value for {} must be finite",
                req.name
            )));
        }

        let Some(inst) = self.registry.lookup(&req.name) else {
            warn!(metric = %req.name, "metric not found");
            return Err(PushGaugeError::NotFound(req.name));
        };

        if let Err(e) = inst.set(req.value) {
            error!(metric = %req.name, kind = %inst.kind(), error = %e, "update rejected by instrument");
            return Err(e);
        }

        debug!(metric = %req.name, value = req.value, "metric updated");
        Ok(())
    }
}
