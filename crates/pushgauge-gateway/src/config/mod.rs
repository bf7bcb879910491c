//! Startup configuration: metrics file (strict YAML) and environment.

pub mod env;
pub mod schema;

use std::fs;
use std::path::Path;

use pushgauge_core::error::{PushGaugeError, Result};

pub use env::Settings;
pub use schema::{MetricEntry, MetricsFile};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<MetricsFile> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        PushGaugeError::Config(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<MetricsFile> {
    let cfg: MetricsFile = serde_yaml::from_str(s)
        .map_err(|e| PushGaugeError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
