use serde::Deserialize;

use pushgauge_core::error::{PushGaugeError, Result};
use pushgauge_core::{MetricDeclaration, MetricKind};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsFile {
    #[serde(default)]
    pub metrics: Vec<MetricEntry>,
}

impl MetricsFile {
    pub fn validate(&self) -> Result<()> {
        for m in &self.metrics {
            m.validate()?;
        }
        Ok(())
    }

    /// Consume the file into declarations, preserving order.
    pub fn into_declarations(self) -> Vec<MetricDeclaration> {
        self.metrics
            .into_iter()
            .map(MetricEntry::into_declaration)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricEntry {
    pub name: String,

    #[serde(default)]
    pub help: String,

    /// Kind string (`type` in YAML). Unknown or missing kinds are kept and
    /// skipped when the registry is built.
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl MetricEntry {
    /// Only entries that will be registered must carry a valid name.
    pub fn validate(&self) -> Result<()> {
        if let MetricKind::Unsupported(_) = MetricKind::parse(&self.kind) {
            return Ok(());
        }
        if !is_valid_metric_name(&self.name) {
            return Err(PushGaugeError::Config(format!(
                "metrics[].name {:?} is not a valid metric name",
                self.name
            )));
        }
        Ok(())
    }

    pub fn into_declaration(self) -> MetricDeclaration {
        let kind = MetricKind::parse(&self.kind);
        MetricDeclaration::new(self.name, self.help, kind)
    }
}

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}
