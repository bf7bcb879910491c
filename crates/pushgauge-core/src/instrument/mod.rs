//! Instruments: named numeric values that can render themselves.
//!
//! `Instrument` is the capability the registry and dispatcher work against.
//! New kinds (counter, histogram) plug in as new implementations plus a new
//! `MetricKind` arm in [`from_declaration`]; callers never downcast.

pub mod gauge;

use std::fmt;
use std::sync::Arc;

use crate::error::Result;

pub use gauge::Gauge;

/// Declared metric kind, parsed from the config `type` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    /// Any kind this build cannot instantiate. Carries the raw string for logs.
    Unsupported(String),
}

impl MetricKind {
    /// Parse a config `type` value. Matching is exact (`"gauge"`).
    pub fn parse(raw: &str) -> Self {
        match raw {
            "gauge" => MetricKind::Gauge,
            other => MetricKind::Unsupported(other.to_string()),
        }
    }

    /// Name used on the exposition `# TYPE` line.
    pub fn as_str(&self) -> &str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Unsupported(raw) => raw,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One metric as declared in config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDeclaration {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
}

impl MetricDeclaration {
    pub fn new(name: impl Into<String>, help: impl Into<String>, kind: MetricKind) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            kind,
        }
    }
}

/// Live metric capability.
pub trait Instrument: Send + Sync + fmt::Debug {
    /// Registered metric name (registry key).
    fn name(&self) -> &str;
    /// Unescaped HELP text.
    fn help(&self) -> &str;
    /// Kind reported on the `# TYPE` line.
    fn kind(&self) -> MetricKind;

    /// Current value.
    fn value(&self) -> f64;

    /// Apply a pushed value. Kinds that cannot accept an absolute value
    /// return `Internal`.
    fn set(&self, value: f64) -> Result<()>;

    /// Append this instrument's exposition block to `out`.
    fn render_into(&self, out: &mut String);

    /// Exposition block as an owned string.
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// Instantiate the instrument for a declaration, or `None` when the kind is
/// not supported.
pub fn from_declaration(decl: &MetricDeclaration) -> Option<Arc<dyn Instrument>> {
    match decl.kind {
        MetricKind::Gauge => Some(Arc::new(Gauge::new(decl.name.clone(), decl.help.clone()))),
        MetricKind::Unsupported(_) => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing_is_exact() {
        assert_eq!(MetricKind::parse("gauge"), MetricKind::Gauge);
        assert_eq!(
            MetricKind::parse("Gauge"),
            MetricKind::Unsupported("Gauge".into())
        );
        assert_eq!(
            MetricKind::parse("histogram"),
            MetricKind::Unsupported("histogram".into())
        );
    }

    #[test]
    fn only_gauges_are_instantiated() {
        let g = MetricDeclaration::new("a", "h", MetricKind::Gauge);
        let h = MetricDeclaration::new("b", "h", MetricKind::parse("summary"));
        let inst = from_declaration(&g).unwrap();
        assert_eq!(inst.name(), "a");
        assert_eq!(inst.kind(), MetricKind::Gauge);
        assert!(from_declaration(&h).is_none());
    }
}
