//! Prometheus text exposition helpers.

use std::fmt::Write;

/// Content type served by the scrape endpoint.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Escape a HELP docstring (`\` and newline only, per the text format).
pub fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Format a sample value.
///
/// Finite values use the shortest representation that parses back to the
/// same `f64`; very large or very small magnitudes switch to exponent form.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    let abs = v.abs();
    if abs >= 1e21 || (abs != 0.0 && abs < 1e-6) {
        format!("{v:e}")
    } else {
        format!("{v}")
    }
}

/// Write one `HELP` / `TYPE` / sample block.
pub fn write_block(out: &mut String, name: &str, help: &str, type_name: &str, value: f64) {
    let _ = writeln!(out, "# HELP {} {}", name, escape_help(help));
    let _ = writeln!(out, "# TYPE {} {}", name, type_name);
    let _ = writeln!(out, "{} {}", name, format_value(value));
}
