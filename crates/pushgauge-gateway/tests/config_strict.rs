#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pushgauge_core::MetricKind;
use pushgauge_gateway::{app_state::AppState, config};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
metrics:
  - name: queue_depth
    help: items in queue
    typ: gauge # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
metrics:
  - name: queue_depth
    help: items in queue
    type: gauge
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.metrics.len(), 1);
    assert_eq!(cfg.metrics[0].name, "queue_depth");
    assert_eq!(cfg.metrics[0].help, "items in queue");
}

#[test]
fn declarations_keep_order_and_unknown_kinds() {
    let src = r#"
metrics:
  - { name: a, help: first, type: gauge }
  - { name: b, type: histogram }
  - { name: c, help: third, type: gauge }
"#;
    let decls = config::load_from_str(src).unwrap().into_declarations();
    let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(decls[1].help, "");
    assert_eq!(decls[1].kind, MetricKind::Unsupported("histogram".into()));
}

#[test]
fn empty_document_has_no_metrics() {
    let cfg = config::load_from_str("{}").unwrap();
    assert!(cfg.metrics.is_empty());
}

#[test]
fn invalid_metric_name_is_rejected() {
    let bad = r#"
metrics:
  - { name: "queue-depth", help: x, type: gauge }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn missing_type_becomes_unsupported_kind() {
    let src = r#"
metrics:
  - { name: queue_depth, help: x }
  - { name: workers, type: gauge }
"#;
    let decls = config::load_from_str(src).expect("must parse").into_declarations();
    assert_eq!(decls[0].kind, MetricKind::Unsupported(String::new()));

    let state = AppState::new(config::load_from_str(src).unwrap()).expect("startup proceeds");
    assert_eq!(state.registry().names(), ["workers"]);
}

#[test]
fn unsupported_entries_skip_name_validation() {
    let src = r#"
metrics:
  - { name: req-latency, type: histogram }
  - { name: ok_g, type: gauge }
"#;
    let cfg = config::load_from_str(src).expect("unsupported entry must not abort startup");
    let state = AppState::new(cfg).expect("startup proceeds");
    assert_eq!(state.registry().names(), ["ok_g"]);
}

#[test]
fn missing_file_is_config_error() {
    let err = config::load_from_file("/nonexistent/pushgauge/metrics.config").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}
