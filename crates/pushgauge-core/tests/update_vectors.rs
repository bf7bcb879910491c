//! Push payload vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use pushgauge_core::error::ClientCode;
use pushgauge_core::protocol::update::UpdateRequest;

fn load(name: &str) -> Vec<u8> {
    fs::read(format!("tests/vectors/{name}")).unwrap()
}

#[test]
fn decode_plain_update() {
    let req = UpdateRequest::decode(&load("update_ok.json")).unwrap();
    assert_eq!(req.name, "queue_depth");
    assert_eq!(req.value, 42.0);
}

#[test]
fn decode_negative_and_large_values() {
    let neg = UpdateRequest::decode(&load("update_negative.json")).unwrap();
    assert_eq!(neg.value, -273.15);

    let large = UpdateRequest::decode(&load("update_large.json")).unwrap();
    assert_eq!(large.name, "bytes_total");
    assert_eq!(large.value, 1.5e300);
}

#[test]
fn decode_lenient_vectors() {
    let extra = UpdateRequest::decode(&load("update_unknown_field.json")).unwrap();
    assert_eq!(extra.name, "queue_depth");
    assert_eq!(extra.value, 1.0);

    let missing = UpdateRequest::decode(&load("update_missing_value.json")).unwrap();
    assert_eq!(missing.value, 0.0);

    let trailing = UpdateRequest::decode(&load("update_trailing.json")).unwrap();
    assert_eq!(trailing.value, 2.0);
}

#[test]
fn reject_malformed_vectors() {
    for name in [
        "update_string_value.json",
        "update_missing_name.json",
        "update_out_of_range.json",
    ] {
        let err = UpdateRequest::decode(&load(name)).expect_err(name);
        assert_eq!(err.client_code(), ClientCode::BadRequest, "{name}");
    }
}
