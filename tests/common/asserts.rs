#![allow(dead_code)]

use edgeinfo::constants::header;
use edgeinfo::{Body, Response};
use serde_json::Value;

pub fn assert_header_eq(response: &Response, name: &str, expected: &str) {
    assert_eq!(
        response.headers.get(name),
        Some(expected),
        "header {name} mismatch"
    );
}

pub fn assert_no_header(response: &Response, name: &str) {
    assert!(
        !response.headers.contains(name),
        "header {name} should not be present, got {:?}",
        response.headers.get(name)
    );
}

pub fn assert_vary_eq(response: &Response, expected: &str) {
    assert_eq!(response.headers.get(header::VARY), Some(expected));
}

/// Unwraps a JSON body and checks its machine-readable error code.
pub fn assert_error_code(response: &Response, expected: &str) {
    match &response.body {
        Body::Json(value) => assert_eq!(value["code"], Value::from(expected)),
        other => panic!("expected a JSON error body, got {other:?}"),
    }
}

pub fn json_body(response: &Response) -> &Value {
    match &response.body {
        Body::Json(value) => value,
        other => panic!("expected a JSON body, got {other:?}"),
    }
}
