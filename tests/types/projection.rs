use std::io;

use code_rail::{Code, CodedError};
use serde_json::{json, Value};

fn keys(value: &Value) -> Vec<&str> {
    value.as_object().expect("object").keys().map(String::as_str).collect()
}

#[test]
fn minimal_projection_has_code_and_message_only() {
    let value = CodedError::new(Code::CANCELED, "stopped").structured_projection();

    assert_eq!(value, json!({ "code": "canceled", "message": "stopped" }));
}

#[test]
fn keys_follow_declared_order() {
    let err = CodedError::wrap(io::Error::other("eof"), Code::DATA_LOSS, "truncated")
        .with_debug("short read")
        .with_retryable()
        .with_meta("offset", 512)
        .with_detail("file", "a.bin")
        .with_tag("io")
        .with_origin("reader");

    let value = err.structured_projection();
    assert_eq!(
        keys(&value),
        ["code", "message", "source", "tags", "details", "metadata", "retryable", "debug", "cause"]
    );
    assert_eq!(value["tags"], json!(["io"]));
    assert_eq!(value["details"], json!({ "file": "a.bin" }));
    assert_eq!(value["metadata"], json!({ "offset": 512 }));
    assert_eq!(value["retryable"], true);
    assert_eq!(value["debug"], "short read");
    assert_eq!(value["cause"], "eof");
}

#[test]
fn three_level_chain_nests_recursively() {
    let base = CodedError::new(Code::NOT_FOUND, "row missing").with_origin("db");
    let middle = CodedError::wrap(base, Code::UNAVAILABLE, "repo failed").with_origin("repo");
    let outer = CodedError::wrap(middle, Code::INTERNAL, "request failed").with_origin("api");

    let value = outer.structured_projection();

    assert_eq!(
        value,
        json!({
            "code": "internal",
            "message": "request failed",
            "source": "api",
            "cause": {
                "code": "unavailable",
                "message": "repo failed",
                "source": "repo",
                "cause": {
                    "code": "not_found",
                    "message": "row missing",
                    "source": "db"
                }
            }
        })
    );
    assert_eq!(keys(&value["cause"]), ["code", "message", "source", "cause"]);
}

#[test]
fn serialize_emits_projection_in_order() {
    let err = CodedError::new(Code::ABORTED, "conflict").with_origin("orders").with_tag("txn");

    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"code":"aborted","message":"conflict","source":"orders","tags":["txn"]}"#);
}
