use std::io;

use code_rail::{Code, CodedError};

#[test]
fn fresh_error_has_only_the_head_segment() {
    let summary = CodedError::new(Code::NOT_FOUND, "missing").debug_summary();

    assert_eq!(summary, "[not_found] missing");
    for absent in ["source=", "tags=", "details=", "metadata=", "retryable=", "debug=", "cause="] {
        assert!(!summary.contains(absent), "unexpected {absent} in {summary}");
    }
}

#[test]
fn segments_follow_fixed_order() {
    let err = CodedError::wrap(io::Error::other("timeout"), Code::UNAVAILABLE, "service down")
        .with_debug("pool exhausted")
        .with_retryable()
        .with_meta("attempt", 3)
        .with_detail("retry_after", 30)
        .with_tags(["db", "critical"])
        .with_origin("payment-service");

    assert_eq!(
        err.debug_summary(),
        "[unavailable] service down | source=payment-service | tags=[db, critical] \
         | details={retry_after=30} | metadata={attempt=3} | retryable=true \
         | debug=pool exhausted | cause=timeout"
    );
}

#[test]
fn debug_equal_to_message_is_omitted() {
    let err = CodedError::new(Code::INTERNAL, "same").with_debug("same");
    assert!(!err.debug_summary().contains("debug="));
}

#[test]
fn cause_is_rendered_one_level_deep() {
    let inner = CodedError::new(Code::NOT_FOUND, "row missing").with_origin("repo");
    let outer = CodedError::wrap(inner, Code::INTERNAL, "lookup failed");

    let summary = outer.debug_summary();
    assert!(summary.ends_with("cause=row missing"));
    assert!(!summary.contains("source=repo"));
}

#[test]
fn map_values_render_in_key_order_as_json() {
    let err = CodedError::new(Code::INVALID_ARGUMENT, "bad input")
        .with_detail("z", true)
        .with_detail("a", "text");

    assert!(err.debug_summary().contains("details={a=\"text\", z=true}"));
}
