use std::io;

use code_rail::traits::MaybeCoded;
use code_rail::{wrap, Code, CodedError, MetaContext};
use serde_json::Value;

fn absent() -> Option<CodedError> {
    wrap(None::<io::Error>, Code::INTERNAL, "never built")
}

#[test]
fn mutators_on_absent_stay_absent() {
    let ctx = MetaContext::new().with("request_id", "r-1");

    let err = absent()
        .with_detail("k", 1)
        .with_meta("k", 2)
        .with_meta_context(&ctx)
        .with_debug("debug")
        .with_debug_fmt(format_args!("debug {}", 2))
        .with_origin("svc")
        .with_tags(["a", "b"])
        .with_retryable();

    assert!(err.is_none());
}

#[test]
fn readers_on_absent_return_empty_values() {
    let err = absent();

    assert_eq!(err.code(), Code::UNKNOWN);
    assert_eq!(err.message(), "");
    assert_eq!(err.debug_message(), "");
    assert!(err.cause().is_none());
    assert_eq!(err.origin(), "");
    assert!(err.tags().is_empty());
    assert!(err.details().is_empty());
    assert!(err.metadata().is_empty());
    assert!(err.stack_trace().is_empty());
    assert!(!err.is_retryable());
    assert_eq!(err.debug_summary(), "");
    assert_eq!(err.structured_projection(), Value::Null);
}

#[test]
fn mutators_on_present_decorate() {
    let err = wrap(Some(io::Error::other("eof")), Code::DATA_LOSS, "truncated")
        .with_origin("reader")
        .with_tags(["io"])
        .with_meta("offset", 64)
        .with_retryable();

    assert_eq!(err.code(), Code::DATA_LOSS);
    assert_eq!(err.origin(), "reader");
    assert_eq!(err.tags(), ["io"]);
    assert_eq!(err.metadata()["offset"], 64);
    assert!(err.is_retryable());
    assert_eq!(err.cause().map(ToString::to_string).as_deref(), Some("eof"));
    assert!(!err.stack_trace().is_empty());
}
