use std::io;

use code_rail::{wrap, BoxError, Code, CodedError, TransientError, TransientErrorExt};

#[test]
fn test_transient_classification() {
    let transient = CodedError::new(Code::UNAVAILABLE, "busy").with_retryable();
    assert!(transient.is_transient());
    assert!(!transient.is_permanent());

    let permanent = CodedError::new(Code::UNAVAILABLE, "busy");
    assert!(!permanent.is_transient());
    assert!(permanent.is_permanent());
}

#[test]
fn test_absent_error_is_not_transient() {
    let none = wrap(None::<io::Error>, Code::UNAVAILABLE, "never");
    assert!(!none.is_transient());
}

#[test]
fn test_boxed_error_uses_chain() {
    let inner = CodedError::new(Code::RESOURCE_EXHAUSTED, "rate limited").with_retryable();
    let boxed: BoxError = Box::new(inner);
    assert!(boxed.is_transient());

    let plain: BoxError = Box::new(io::Error::other("reset"));
    assert!(plain.is_permanent());
}

#[test]
fn test_retry_if_transient() {
    let ok: Result<i32, CodedError> = Ok(42);
    assert!(ok.retry_if_transient().is_none());

    let transient_err: Result<i32, CodedError> =
        Err(CodedError::new(Code::UNAVAILABLE, "busy").with_retryable());
    assert!(transient_err.retry_if_transient().is_some());

    let permanent_err: Result<i32, CodedError> = Err(CodedError::new(Code::NOT_FOUND, "missing"));
    assert!(permanent_err.retry_if_transient().is_none());
}
