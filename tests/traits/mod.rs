use std::io;

use code_rail::traits::ErrorChainExt;
use code_rail::{Code, CodedError};

pub mod maybe_coded;
pub mod transient;

#[test]
fn chain_methods_mirror_free_functions() {
    let inner = CodedError::new(Code::NOT_FOUND, "user not found").with_retryable();
    let outer = CodedError::wrap(inner, Code::UNAVAILABLE, "lookup failed");

    assert_eq!(outer.error_chain().count(), 2);
    assert_eq!(outer.chain_code(), Code::UNAVAILABLE);
    assert!(outer.chain_code_is(Code::UNAVAILABLE));
    assert!(outer.chain_code_in(&[Code::INTERNAL, Code::UNAVAILABLE]));
    assert!(!outer.chain_is_retryable());
    assert!(outer.chain_matches(&CodedError::new(Code::NOT_FOUND, "other")));
    assert_eq!(outer.find_coded().map(CodedError::message), Some("lookup failed"));
}

#[test]
fn chain_methods_work_on_foreign_errors() {
    let err = io::Error::other("refused");

    assert!(err.has_cause::<io::Error>());
    assert!(err.find_cause::<CodedError>().is_none());
    assert_eq!(err.chain_code(), Code::UNKNOWN);
}
