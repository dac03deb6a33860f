//! Transient error classification for retry strategies.
//!
//! This crate does not retry anything itself. [`TransientError`] exposes the
//! retryable flag of a [`CodedError`] (and of any error whose chain contains
//! one) in a shape that retry loops and external resilience crates can consume.
//!
//! # Examples
//!
//! ```
//! use code_rail::traits::{TransientError, TransientErrorExt};
//! use code_rail::{Code, CodedError};
//!
//! let busy: Result<(), CodedError> =
//!     Err(CodedError::new(Code::UNAVAILABLE, "service busy").with_retryable());
//! assert!(busy.retry_if_transient().is_some());
//!
//! let missing: Result<(), CodedError> = Err(CodedError::new(Code::NOT_FOUND, "no such user"));
//! assert!(missing.retry_if_transient().is_none());
//! ```

use crate::chain;
use crate::types::{BoxError, CodedError};

/// Classification of errors as transient or permanent.
///
/// Common transient failures are [`Code::UNAVAILABLE`](crate::Code::UNAVAILABLE),
/// [`Code::DEADLINE_EXCEEDED`](crate::Code::DEADLINE_EXCEEDED),
/// [`Code::RESOURCE_EXHAUSTED`](crate::Code::RESOURCE_EXHAUSTED) and
/// [`Code::ABORTED`](crate::Code::ABORTED), but only an explicit
/// [`with_retryable`](CodedError::with_retryable) makes a coded error transient.
pub trait TransientError {
    /// Returns `true` if this error is transient and may succeed on retry.
    fn is_transient(&self) -> bool;

    /// Returns `true` if this error is permanent and should not be retried.
    #[inline]
    fn is_permanent(&self) -> bool {
        !self.is_transient()
    }
}

impl TransientError for CodedError {
    #[inline]
    fn is_transient(&self) -> bool {
        self.is_retryable()
    }
}

impl TransientError for Option<CodedError> {
    #[inline]
    fn is_transient(&self) -> bool {
        self.as_ref().is_some_and(CodedError::is_retryable)
    }
}

/// Foreign errors are transient when their chain holds a retryable coded error.
impl TransientError for BoxError {
    #[inline]
    fn is_transient(&self) -> bool {
        chain::is_retryable(Some(&**self))
    }
}

/// Extension methods for working with transient errors.
pub trait TransientErrorExt<T, E: TransientError> {
    /// Converts a transient error to `Some(Err(e))` for retry, or `None` to stop.
    fn retry_if_transient(self) -> Option<Result<T, E>>;
}

impl<T, E: TransientError> TransientErrorExt<T, E> for Result<T, E> {
    fn retry_if_transient(self) -> Option<Result<T, E>> {
        match &self {
            Ok(_) => None,
            Err(e) if e.is_transient() => Some(self),
            Err(_) => None,
        }
    }
}
