//! Extension traits for classifying and decorating errors inside `Result`.
//!
//! [`ResultExt`] turns any `Result<T, E>` into a [`CodedResult`] without a
//! `.map_err()` closure; an `Ok` passes through untouched, which is the
//! `Result` spelling of "wrapping nothing yields nothing".
//! [`CodedResultExt`] keeps decorating an error that is already coded.
//!
//! # Examples
//!
//! ```
//! use code_rail::traits::{CodedResultExt, ResultExt};
//! use code_rail::{Code, CodedResult, MetaContext};
//!
//! fn load_config(ctx: &MetaContext) -> CodedResult<String> {
//!     std::fs::read_to_string("config.toml")
//!         .wrap_code(Code::UNAVAILABLE, "configuration unavailable")
//!         .with_origin("config-loader")
//!         .with_meta_context(ctx)
//! }
//!
//! let err = load_config(&MetaContext::new().with("request_id", "r-1")).unwrap_err();
//! assert_eq!(err.code(), Code::UNAVAILABLE);
//! assert_eq!(err.metadata()["request_id"], "r-1");
//! ```

use crate::context::MetaContext;
use crate::types::{BoxError, Code, CodedError, CodedResult};

/// Classifies the error of any `Result`.
pub trait ResultExt<T, E> {
    /// Wraps the error under `code` and a client-safe message.
    fn wrap_code(self, code: Code, message: impl Into<String>) -> CodedResult<T>;

    /// Like [`wrap_code`](ResultExt::wrap_code), building the message only on error.
    fn wrap_code_with<F>(self, code: Code, f: F) -> CodedResult<T>
    where
        F: FnOnce() -> String;

    /// Keeps an existing [`CodedError`] in the error's chain, otherwise wraps with
    /// the fallback. See [`CodedError::ensure`].
    fn ensure_code(self, code: Code, message: impl Into<String>) -> CodedResult<T>;

    /// Like [`ensure_code`](ResultExt::ensure_code), building the fallback
    /// message only when it is used.
    fn ensure_code_with<F>(self, code: Code, f: F) -> CodedResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline(never)]
    fn wrap_code(self, code: Code, message: impl Into<String>) -> CodedResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(CodedError::build(code, message.into(), Some(err.into()))),
        }
    }

    #[inline(never)]
    fn wrap_code_with<F>(self, code: Code, f: F) -> CodedResult<T>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(CodedError::build(code, f(), Some(err.into()))),
        }
    }

    #[inline(never)]
    fn ensure_code(self, code: Code, message: impl Into<String>) -> CodedResult<T> {
        let err = match self {
            Ok(value) => return Ok(value),
            Err(err) => err.into(),
        };
        match CodedError::find_existing(err) {
            Ok(existing) => Err(existing.passed_through(code)),
            Err(err) => Err(CodedError::build(code, message.into(), Some(err))),
        }
    }

    #[inline(never)]
    fn ensure_code_with<F>(self, code: Code, f: F) -> CodedResult<T>
    where
        F: FnOnce() -> String,
    {
        let err = match self {
            Ok(value) => return Ok(value),
            Err(err) => err.into(),
        };
        match CodedError::find_existing(err) {
            Ok(existing) => Err(existing.passed_through(code)),
            Err(err) => Err(CodedError::build(code, f(), Some(err))),
        }
    }
}

/// Decorates the error of a [`CodedResult`] in place.
pub trait CodedResultExt<T> {
    fn with_meta_context(self, context: &MetaContext) -> Self;

    fn with_origin(self, origin: impl Into<String>) -> Self;

    fn with_tag(self, tag: impl Into<String>) -> Self;

    fn with_retryable(self) -> Self;
}

impl<T> CodedResultExt<T> for CodedResult<T> {
    #[inline]
    fn with_meta_context(self, context: &MetaContext) -> Self {
        self.map_err(|err| err.with_meta_context(context))
    }

    #[inline]
    fn with_origin(self, origin: impl Into<String>) -> Self {
        self.map_err(|err| err.with_origin(origin))
    }

    #[inline]
    fn with_tag(self, tag: impl Into<String>) -> Self {
        self.map_err(|err| err.with_tag(tag))
    }

    #[inline]
    fn with_retryable(self) -> Self {
        self.map_err(CodedError::with_retryable)
    }
}
