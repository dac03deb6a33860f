//! Builder and reader methods that tolerate a missing error.
//!
//! [`wrap`](crate::wrap) and [`ensure`](crate::ensure) return
//! `Option<CodedError>` so that "no error in, no error out" holds. This trait
//! lets the same decoration chain run on that `Option` without first checking
//! it: every mutator on `None` does nothing and returns `None`, and every
//! reader returns the empty value.
//!
//! ```
//! use code_rail::traits::MaybeCoded;
//! use code_rail::{wrap, Code};
//!
//! let db_result: Result<(), std::io::Error> = Ok(());
//! let err = wrap(db_result.err(), Code::INTERNAL, "query failed")
//!     .with_origin("user-repository")
//!     .with_tags(["database"]);
//!
//! assert!(err.is_none());
//! assert_eq!(err.code(), code_rail::Code::UNKNOWN);
//! assert_eq!(err.message(), "");
//! ```

use core::error::Error;
use core::fmt;

use serde_json::Value;

use crate::context::MetaContext;
use crate::types::{Code, CodedError, Metadata, StackTrace};

static EMPTY_MAP: Metadata = Metadata::new();
static EMPTY_STACK: StackTrace = StackTrace::EMPTY;

/// Nil-tolerant view of an optional [`CodedError`].
pub trait MaybeCoded: Sized {
    fn with_detail(self, key: impl Into<String>, value: impl Into<Value>) -> Self;
    fn with_meta(self, key: impl Into<String>, value: impl Into<Value>) -> Self;
    fn with_meta_context(self, context: &MetaContext) -> Self;
    fn with_debug(self, message: impl Into<String>) -> Self;
    fn with_debug_fmt(self, args: fmt::Arguments<'_>) -> Self;
    fn with_origin(self, origin: impl Into<String>) -> Self;
    fn with_tags<I>(self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>;
    fn with_retryable(self) -> Self;

    fn code(&self) -> Code;
    fn message(&self) -> &str;
    fn debug_message(&self) -> &str;
    fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)>;
    fn origin(&self) -> &str;
    fn tags(&self) -> &[String];
    fn details(&self) -> &Metadata;
    fn metadata(&self) -> &Metadata;
    fn stack_trace(&self) -> &StackTrace;
    fn is_retryable(&self) -> bool;
    /// Empty string when absent.
    fn debug_summary(&self) -> String;
    /// `null` when absent.
    fn structured_projection(&self) -> Value;
}

impl MaybeCoded for Option<CodedError> {
    #[inline]
    fn with_detail(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map(|err| err.with_detail(key, value))
    }

    #[inline]
    fn with_meta(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map(|err| err.with_meta(key, value))
    }

    #[inline]
    fn with_meta_context(self, context: &MetaContext) -> Self {
        self.map(|err| err.with_meta_context(context))
    }

    #[inline]
    fn with_debug(self, message: impl Into<String>) -> Self {
        self.map(|err| err.with_debug(message))
    }

    #[inline]
    fn with_debug_fmt(self, args: fmt::Arguments<'_>) -> Self {
        self.map(|err| err.with_debug_fmt(args))
    }

    #[inline]
    fn with_origin(self, origin: impl Into<String>) -> Self {
        self.map(|err| err.with_origin(origin))
    }

    #[inline]
    fn with_tags<I>(self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.map(|err| err.with_tags(tags))
    }

    #[inline]
    fn with_retryable(self) -> Self {
        self.map(CodedError::with_retryable)
    }

    fn code(&self) -> Code {
        self.as_ref().map_or(Code::UNKNOWN, CodedError::code)
    }

    fn message(&self) -> &str {
        self.as_ref().map_or("", CodedError::message)
    }

    fn debug_message(&self) -> &str {
        self.as_ref().map_or("", CodedError::debug_message)
    }

    fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.as_ref().and_then(CodedError::cause)
    }

    fn origin(&self) -> &str {
        self.as_ref().map_or("", CodedError::origin)
    }

    fn tags(&self) -> &[String] {
        self.as_ref().map(CodedError::tags).unwrap_or_default()
    }

    fn details(&self) -> &Metadata {
        self.as_ref().map_or(&EMPTY_MAP, CodedError::details)
    }

    fn metadata(&self) -> &Metadata {
        self.as_ref().map_or(&EMPTY_MAP, CodedError::metadata)
    }

    fn stack_trace(&self) -> &StackTrace {
        self.as_ref().map_or(&EMPTY_STACK, CodedError::stack_trace)
    }

    fn is_retryable(&self) -> bool {
        self.as_ref().is_some_and(CodedError::is_retryable)
    }

    fn debug_summary(&self) -> String {
        self.as_ref().map(CodedError::debug_summary).unwrap_or_default()
    }

    fn structured_projection(&self) -> Value {
        self.as_ref().map_or(Value::Null, CodedError::structured_projection)
    }
}
