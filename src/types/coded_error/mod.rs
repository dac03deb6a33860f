//! Coded error value with client-safe messaging and internal debug context.
//!
//! [`CodedError`] keeps three audiences apart:
//! - programs get a stable [`Code`],
//! - clients get [`message`](CodedError::message) and [`details`](CodedError::details),
//! - operators get the origin, tags, metadata, debug message, cause and stack trace.
//!
//! Every constructor captures the call stack exactly once. Builder methods
//! consume and return the same value, so decoration happens on the path that
//! created the error and the value is frozen once it is handed on.

use core::error::Error;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::chain;
use crate::context::MetaContext;
use crate::types::{BoxError, Code, ErrorVec, Metadata, StackTrace, TraceFormat, TraceFormatter};

mod projection;
mod shortcuts;
mod summary;
mod traits;

// `build` plus the public constructor that called it.
const CALLER_SKIP: usize = 2;

/// Structured error carrying a code, messages, context and an optional cause.
///
/// Equality compares codes only: two errors are equal when they classify the
/// same kind of failure, whatever their messages or causes.
#[must_use]
#[derive(Debug, Clone)]
pub struct CodedError {
    pub(crate) code: Code,
    pub(crate) message: String,
    pub(crate) debug_message: String,
    pub(crate) cause: Option<Arc<dyn Error + Send + Sync + 'static>>,
    pub(crate) origin: String,
    pub(crate) tags: ErrorVec<String>,
    pub(crate) details: Metadata,
    pub(crate) metadata: Metadata,
    pub(crate) stack: StackTrace,
    pub(crate) retryable: bool,
}

impl CodedError {
    /// Every public constructor must call this directly for the stack skip to hold.
    #[inline(never)]
    pub(crate) fn build(code: Code, message: String, cause: Option<BoxError>) -> Self {
        Self {
            code,
            message,
            debug_message: String::new(),
            cause: cause.map(Arc::from),
            origin: String::new(),
            tags: ErrorVec::new(),
            details: Metadata::new(),
            metadata: Metadata::new(),
            stack: StackTrace::capture(CALLER_SKIP),
            retryable: false,
        }
    }

    /// Looks for an existing coded error in `err`'s chain.
    ///
    /// A top-level match is moved out as-is; a match deeper in a foreign
    /// wrapper is cloned, which shares its cause.
    pub(crate) fn find_existing(err: BoxError) -> Result<Self, BoxError> {
        let err = match err.downcast::<CodedError>() {
            Ok(existing) => return Ok(*existing),
            Err(err) => err,
        };
        let found = chain::find_coded(Some(&*err as &(dyn Error + 'static))).cloned();
        found.ok_or(err)
    }

    /// Creates an error without a cause. The message must be safe to show clients.
    #[inline(never)]
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self::build(code, message.into(), None)
    }

    /// Creates an error with a formatted message; see also [`coded!`](crate::coded).
    #[inline(never)]
    pub fn new_fmt(code: Code, args: fmt::Arguments<'_>) -> Self {
        Self::build(code, fmt::format(args), None)
    }

    /// Wraps `cause` under a new code and client-safe message.
    #[inline(never)]
    pub fn wrap<E>(cause: E, code: Code, message: impl Into<String>) -> Self
    where
        E: Into<BoxError>,
    {
        Self::build(code, message.into(), Some(cause.into()))
    }

    /// Wraps `cause` with a formatted message; see also [`wrap_coded!`](crate::wrap_coded).
    #[inline(never)]
    pub fn wrap_fmt<E>(cause: E, code: Code, args: fmt::Arguments<'_>) -> Self
    where
        E: Into<BoxError>,
    {
        Self::build(code, fmt::format(args), Some(cause.into()))
    }

    /// Guarantees a coded error without reclassifying one that already exists.
    ///
    /// If `err` is, or wraps, a `CodedError`, that error is returned unchanged
    /// and `code`/`message` are discarded. Otherwise `err` becomes the cause of
    /// a new error with the fallback code and message.
    ///
    /// ```
    /// use code_rail::{Code, CodedError};
    ///
    /// let not_found = CodedError::new(Code::NOT_FOUND, "user not found");
    /// let kept = CodedError::ensure(not_found, Code::INTERNAL, "unexpected error");
    /// assert_eq!(kept.code(), Code::NOT_FOUND);
    ///
    /// let io = std::io::Error::other("disk on fire");
    /// let wrapped = CodedError::ensure(io, Code::INTERNAL, "unexpected error");
    /// assert_eq!(wrapped.code(), Code::INTERNAL);
    /// ```
    #[inline(never)]
    pub fn ensure<E>(err: E, code: Code, message: impl Into<String>) -> Self
    where
        E: Into<BoxError>,
    {
        match Self::find_existing(err.into()) {
            Ok(existing) => existing.passed_through(code),
            Err(err) => Self::build(code, message.into(), Some(err)),
        }
    }

    /// Like [`ensure`](Self::ensure); the message is only formatted on the fallback path.
    #[inline(never)]
    pub fn ensure_fmt<E>(err: E, code: Code, args: fmt::Arguments<'_>) -> Self
    where
        E: Into<BoxError>,
    {
        match Self::find_existing(err.into()) {
            Ok(existing) => existing.passed_through(code),
            Err(err) => Self::build(code, fmt::format(args), Some(err)),
        }
    }

    #[inline]
    pub(crate) fn passed_through(self, _fallback: Code) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            code = %self.code,
            fallback = %_fallback,
            "ensure kept existing coded error, fallback discarded"
        );
        self
    }

    /// Adds a client-safe detail, replacing any previous value for `key`.
    #[inline]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Adds internal metadata, replacing any previous value for `key`.
    #[inline]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Copies every entry of `context` into the metadata.
    ///
    /// Context entries overwrite existing keys, so call order decides who wins:
    ///
    /// ```
    /// use code_rail::{Code, CodedError, MetaContext};
    ///
    /// let ctx = MetaContext::new().with("post_id", 42);
    ///
    /// let err = CodedError::new(Code::INTERNAL, "failed").with_meta("post_id", 99).with_meta_context(&ctx);
    /// assert_eq!(err.metadata()["post_id"], 42);
    ///
    /// let err = CodedError::new(Code::INTERNAL, "failed").with_meta_context(&ctx).with_meta("post_id", 99);
    /// assert_eq!(err.metadata()["post_id"], 99);
    /// ```
    pub fn with_meta_context(mut self, context: &MetaContext) -> Self {
        for (key, value) in context.iter() {
            self.metadata.insert(key.to_owned(), value.clone());
        }
        self
    }

    /// Sets the internal debug message. Never shown to clients.
    #[inline]
    pub fn with_debug(mut self, message: impl Into<String>) -> Self {
        self.debug_message = message.into();
        self
    }

    /// Sets a formatted internal debug message.
    #[inline]
    pub fn with_debug_fmt(self, args: fmt::Arguments<'_>) -> Self {
        self.with_debug(fmt::format(args))
    }

    /// Sets the service, package or component the error came from.
    #[inline]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Appends tags. Order and duplicates are kept.
    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    #[inline]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Marks the failed operation as safe to retry. There is no way to unset it.
    #[inline]
    pub fn with_retryable(mut self) -> Self {
        self.retryable = true;
        self
    }

    #[inline]
    pub fn code(&self) -> Code {
        self.code
    }

    /// The client-safe message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The internal debug message, empty if never set.
    #[inline]
    pub fn debug_message(&self) -> &str {
        &self.debug_message
    }

    /// The wrapped error, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Where the error came from, empty if never set.
    #[inline]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[inline]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Client-safe details.
    #[inline]
    pub fn details(&self) -> &Metadata {
        &self.details
    }

    /// Internal metadata.
    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    #[inline]
    pub fn stack_trace(&self) -> &StackTrace {
        &self.stack
    }

    #[inline]
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    /// Resolves the captured stack into the default multi-line layout.
    pub fn format_stack_trace(&self) -> String {
        self.stack.format(&TraceFormat::default())
    }

    /// Resolves the captured stack with a custom layout.
    pub fn format_stack_trace_with<F: TraceFormatter>(&self, formatter: &F) -> String {
        self.stack.format(formatter)
    }
}

/// [`CodedError::wrap`] over an optional cause: wrapping nothing yields nothing.
#[inline(never)]
pub fn wrap<E>(cause: Option<E>, code: Code, message: impl Into<String>) -> Option<CodedError>
where
    E: Into<BoxError>,
{
    let cause = cause?.into();
    Some(CodedError::build(code, message.into(), Some(cause)))
}

/// [`CodedError::wrap_fmt`] over an optional cause.
#[inline(never)]
pub fn wrap_fmt<E>(cause: Option<E>, code: Code, args: fmt::Arguments<'_>) -> Option<CodedError>
where
    E: Into<BoxError>,
{
    let cause = cause?.into();
    Some(CodedError::build(code, fmt::format(args), Some(cause)))
}

/// [`CodedError::ensure`] over an optional error: no error stays no error.
#[inline(never)]
pub fn ensure<E>(err: Option<E>, code: Code, message: impl Into<String>) -> Option<CodedError>
where
    E: Into<BoxError>,
{
    let err = err?.into();
    Some(match CodedError::find_existing(err) {
        Ok(existing) => existing.passed_through(code),
        Err(err) => CodedError::build(code, message.into(), Some(err)),
    })
}

/// [`CodedError::ensure_fmt`] over an optional error.
#[inline(never)]
pub fn ensure_fmt<E>(err: Option<E>, code: Code, args: fmt::Arguments<'_>) -> Option<CodedError>
where
    E: Into<BoxError>,
{
    let err = err?.into();
    Some(match CodedError::find_existing(err) {
        Ok(existing) => existing.passed_through(code),
        Err(err) => CodedError::build(code, fmt::format(args), Some(err)),
    })
}
