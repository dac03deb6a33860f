//! Tracing integration for code-rail.
//!
//! Span names can be attached to coded errors as the `span` metadata entry,
//! and finished errors can be recorded as `tracing` events carrying their
//! code and structured projection.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! code-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::{CodedError, CodedResult};

/// Metadata key under which span names are stored.
pub const SPAN_KEY: &str = "span";

fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}

/// Extension trait for [`CodedResult`] that adds span context to errors.
pub trait ResultSpanExt<T> {
    /// Records the current span's name in the error's metadata.
    ///
    /// # Example
    ///
    /// ```
    /// use code_rail::tracing_ext::ResultSpanExt;
    /// use code_rail::{Code, CodedError, CodedResult};
    ///
    /// fn process() -> CodedResult<()> {
    ///     let _guard = tracing::info_span!("process").entered();
    ///     Err(CodedError::new(Code::INTERNAL, "failed")).with_current_span()
    /// }
    ///
    /// let err = process().unwrap_err();
    /// assert!(err.metadata().contains_key("span"));
    /// ```
    fn with_current_span(self) -> CodedResult<T>;

    /// Records a specific span's name in the error's metadata.
    fn with_span(self, span: &Span) -> CodedResult<T>;
}

impl<T> ResultSpanExt<T> for CodedResult<T> {
    fn with_current_span(self) -> CodedResult<T> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> CodedResult<T> {
        self.map_err(|err| err.with_meta(SPAN_KEY, span_name(span)))
    }
}

/// Tags an error with the name of the span it was raised in.
///
/// Outside any span, or without a subscriber, the name is `unknown`.
pub fn instrument_error(error: CodedError) -> CodedError {
    let name = span_name(&Span::current());
    error.with_meta(SPAN_KEY, name)
}

/// Emits an `ERROR` event describing `error`.
///
/// The event carries the code, the client message, the origin and the full
/// structured projection rendered as JSON.
pub fn record_error(error: &CodedError) {
    tracing::error!(
        code = %error.code(),
        origin = error.origin(),
        retryable = error.is_retryable(),
        projection = %error.structured_projection(),
        "{}",
        error.message()
    );
}
