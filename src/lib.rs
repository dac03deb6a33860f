//! Structured, coded errors with client-safe messages and internal debug context.
//!
//! Every [`CodedError`] carries one [`Code`] from a fixed 16-entry taxonomy, a
//! message that is safe to show clients, and, kept apart from that, everything
//! operators need: origin, tags, metadata, a debug message, the wrapped cause
//! and a stack trace captured at construction.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `code_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Creating and Decorating Errors
//!
//! ```
//! use code_rail::{Code, CodedError};
//!
//! let err = CodedError::new(Code::NOT_FOUND, "user not found")
//!     .with_detail("user_id", 42)
//!     .with_origin("user-service")
//!     .with_debug("no row in users for id 42");
//!
//! assert_eq!(err.to_string(), "user not found");
//! assert_eq!(err.code(), Code::NOT_FOUND);
//! ```
//!
//! ## Wrapping and Ensuring
//!
//! ```
//! use code_rail::{Code, CodedError};
//!
//! let io = std::io::Error::other("connection reset");
//! let err = CodedError::wrap(io, Code::UNAVAILABLE, "database unavailable").with_retryable();
//!
//! // An existing coded error is never reclassified.
//! let err = CodedError::ensure(err, Code::INTERNAL, "unexpected error");
//! assert_eq!(err.code(), Code::UNAVAILABLE);
//! assert!(err.is_retryable());
//! ```
//!
//! ## Inspecting Chains
//!
//! ```
//! use code_rail::{chain, Code, CodedError};
//!
//! let inner = CodedError::new(Code::DEADLINE_EXCEEDED, "query timed out").with_retryable();
//! let outer = CodedError::wrap(inner, Code::UNAVAILABLE, "search unavailable");
//!
//! assert!(chain::code_is(Some(&outer), Code::UNAVAILABLE));
//! // The outermost coded error decides, and `outer` is not retryable.
//! assert!(!chain::is_retryable(Some(&outer)));
//! assert!(chain::is_retryable(Some(&outer.with_retryable())));
//! assert_eq!(chain::code_of(None::<&CodedError>), Code::UNKNOWN);
//! ```
//!
//! ## Projections for Logs
//!
//! ```
//! use code_rail::{Code, CodedError};
//!
//! let err = CodedError::new(Code::INVALID_ARGUMENT, "bad email").with_tag("signup");
//!
//! assert_eq!(err.debug_summary(), "[invalid_argument] bad email | tags=[signup]");
//! let json = err.structured_projection();
//! assert_eq!(json["code"], "invalid_argument");
//! ```

/// Error chain traversal helpers
pub mod chain;
/// Request-scoped metadata propagation
pub mod context;
/// Formatting macros for errors and contexts
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for options, results and error chains
pub mod traits;
/// CodedError and the types it is built from
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use context::MetaContext;
pub use serde_json::Value;
pub use traits::*;
pub use types::coded_error::{ensure, ensure_fmt, wrap, wrap_fmt};
pub use types::{
    BoxError, Code, CodedError, CodedResult, ErrorVec, Metadata, ParseCodeError, ResolvedFrame,
    StackTrace, TraceFormat, TraceFormatter,
};
