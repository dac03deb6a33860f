//! Error types and utilities.
//!
//! This module holds the coded error value and the pieces it is built from:
//! the [`Code`] taxonomy, the captured [`StackTrace`], and the trace layouts.
//!
//! # Examples
//!
//! ```
//! use code_rail::{Code, CodedError};
//!
//! let err = CodedError::new(Code::PERMISSION_DENIED, "access denied")
//!     .with_detail("resource", "admin-panel")
//!     .with_origin("auth-service")
//!     .with_tags(["security", "rbac"])
//!     .with_meta("user_id", 123)
//!     .with_debug("user missing admin role");
//!
//! assert_eq!(err.to_string(), "access denied");
//! assert!(err.debug_summary().starts_with("[permission_denied] access denied"));
//! ```
use std::collections::BTreeMap;

use serde_json::Value;
use smallvec::SmallVec;

pub mod code;
pub mod coded_error;
pub mod stack;
pub mod trace_format;

pub use code::{Code, ParseCodeError};
pub use coded_error::CodedError;
pub use stack::{ResolvedFrame, StackTrace};
pub use trace_format::{TraceFormat, TraceFormatter};

/// SmallVec-backed collection used for tags.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case of one or two tags.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// String-keyed JSON values, kept in key order for stable rendering.
pub type Metadata = BTreeMap<String, Value>;

/// Any thread-safe error, the shape accepted as a cause.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Result alias that fails with [`CodedError`].
pub type CodedResult<T> = Result<T, CodedError>;
