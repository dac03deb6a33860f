//! Formatting shorthands for building coded errors and metadata contexts.
//!
//! - [`macro@crate::coded`] - `format!`-style [`CodedError::new_fmt`](crate::CodedError::new_fmt).
//! - [`macro@crate::wrap_coded`] - `format!`-style [`CodedError::wrap_fmt`](crate::CodedError::wrap_fmt).
//! - [`macro@crate::ensure_coded`] - `format!`-style [`CodedError::ensure_fmt`](crate::CodedError::ensure_fmt);
//!   the message is only formatted when the fallback is used.
//! - [`macro@crate::meta_context`] - variadic [`MetaContext::attach`](crate::MetaContext::attach).
//!
//! # Examples
//!
//! ```
//! use code_rail::{coded, ensure_coded, meta_context, wrap_coded, Code, MetaContext};
//!
//! let user_id = 42;
//! let err = coded!(Code::NOT_FOUND, "user {} not found", user_id);
//! assert_eq!(err.message(), "user 42 not found");
//!
//! let io = std::io::Error::other("timeout");
//! let err = wrap_coded!(io, Code::UNAVAILABLE, "shard {} unavailable", 3);
//! assert_eq!(err.message(), "shard 3 unavailable");
//!
//! let kept = ensure_coded!(err, Code::INTERNAL, "unexpected error in {}", "user-service");
//! assert_eq!(kept.code(), Code::UNAVAILABLE);
//!
//! let ctx = meta_context!(MetaContext::new(), "user_id", user_id, "action", "delete");
//! assert_eq!(ctx.len(), 2);
//! ```

/// Creates a [`CodedError`](crate::CodedError) with a formatted client-safe message.
///
/// # Examples
///
/// ```
/// use code_rail::{coded, Code};
///
/// let err = coded!(Code::INVALID_ARGUMENT, "invalid user ID: {}", -1);
/// assert_eq!(err.to_string(), "invalid user ID: -1");
/// ```
#[macro_export]
macro_rules! coded {
    ($code:expr, $($arg:tt)+) => {
        $crate::CodedError::new_fmt($code, format_args!($($arg)+))
    };
}

/// Wraps a cause in a [`CodedError`](crate::CodedError) with a formatted message.
///
/// # Examples
///
/// ```
/// use code_rail::{wrap_coded, Code};
///
/// let cause = std::io::Error::other("connection refused");
/// let err = wrap_coded!(cause, Code::UNAVAILABLE, "db {} unavailable", "primary");
/// assert_eq!(err.message(), "db primary unavailable");
/// ```
#[macro_export]
macro_rules! wrap_coded {
    ($cause:expr, $code:expr, $($arg:tt)+) => {
        $crate::CodedError::wrap_fmt($cause, $code, format_args!($($arg)+))
    };
}

/// Ensures a [`CodedError`](crate::CodedError), formatting the fallback message lazily.
///
/// # Examples
///
/// ```
/// use code_rail::{ensure_coded, Code};
///
/// let err = ensure_coded!(std::io::Error::other("eof"), Code::INTERNAL, "read failed in {}", "loader");
/// assert_eq!(err.code(), Code::INTERNAL);
/// assert_eq!(err.message(), "read failed in loader");
/// ```
#[macro_export]
macro_rules! ensure_coded {
    ($err:expr, $code:expr, $($arg:tt)+) => {
        $crate::CodedError::ensure_fmt($err, $code, format_args!($($arg)+))
    };
}

/// Derives a [`MetaContext`](crate::MetaContext) from alternating keys and values.
///
/// Every argument after the parent is converted with `Value::from`, so keys and
/// values may be any type with a JSON conversion. Pairs with a non-string key
/// and a trailing unpaired key are dropped, exactly as with
/// [`MetaContext::attach`](crate::MetaContext::attach).
///
/// # Examples
///
/// ```
/// use code_rail::{meta_context, MetaContext};
///
/// let root = MetaContext::new();
/// let ctx = meta_context!(root, "user_id", 123, "action", "delete");
/// assert_eq!(ctx.get("user_id").unwrap(), 123);
///
/// // 7 is not a string key; "dangling" has no value.
/// let ctx = meta_context!(ctx, 7, "ignored", "dangling");
/// assert_eq!(ctx.len(), 2);
/// ```
#[macro_export]
macro_rules! meta_context {
    ($parent:expr $(, $kv:expr)* $(,)?) => {{
        let keyvals: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($kv)),*];
        ($parent).attach(keyvals)
    }};
}
