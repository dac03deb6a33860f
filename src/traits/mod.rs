//! Extension traits layered over [`CodedError`](crate::CodedError).
//!
//! - [`ErrorChainExt`]: chain traversal as methods on any error
//! - [`MaybeCoded`]: builder and readers on `Option<CodedError>` that treat `None` as a no-op
//! - [`ResultExt`] / [`CodedResultExt`]: classify and decorate errors inside `Result`
//! - [`TransientError`]: retryable classification for retry loops
//!
//! # Examples
//!
//! ```
//! use code_rail::traits::{ErrorChainExt, ResultExt};
//! use code_rail::Code;
//!
//! let result: Result<(), std::io::Error> = Err(std::io::Error::other("reset by peer"));
//! let err = result.wrap_code(Code::UNAVAILABLE, "upstream unavailable").unwrap_err();
//!
//! assert!(err.has_cause::<std::io::Error>());
//! assert_eq!(err.chain_code(), Code::UNAVAILABLE);
//! ```

pub mod error_chain;
pub mod maybe_coded;
pub mod result_ext;
pub mod transient;

pub use error_chain::ErrorChainExt;
pub use maybe_coded::MaybeCoded;
pub use result_ext::{CodedResultExt, ResultExt};
pub use transient::{TransientError, TransientErrorExt};
