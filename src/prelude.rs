//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use code_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`coded!`], [`wrap_coded!`], [`ensure_coded!`], [`meta_context!`]
//! - **Types**: [`Code`], [`CodedError`], [`CodedResult`], [`MetaContext`]
//! - **Traits**: [`ResultExt`], [`CodedResultExt`], [`ErrorChainExt`], [`MaybeCoded`]
//!
//! # Examples
//!
//! ```
//! use code_rail::prelude::*;
//!
//! fn load_profile(ctx: &MetaContext, id: u64) -> CodedResult<String> {
//!     std::fs::read_to_string(format!("/nonexistent/profiles/{id}.json"))
//!         .wrap_code_with(Code::NOT_FOUND, || format!("profile {id} not found"))
//!         .with_meta_context(ctx)
//! }
//!
//! let ctx = meta_context!(MetaContext::new(), "request_id", "r-1");
//! let err = load_profile(&ctx, 7).unwrap_err();
//! assert_eq!(err.code(), Code::NOT_FOUND);
//! assert!(err.has_cause::<std::io::Error>());
//! ```

// Macros
pub use crate::{coded, ensure_coded, meta_context, wrap_coded};

// Core types
pub use crate::context::MetaContext;
pub use crate::types::{Code, CodedError, CodedResult};

// Traits
pub use crate::traits::{CodedResultExt, ErrorChainExt, MaybeCoded, ResultExt};
