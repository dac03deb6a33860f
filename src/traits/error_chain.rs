//! Method-call access to [`chain`](crate::chain) traversal.

use crate::chain::{self, AsDynError, Chain};
use crate::types::{Code, CodedError};

/// Chain traversal as methods on any error value.
///
/// ```
/// use code_rail::traits::ErrorChainExt;
/// use code_rail::{Code, CodedError};
///
/// let inner = CodedError::new(Code::NOT_FOUND, "user not found");
/// let outer = CodedError::wrap(inner, Code::INTERNAL, "lookup failed");
///
/// assert_eq!(outer.chain_code(), Code::INTERNAL);
/// assert!(outer.chain_code_in(&[Code::INTERNAL, Code::UNAVAILABLE]));
/// assert_eq!(outer.error_chain().count(), 2);
/// ```
pub trait ErrorChainExt: AsDynError {
    /// Iterates this error and its causes.
    fn error_chain(&self) -> Chain<'_> {
        chain::chain(Some(self))
    }

    /// First node of type `T`, starting with `self`.
    fn find_cause<T>(&self) -> Option<&T>
    where
        T: core::error::Error + 'static,
    {
        chain::find::<T, Self>(Some(self))
    }

    fn has_cause<T>(&self) -> bool
    where
        T: core::error::Error + 'static,
    {
        chain::contains::<T, Self>(Some(self))
    }

    fn find_coded(&self) -> Option<&CodedError> {
        chain::find_coded(Some(self))
    }

    fn chain_code(&self) -> Code {
        chain::code_of(Some(self))
    }

    fn chain_code_is(&self, code: Code) -> bool {
        chain::code_is(Some(self), code)
    }

    fn chain_code_in(&self, codes: &[Code]) -> bool {
        chain::code_in(Some(self), codes)
    }

    fn chain_is_retryable(&self) -> bool {
        chain::is_retryable(Some(self))
    }

    /// Whether any coded node in the chain is equivalent to `target`.
    fn chain_matches(&self, target: &CodedError) -> bool {
        chain::matches(Some(self), Some(target))
    }
}

impl<E: AsDynError + ?Sized> ErrorChainExt for E {}
