//! Walking cause chains to find a particular error shape.
//!
//! Every node of a chain exposes its cause through
//! [`Error::source`](core::error::Error::source) and its concrete type through
//! downcasting. The functions here walk those links from the outermost error
//! inward and stop at the first node of the requested type, so a
//! [`CodedError`] is found even when foreign wrapper types sit on top of it.
//!
//! All of them take an optional error and treat `None` as "nothing found".
//!
//! # Examples
//!
//! ```
//! use code_rail::chain;
//! use code_rail::{Code, CodedError};
//!
//! let base = std::io::Error::other("connection refused");
//! let err = CodedError::wrap(base, Code::UNAVAILABLE, "database unavailable");
//!
//! assert_eq!(chain::code_of(Some(&err)), Code::UNAVAILABLE);
//! assert!(chain::contains::<std::io::Error, _>(Some(&err)));
//! assert_eq!(chain::chain(Some(&err)).count(), 2);
//! ```

use core::error::Error;

use crate::types::{Code, CodedError};

/// Borrowing any error as a `'static` trait object, the form chain walking needs.
///
/// Implemented for every sized `Error + 'static` type and for the usual
/// `dyn Error` objects, so both `&CodedError` and `&*boxed_error` are accepted.
pub trait AsDynError {
    fn as_dyn_error(&self) -> &(dyn Error + 'static);
}

impl<E: Error + 'static> AsDynError for E {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + Send + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + Send + Sync + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

/// Iterator over an error and its transitive causes, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Iterates `err` followed by each of its causes.
pub fn chain<E>(err: Option<&E>) -> Chain<'_>
where
    E: AsDynError + ?Sized,
{
    Chain { next: err.map(AsDynError::as_dyn_error) }
}

/// Returns the first node of type `T` in the chain.
pub fn find<T, E>(err: Option<&E>) -> Option<&T>
where
    T: Error + 'static,
    E: AsDynError + ?Sized,
{
    chain(err).find_map(|node| node.downcast_ref::<T>())
}

/// Returns `true` if any node in the chain is a `T`.
pub fn contains<T, E>(err: Option<&E>) -> bool
where
    T: Error + 'static,
    E: AsDynError + ?Sized,
{
    find::<T, E>(err).is_some()
}

/// Returns the outermost [`CodedError`] in the chain.
#[inline]
pub fn find_coded<E>(err: Option<&E>) -> Option<&CodedError>
where
    E: AsDynError + ?Sized,
{
    find::<CodedError, E>(err)
}

/// Returns `true` if the chain contains a [`CodedError`].
#[inline]
pub fn is_coded<E>(err: Option<&E>) -> bool
where
    E: AsDynError + ?Sized,
{
    find_coded(err).is_some()
}

/// Code of the outermost [`CodedError`], or [`Code::UNKNOWN`] if there is none.
pub fn code_of<E>(err: Option<&E>) -> Code
where
    E: AsDynError + ?Sized,
{
    find_coded(err).map_or(Code::UNKNOWN, CodedError::code)
}

/// Returns `true` if the outermost [`CodedError`] has `code`.
pub fn code_is<E>(err: Option<&E>, code: Code) -> bool
where
    E: AsDynError + ?Sized,
{
    find_coded(err).is_some_and(|coded| coded.code() == code)
}

/// Returns `true` if the outermost [`CodedError`] has any of `codes`.
pub fn code_in<E>(err: Option<&E>, codes: &[Code]) -> bool
where
    E: AsDynError + ?Sized,
{
    find_coded(err).is_some_and(|coded| codes.contains(&coded.code()))
}

/// Whether the outermost [`CodedError`] is marked retryable; `false` without one.
pub fn is_retryable<E>(err: Option<&E>) -> bool
where
    E: AsDynError + ?Sized,
{
    find_coded(err).is_some_and(CodedError::is_retryable)
}

/// Returns `true` if any coded node in the chain is equivalent to `target`.
///
/// Equivalence is code equality. An absent error matches only an absent target.
pub fn matches<E>(err: Option<&E>, target: Option<&CodedError>) -> bool
where
    E: AsDynError + ?Sized,
{
    match (err, target) {
        (None, None) => true,
        (None, Some(_)) | (Some(_), None) => false,
        (Some(err), Some(target)) => chain(Some(err))
            .filter_map(|node| node.downcast_ref::<CodedError>())
            .any(|coded| coded == target),
    }
}
