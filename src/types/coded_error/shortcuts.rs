//! Per-code constructors.
//!
//! Each named [`Code`] gets `CodedError::<name>`, `CodedError::wrap_<name>` and
//! `CodedError::ensure_<name>`, equivalent to the generic constructors with the
//! code filled in, plus `_fmt` variants taking [`format_args!`] output.

use std::fmt;

use super::CodedError;
use crate::types::{BoxError, Code};

macro_rules! code_shortcuts {
    ($($code:ident => $new:ident, $wrap:ident, $ensure:ident; $new_fmt:ident, $wrap_fmt:ident, $ensure_fmt:ident;)*) => {
        impl CodedError {
            $(
                #[doc = concat!("Creates an error with [`Code::", stringify!($code), "`].")]
                #[inline(never)]
                pub fn $new(message: impl Into<String>) -> Self {
                    Self::build(Code::$code, message.into(), None)
                }

                #[doc = concat!("Wraps `cause` with [`Code::", stringify!($code), "`].")]
                #[inline(never)]
                pub fn $wrap<E>(cause: E, message: impl Into<String>) -> Self
                where
                    E: Into<BoxError>,
                {
                    Self::build(Code::$code, message.into(), Some(cause.into()))
                }

                #[doc = concat!(
                    "Ensures a coded error, falling back to [`Code::",
                    stringify!($code),
                    "`]. See [`CodedError::ensure`]."
                )]
                #[inline(never)]
                pub fn $ensure<E>(err: E, message: impl Into<String>) -> Self
                where
                    E: Into<BoxError>,
                {
                    match Self::find_existing(err.into()) {
                        Ok(existing) => existing.passed_through(Code::$code),
                        Err(err) => Self::build(Code::$code, message.into(), Some(err)),
                    }
                }

                #[doc = concat!("Creates an error with [`Code::", stringify!($code), "`] and a formatted message.")]
                #[inline(never)]
                pub fn $new_fmt(args: fmt::Arguments<'_>) -> Self {
                    Self::build(Code::$code, fmt::format(args), None)
                }

                #[doc = concat!("Wraps `cause` with [`Code::", stringify!($code), "`] and a formatted message.")]
                #[inline(never)]
                pub fn $wrap_fmt<E>(cause: E, args: fmt::Arguments<'_>) -> Self
                where
                    E: Into<BoxError>,
                {
                    Self::build(Code::$code, fmt::format(args), Some(cause.into()))
                }

                #[doc = concat!(
                    "Ensures a coded error, falling back to [`Code::",
                    stringify!($code),
                    "`] and a message formatted only when it is used."
                )]
                #[inline(never)]
                pub fn $ensure_fmt<E>(err: E, args: fmt::Arguments<'_>) -> Self
                where
                    E: Into<BoxError>,
                {
                    match Self::find_existing(err.into()) {
                        Ok(existing) => existing.passed_through(Code::$code),
                        Err(err) => Self::build(Code::$code, fmt::format(args), Some(err)),
                    }
                }
            )*
        }
    };
}

code_shortcuts! {
    UNKNOWN => unknown, wrap_unknown, ensure_unknown;
        unknown_fmt, wrap_unknown_fmt, ensure_unknown_fmt;
    CANCELED => canceled, wrap_canceled, ensure_canceled;
        canceled_fmt, wrap_canceled_fmt, ensure_canceled_fmt;
    INVALID_ARGUMENT => invalid_argument, wrap_invalid_argument, ensure_invalid_argument;
        invalid_argument_fmt, wrap_invalid_argument_fmt, ensure_invalid_argument_fmt;
    DEADLINE_EXCEEDED => deadline_exceeded, wrap_deadline_exceeded, ensure_deadline_exceeded;
        deadline_exceeded_fmt, wrap_deadline_exceeded_fmt, ensure_deadline_exceeded_fmt;
    NOT_FOUND => not_found, wrap_not_found, ensure_not_found;
        not_found_fmt, wrap_not_found_fmt, ensure_not_found_fmt;
    ALREADY_EXISTS => already_exists, wrap_already_exists, ensure_already_exists;
        already_exists_fmt, wrap_already_exists_fmt, ensure_already_exists_fmt;
    PERMISSION_DENIED => permission_denied, wrap_permission_denied, ensure_permission_denied;
        permission_denied_fmt, wrap_permission_denied_fmt, ensure_permission_denied_fmt;
    RESOURCE_EXHAUSTED => resource_exhausted, wrap_resource_exhausted, ensure_resource_exhausted;
        resource_exhausted_fmt, wrap_resource_exhausted_fmt, ensure_resource_exhausted_fmt;
    FAILED_PRECONDITION => failed_precondition, wrap_failed_precondition, ensure_failed_precondition;
        failed_precondition_fmt, wrap_failed_precondition_fmt, ensure_failed_precondition_fmt;
    ABORTED => aborted, wrap_aborted, ensure_aborted;
        aborted_fmt, wrap_aborted_fmt, ensure_aborted_fmt;
    OUT_OF_RANGE => out_of_range, wrap_out_of_range, ensure_out_of_range;
        out_of_range_fmt, wrap_out_of_range_fmt, ensure_out_of_range_fmt;
    UNIMPLEMENTED => unimplemented, wrap_unimplemented, ensure_unimplemented;
        unimplemented_fmt, wrap_unimplemented_fmt, ensure_unimplemented_fmt;
    INTERNAL => internal, wrap_internal, ensure_internal;
        internal_fmt, wrap_internal_fmt, ensure_internal_fmt;
    UNAVAILABLE => unavailable, wrap_unavailable, ensure_unavailable;
        unavailable_fmt, wrap_unavailable_fmt, ensure_unavailable_fmt;
    DATA_LOSS => data_loss, wrap_data_loss, ensure_data_loss;
        data_loss_fmt, wrap_data_loss_fmt, ensure_data_loss_fmt;
    UNAUTHENTICATED => unauthenticated, wrap_unauthenticated, ensure_unauthenticated;
        unauthenticated_fmt, wrap_unauthenticated_fmt, ensure_unauthenticated_fmt;
}
