//! Stable, transport-agnostic error classification codes.
//!
//! [`Code`] is a `u8` newtype with one associated constant per known
//! classification. Numeric values are part of the wire and log format: new codes
//! may only be appended after [`Code::UNAUTHENTICATED`], existing ones are never
//! renumbered.
//!
//! # Examples
//!
//! ```
//! use code_rail::Code;
//!
//! assert_eq!(Code::NOT_FOUND.to_string(), "not_found");
//! assert_eq!("permission_denied".parse::<Code>().unwrap(), Code::PERMISSION_DENIED);
//! assert_eq!(Code::from(200).to_string(), "Code(200)");
//! ```

use core::fmt;
use core::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Standardized error classification.
///
/// Any `u8` is representable so that codes received from a newer peer survive
/// a round trip; only the sixteen constants below have names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Code(u8);

const NAMES: [&str; 16] = [
    "unknown",
    "canceled",
    "invalid_argument",
    "deadline_exceeded",
    "not_found",
    "already_exists",
    "permission_denied",
    "resource_exhausted",
    "failed_precondition",
    "aborted",
    "out_of_range",
    "unimplemented",
    "internal",
    "unavailable",
    "data_loss",
    "unauthenticated",
];

impl Code {
    /// Unknown error. Also the zero value.
    pub const UNKNOWN: Code = Code(0);
    /// Operation canceled by the caller.
    pub const CANCELED: Code = Code(1);
    /// Request is invalid regardless of system state.
    pub const INVALID_ARGUMENT: Code = Code(2);
    /// Deadline expired before the operation completed.
    pub const DEADLINE_EXCEEDED: Code = Code(3);
    /// Requested resource cannot be found.
    pub const NOT_FOUND: Code = Code(4);
    /// Resource already exists.
    pub const ALREADY_EXISTS: Code = Code(5);
    /// Caller is not authorized.
    pub const PERMISSION_DENIED: Code = Code(6);
    /// Quota, storage or another resource is exhausted.
    pub const RESOURCE_EXHAUSTED: Code = Code(7);
    /// System is not in the state required for the operation.
    pub const FAILED_PRECONDITION: Code = Code(8);
    /// Operation aborted, typically by a concurrency conflict.
    pub const ABORTED: Code = Code(9);
    /// Operation attempted past the valid range.
    pub const OUT_OF_RANGE: Code = Code(10);
    /// Operation not implemented or not supported.
    pub const UNIMPLEMENTED: Code = Code(11);
    /// An invariant is broken.
    pub const INTERNAL: Code = Code(12);
    /// Service temporarily unavailable.
    pub const UNAVAILABLE: Code = Code(13);
    /// Unrecoverable data loss or corruption.
    pub const DATA_LOSS: Code = Code(14);
    /// Valid authentication credentials are required.
    pub const UNAUTHENTICATED: Code = Code(15);

    /// Every named code, in numeric order.
    pub const ALL: [Code; 16] = [
        Code::UNKNOWN,
        Code::CANCELED,
        Code::INVALID_ARGUMENT,
        Code::DEADLINE_EXCEEDED,
        Code::NOT_FOUND,
        Code::ALREADY_EXISTS,
        Code::PERMISSION_DENIED,
        Code::RESOURCE_EXHAUSTED,
        Code::FAILED_PRECONDITION,
        Code::ABORTED,
        Code::OUT_OF_RANGE,
        Code::UNIMPLEMENTED,
        Code::INTERNAL,
        Code::UNAVAILABLE,
        Code::DATA_LOSS,
        Code::UNAUTHENTICATED,
    ];

    /// Returns the numeric value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the canonical snake-case name, or `None` for an unassigned value.
    #[inline]
    pub fn name(self) -> Option<&'static str> {
        NAMES.get(self.0 as usize).copied()
    }

    /// Returns `true` if this value is one of the named codes.
    #[inline]
    pub fn is_known(self) -> bool {
        (self.0 as usize) < NAMES.len()
    }

    /// Looks up a code by its canonical name.
    pub fn from_name(name: &str) -> Option<Code> {
        NAMES.iter().position(|n| *n == name).map(|i| Code(i as u8))
    }

    /// Canonical names of every named code, in numeric order.
    pub fn names() -> &'static [&'static str] {
        &NAMES
    }

    /// Numeric values of every named code.
    pub fn values() -> impl Iterator<Item = u8> {
        Code::ALL.into_iter().map(Code::value)
    }
}

impl From<u8> for Code {
    #[inline]
    fn from(value: u8) -> Self {
        Code(value)
    }
}

impl From<Code> for u8 {
    #[inline]
    fn from(code: Code) -> Self {
        code.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Code({})", self.0),
        }
    }
}

/// Returned when parsing a name that is not a known [`Code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCodeError {
    name: String,
}

impl ParseCodeError {
    /// The rejected input.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid error code, try [{}]", self.name, NAMES.join(", "))
    }
}

impl core::error::Error for ParseCodeError {}

impl FromStr for Code {
    type Err = ParseCodeError;

    /// Accepts a canonical name or the `Code(n)` form `Display` uses for unnamed values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(code) = Code::from_name(s) {
            return Ok(code);
        }
        s.strip_prefix("Code(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|digits| digits.parse::<u8>().ok())
            .map(Code)
            .ok_or_else(|| ParseCodeError { name: s.to_owned() })
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
