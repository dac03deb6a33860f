//! Request-scoped metadata that travels down a call graph explicitly.
//!
//! A [`MetaContext`] is an immutable snapshot. Deriving a child with
//! [`MetaContext::attach`] or [`MetaContext::with`] copies the parent's entries
//! into a fresh map before applying the new pairs, so the parent is never
//! touched. Tasks that derive from the same parent each get their own snapshot
//! and can never see one another's additions, without any locking.
//!
//! Snapshots are merged into an error's internal metadata with
//! [`CodedError::with_meta_context`](crate::CodedError::with_meta_context).
//!
//! # Examples
//!
//! ```
//! use code_rail::{meta_context, Code, CodedError, MetaContext};
//!
//! let request = meta_context!(MetaContext::new(), "request_id", "req-7", "user_id", 42);
//! let post = meta_context!(request, "post_id", 9);
//!
//! let err = CodedError::new(Code::NOT_FOUND, "post not found").with_meta_context(&post);
//! assert_eq!(err.metadata()["post_id"], 9);
//! assert_eq!(err.metadata()["request_id"], "req-7");
//! assert!(request.get("post_id").is_none());
//! ```

use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::types::Metadata;

/// Immutable, cheaply clonable key/value snapshot.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaContext {
    entries: Arc<Metadata>,
}

impl MetaContext {
    /// Creates an empty context.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives a child context from a flat `key, value, key, value, ...` sequence.
    ///
    /// Later pairs overwrite earlier ones and the parent's entries. A pair whose
    /// key is not a JSON string is skipped, as is a trailing key with no value.
    pub fn attach<I>(&self, keyvals: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut merged = Metadata::clone(&self.entries);
        let mut keyvals = keyvals.into_iter().map(Into::into);

        while let Some(key) = keyvals.next() {
            let Some(value) = keyvals.next() else {
                break;
            };
            if let Value::String(key) = key {
                merged.insert(key, value);
            }
        }

        Self { entries: Arc::new(merged) }
    }

    /// Derives a child context with a single typed pair.
    pub fn with(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut merged = Metadata::clone(&self.entries);
        merged.insert(key.into(), value.into());
        Self { entries: Arc::new(merged) }
    }

    /// Returns the snapshot mapping.
    #[inline]
    pub fn snapshot(&self) -> &Metadata {
        &self.entries
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Metadata> for MetaContext {
    fn from(entries: Metadata) -> Self {
        Self { entries: Arc::new(entries) }
    }
}

impl Serialize for MetaContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Derives a child of `parent`, treating an absent parent as empty.
///
/// See [`MetaContext::attach`] for the pairing rules.
pub fn attach<I>(parent: Option<&MetaContext>, keyvals: I) -> MetaContext
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    match parent {
        Some(parent) => parent.attach(keyvals),
        None => MetaContext::new().attach(keyvals),
    }
}

/// Returns a copy of the snapshot, or an empty map if there is no context.
pub fn read(context: Option<&MetaContext>) -> Metadata {
    context.map(|ctx| ctx.snapshot().clone()).unwrap_or_default()
}
