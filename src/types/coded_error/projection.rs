use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::CodedError;
use crate::types::Metadata;

impl CodedError {
    /// Builds the nested representation handed to structured log sinks.
    ///
    /// Keys always come in this order, and any empty or default field is left
    /// out entirely:
    ///
    /// `code, message, source, tags, details, metadata, retryable, debug, cause`
    ///
    /// A coded cause is projected recursively; any other cause is rendered as
    /// its display string.
    ///
    /// ```
    /// use code_rail::{Code, CodedError};
    ///
    /// let base = CodedError::new(Code::NOT_FOUND, "row missing").with_origin("repo");
    /// let err = CodedError::wrap(base, Code::INTERNAL, "lookup failed");
    ///
    /// let value = err.structured_projection();
    /// assert_eq!(value["code"], "internal");
    /// assert_eq!(value["cause"]["code"], "not_found");
    /// assert_eq!(value["cause"]["source"], "repo");
    /// ```
    #[must_use]
    pub fn structured_projection(&self) -> Value {
        let mut fields = Map::new();

        fields.insert("code".into(), Value::String(self.code.to_string()));
        fields.insert("message".into(), Value::String(self.message.clone()));

        if !self.origin.is_empty() {
            fields.insert("source".into(), Value::String(self.origin.clone()));
        }
        if !self.tags.is_empty() {
            fields.insert("tags".into(), self.tags.iter().cloned().map(Value::String).collect());
        }
        if !self.details.is_empty() {
            fields.insert("details".into(), to_object(&self.details));
        }
        if !self.metadata.is_empty() {
            fields.insert("metadata".into(), to_object(&self.metadata));
        }
        if self.retryable {
            fields.insert("retryable".into(), Value::Bool(true));
        }
        if !self.debug_message.is_empty() && self.debug_message != self.message {
            fields.insert("debug".into(), Value::String(self.debug_message.clone()));
        }
        if let Some(cause) = &self.cause {
            let cause = match cause.downcast_ref::<CodedError>() {
                Some(coded) => coded.structured_projection(),
                None => Value::String(cause.to_string()),
            };
            fields.insert("cause".into(), cause);
        }

        Value::Object(fields)
    }
}

fn to_object(map: &Metadata) -> Value {
    Value::Object(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
}

impl Serialize for CodedError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.structured_projection().serialize(serializer)
    }
}
