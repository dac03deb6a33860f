use core::fmt::Write;

use super::CodedError;
use crate::types::Metadata;

impl CodedError {
    /// Renders every populated field on one line for operators.
    ///
    /// Segments appear in a fixed order and only when they carry something:
    /// `[code] message`, `source=`, `tags=`, `details=`, `metadata=`,
    /// `retryable=true`, `debug=` (when it differs from the message) and
    /// `cause=` (the cause's own message, one level deep). They are joined
    /// with `" | "`.
    ///
    /// ```
    /// use code_rail::{Code, CodedError};
    ///
    /// let err = CodedError::new(Code::UNAVAILABLE, "service down")
    ///     .with_origin("payment-service")
    ///     .with_tags(["critical"])
    ///     .with_retryable();
    ///
    /// assert_eq!(
    ///     err.debug_summary(),
    ///     "[unavailable] service down | source=payment-service | tags=[critical] | retryable=true"
    /// );
    /// ```
    #[must_use]
    pub fn debug_summary(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(8);

        parts.push(format!("[{}] {}", self.code, self.message));

        if !self.origin.is_empty() {
            parts.push(format!("source={}", self.origin));
        }
        if !self.tags.is_empty() {
            parts.push(format!("tags=[{}]", self.tags.join(", ")));
        }
        if !self.details.is_empty() {
            parts.push(format!("details={}", render_map(&self.details)));
        }
        if !self.metadata.is_empty() {
            parts.push(format!("metadata={}", render_map(&self.metadata)));
        }
        if self.retryable {
            parts.push(String::from("retryable=true"));
        }
        if !self.debug_message.is_empty() && self.debug_message != self.message {
            parts.push(format!("debug={}", self.debug_message));
        }
        if let Some(cause) = &self.cause {
            parts.push(format!("cause={cause}"));
        }

        parts.join(" | ")
    }
}

// {a=1, b="x"} in key order; values use their JSON form.
fn render_map(map: &Metadata) -> String {
    let mut out = String::with_capacity(map.len() * 16 + 2);
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{key}={value}");
    }
    out.push('}');
    out
}
