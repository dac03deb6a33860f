//! Layouts for rendering a resolved stack trace.

use crate::types::stack::ResolvedFrame;

/// Trait for customizing how resolved frames are rendered.
pub trait TraceFormatter {
    fn format_frame(&self, frame: &ResolvedFrame) -> String {
        format!("{} at {}", frame.function, frame.location())
    }

    fn separator(&self) -> &str {
        "\n"
    }

    fn format_trace<'a>(&self, frames: impl Iterator<Item = &'a ResolvedFrame>) -> String {
        frames.map(|frame| self.format_frame(frame)).collect::<Vec<_>>().join(self.separator())
    }
}

/// Configuration-based trace layout.
///
/// The default places each function on its own line with the source location
/// indented beneath it:
///
/// ```text
/// my_crate::handler
///     src/handler.rs:42
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFormat {
    pub separator: String,
    pub location_separator: String,
    pub max_frames: Option<usize>,
}

impl Default for TraceFormat {
    fn default() -> Self {
        Self { separator: "\n".into(), location_separator: "\n\t".into(), max_frames: None }
    }
}

impl TraceFormat {
    /// Multi-line layout, one function and one indented location per frame.
    #[inline]
    pub fn multiline() -> Self {
        Self::default()
    }

    /// Single-line layout suitable for log fields.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), location_separator: " at ".into(), max_frames: None }
    }

    /// Keeps only the innermost `count` frames.
    #[inline]
    pub fn max_frames(mut self, count: usize) -> Self {
        self.max_frames = Some(count);
        self
    }
}

impl TraceFormatter for TraceFormat {
    fn format_frame(&self, frame: &ResolvedFrame) -> String {
        let mut result = String::with_capacity(frame.function.len() + 32);
        result.push_str(&frame.function);
        result.push_str(&self.location_separator);
        result.push_str(&frame.location());
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_trace<'a>(&self, frames: impl Iterator<Item = &'a ResolvedFrame>) -> String {
        let limit = self.max_frames.unwrap_or(usize::MAX);
        frames.take(limit).map(|frame| self.format_frame(frame)).collect::<Vec<_>>().join(self.separator.as_str())
    }
}
