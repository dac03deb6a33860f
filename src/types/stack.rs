//! One-shot call-stack capture with deferred symbol resolution.
//!
//! Capturing only records instruction pointers, which is cheap enough to do on
//! every error construction. Turning those addresses into function names and
//! source locations is comparatively expensive and happens only when
//! [`StackTrace::resolve`] or [`StackTrace::format`] is called.

use core::ffi::c_void;
use core::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::types::trace_format::TraceFormatter;

/// Maximum number of frames kept per capture.
pub const MAX_DEPTH: usize = 32;

// Frames belonging to the unwinder itself sit below the anchor; leave room
// for them so the cap applies to caller frames only.
const UNWINDER_ALLOWANCE: usize = 16;

/// Ordered instruction pointers of a captured call stack, innermost first.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct StackTrace {
    frames: Vec<usize>,
}

impl StackTrace {
    pub(crate) const EMPTY: StackTrace = StackTrace { frames: Vec::new() };

    /// Captures the calling stack.
    ///
    /// Frames belonging to `capture` itself are never recorded. `skip` further
    /// frames are dropped after that, so `capture(0)` starts at the function that
    /// called `capture`, `capture(1)` at its caller, and so on. At most
    /// [`MAX_DEPTH`] frames are kept.
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        let anchor = StackTrace::capture as fn(usize) -> StackTrace as usize;
        let limit = MAX_DEPTH + skip + UNWINDER_ALLOWANCE;

        let mut raw: Vec<(usize, bool)> = Vec::with_capacity(limit);
        backtrace::trace(|frame| {
            raw.push((frame.ip() as usize, frame.symbol_address() as usize == anchor));
            raw.len() < limit
        });

        // Without unwind info for the anchor keep everything rather than
        // guessing at a skip count.
        let start = raw.iter().position(|(_, is_anchor)| *is_anchor).map_or(0, |i| i + 1 + skip);

        Self { frames: raw.into_iter().skip(start).take(MAX_DEPTH).map(|(ip, _)| ip).collect() }
    }

    /// Returns the captured instruction pointers.
    #[inline]
    pub fn frames(&self) -> &[usize] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Resolves every captured address into function and source location.
    ///
    /// Addresses with no debug information resolve to `<unknown>`.
    pub fn resolve(&self) -> Vec<ResolvedFrame> {
        self.frames.iter().map(|&ip| ResolvedFrame::resolve(ip)).collect()
    }

    /// Resolves and renders the trace with the given layout.
    ///
    /// Any [`TraceFormatter`] works; [`TraceFormat`](crate::TraceFormat) covers the built-in layouts.
    pub fn format<F: TraceFormatter>(&self, formatter: &F) -> String {
        formatter.format_trace(self.resolve().iter())
    }
}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for &ip in &self.frames {
            list.entry(&Address(ip));
        }
        list.finish()
    }
}

// Renders as `0x..` inside `debug_list`.
struct Address(usize);

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A captured frame after symbol lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFrame {
    pub function: String,
    pub file: Option<PathBuf>,
    pub line: Option<u32>,
}

impl ResolvedFrame {
    fn resolve(ip: usize) -> Self {
        let mut frame = ResolvedFrame { function: String::from("<unknown>"), file: None, line: None };
        let mut seen = false;

        // Inlined calls yield several symbols for one address; the first is the
        // innermost, which is the one the address actually executes in.
        backtrace::resolve(ip as *mut c_void, |symbol| {
            if seen {
                return;
            }
            seen = true;
            if let Some(name) = symbol.name() {
                frame.function = format!("{name:#}");
            }
            frame.file = symbol.filename().map(Path::to_path_buf);
            frame.line = symbol.lineno();
        });

        frame
    }

    /// `file:line`, or `<unknown>` when no location is available.
    pub fn location(&self) -> String {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => format!("{}:{}", file.display(), line),
            (Some(file), None) => file.display().to_string(),
            _ => String::from("<unknown>"),
        }
    }
}
