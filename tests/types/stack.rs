use std::io;

use code_rail::traits::ResultExt;
use code_rail::{wrap, Code, CodedError, ResolvedFrame, StackTrace, TraceFormat, TraceFormatter};

#[inline(never)]
fn raise() -> CodedError {
    CodedError::new(Code::INTERNAL, "boom")
}

#[inline(never)]
fn raise_via_macro() -> CodedError {
    code_rail::coded!(Code::INTERNAL, "boom {}", 1)
}

#[inline(never)]
fn site_new() -> CodedError {
    CodedError::new(Code::INTERNAL, "boom")
}

#[inline(never)]
fn site_shortcut() -> CodedError {
    CodedError::not_found("missing")
}

#[inline(never)]
fn site_shortcut_fmt() -> CodedError {
    CodedError::not_found_fmt(format_args!("user {} missing", 7))
}

#[inline(never)]
fn site_free_wrap() -> Option<CodedError> {
    wrap(Some(io::Error::other("eof")), Code::DATA_LOSS, "truncated")
}

#[inline(never)]
fn site_ensure() -> CodedError {
    CodedError::ensure(io::Error::other("eof"), Code::INTERNAL, "unexpected")
}

#[inline(never)]
fn site_wrap_code() -> CodedError {
    let failed: Result<(), io::Error> = Err(io::Error::other("refused"));
    match failed.wrap_code(Code::UNAVAILABLE, "down") {
        Ok(()) => unreachable!(),
        Err(err) => err,
    }
}

fn first_function(err: &CodedError) -> String {
    err.stack_trace().resolve().into_iter().next().map(|frame| frame.function).unwrap_or_default()
}

#[test]
fn first_frame_is_the_constructor_caller() {
    let cases = [
        ("site_new", site_new()),
        ("site_shortcut", site_shortcut()),
        ("site_shortcut_fmt", site_shortcut_fmt()),
        ("site_free_wrap", site_free_wrap().expect("wrapped")),
        ("site_ensure", site_ensure()),
        ("site_wrap_code", site_wrap_code()),
    ];

    for (site, err) in cases {
        let first = first_function(&err);
        assert!(first.ends_with(&format!("::{site}")), "{site}: first frame was {first:?}");
    }
}

#[test]
fn capture_is_bounded() {
    let trace = StackTrace::capture(0);

    assert!(!trace.is_empty());
    assert!(trace.len() <= code_rail::types::stack::MAX_DEPTH);
}

#[test]
fn constructors_capture_from_the_same_depth() {
    // Both helpers are called from here, so everything above the first
    // recorded frame is the same; only the call site inside the helper differs.
    let direct = raise();
    let via_macro = raise_via_macro();

    let a = direct.stack_trace().frames();
    let b = via_macro.stack_trace().frames();
    assert!(a.len() >= 2 && b.len() >= 2);
    assert_eq!(a[2..], b[2..]);
}

#[test]
fn empty_trace_formats_to_empty_string() {
    let trace = StackTrace::default();

    assert!(trace.is_empty());
    assert_eq!(trace.format(&TraceFormat::default()), "");
}

#[test]
fn formatted_trace_has_one_entry_per_frame() {
    let err = raise();
    let frames = err.stack_trace().len();

    let compact = err.format_stack_trace_with(&TraceFormat::compact());
    assert_eq!(compact.split(" | ").count(), frames);

    let limited = err.format_stack_trace_with(&TraceFormat::compact().max_frames(1));
    assert_eq!(limited.split(" | ").count(), 1);
    assert!(limited.contains(" at "));
}

#[test]
fn resolved_frames_always_have_a_location_string() {
    for frame in raise().stack_trace().resolve() {
        assert!(!frame.function.is_empty());
        assert!(!frame.location().is_empty());
    }
}

struct DefaultLayout;

impl TraceFormatter for DefaultLayout {}

struct NamesOnly;

impl TraceFormatter for NamesOnly {
    fn format_frame(&self, frame: &ResolvedFrame) -> String {
        frame.function.clone()
    }
}

#[test]
fn custom_formatters_use_trait_defaults() {
    let err = raise();
    let frames = err.stack_trace().resolve();

    let names = err.format_stack_trace_with(&NamesOnly);
    assert_eq!(names.split('\n').count(), frames.len());
    assert_eq!(names.split('\n').next(), Some(frames[0].function.as_str()));

    let plain = err.stack_trace().format(&DefaultLayout);
    let first = plain.split('\n').next().unwrap_or_default();
    assert_eq!(first, format!("{} at {}", frames[0].function, frames[0].location()));
}
