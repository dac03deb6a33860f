//! Tests for tracing integration.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex};

use code_rail::tracing_ext::{instrument_error, record_error, ResultSpanExt, SPAN_KEY};
use code_rail::{Code, CodedError, CodedResult};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Span, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

type Fields = BTreeMap<String, String>;

/// Layer that keeps every event's level and fields.
#[derive(Clone, Default)]
struct Captured {
    events: Arc<Mutex<Vec<(Level, Fields)>>>,
}

struct FieldVisitor<'a>(&'a mut Fields);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().unwrap().push((*event.metadata().level(), fields));
    }
}

fn capture(f: impl FnOnce()) -> Vec<(Level, Fields)> {
    let layer = Captured::default();
    let events = Arc::clone(&layer.events);
    tracing::subscriber::with_default(tracing_subscriber::registry().with(layer), f);
    let captured = events.lock().unwrap().clone();
    captured
}

#[test]
fn result_span_ext_with_current_span() {
    let result: CodedResult<i32> = Err(CodedError::new(Code::INTERNAL, "failed"));
    let err = result.with_current_span().unwrap_err();

    assert!(err.metadata().contains_key(SPAN_KEY));
}

#[test]
fn result_span_ext_ok_passes_through() {
    let result: CodedResult<i32> = Ok(42);
    assert_eq!(result.with_span(&Span::none()).unwrap(), 42);
}

#[test]
fn instrument_error_adds_span_metadata() {
    let err = instrument_error(CodedError::new(Code::UNAVAILABLE, "down"));

    assert!(err.metadata().contains_key(SPAN_KEY));
    assert_eq!(err.code(), Code::UNAVAILABLE);
}

#[test]
fn disabled_span_is_reported_as_unknown() {
    let result: CodedResult<()> = Err(CodedError::new(Code::INTERNAL, "failed"));
    let err = result.with_span(&Span::none()).unwrap_err();

    assert_eq!(err.metadata()[SPAN_KEY], "unknown");
}

#[test]
fn span_name_is_recorded_inside_an_entered_span() {
    let mut err = None;
    capture(|| {
        let _guard = tracing::info_span!("load_user").entered();
        err = Some(instrument_error(CodedError::new(Code::NOT_FOUND, "missing")));
    });

    assert_eq!(err.unwrap().metadata()[SPAN_KEY], "load_user");
}

#[test]
fn record_error_emits_one_error_event() {
    let err = CodedError::new(Code::DATA_LOSS, "corrupt").with_origin("store");
    let events = capture(|| record_error(&err));

    assert_eq!(events.len(), 1);
    let (level, fields) = &events[0];
    assert_eq!(*level, Level::ERROR);
    assert_eq!(fields["code"], "data_loss");
    assert_eq!(fields["origin"], "store");
    assert_eq!(fields["retryable"], "false");
    assert_eq!(fields["message"], "corrupt");
    assert!(fields["projection"].contains("\"code\":\"data_loss\""));
}

#[test]
fn ensure_reports_discarded_fallback() {
    let events = capture(|| {
        let kept = CodedError::ensure(CodedError::new(Code::NOT_FOUND, "missing"), Code::INTERNAL, "x");
        assert_eq!(kept.code(), Code::NOT_FOUND);
    });

    assert_eq!(events.len(), 1);
    let (level, fields) = &events[0];
    assert_eq!(*level, Level::TRACE);
    assert_eq!(fields["code"], "not_found");
    assert_eq!(fields["fallback"], "internal");
}

#[test]
fn ensure_fallback_path_is_silent() {
    let events = capture(|| {
        let wrapped = CodedError::ensure(io::Error::other("eof"), Code::INTERNAL, "x");
        assert_eq!(wrapped.code(), Code::INTERNAL);
    });

    assert!(events.is_empty());
}
