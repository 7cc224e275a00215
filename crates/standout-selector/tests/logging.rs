//! Tests for the tracing events emitted during evaluation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use standout_selector::{Generator, Selector, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: Level,
    fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureLayer {
    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.field("message") == Some(message))
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields,
        });
    }
}

fn capture<R>(f: impl FnOnce() -> R) -> (R, CaptureLayer) {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, layer)
}

fn names() -> Generator<&'static str> {
    Generator::new(|s: &&'static str, _key: &str| Value::String(s))
}

fn equals(letter: &'static str) -> Selector {
    Selector::lambda(move |s| s.attribute("").as_str() == Some(letter))
}

#[test]
fn filter_emits_summary() {
    let items: Vec<_> = ["a", "b", "a"].into_iter().map(|s| names().generate(s)).collect();

    let (matched, layer) = capture(|| equals("a").filter(&items).len());
    assert_eq!(matched, 2);

    let events = layer.with_message("filtered items");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::DEBUG);
    assert_eq!(events[0].field("items"), Some("3"));
    assert_eq!(events[0].field("matched"), Some("2"));
    assert_eq!(events[0].field("selector"), Some("lambda"));
}

#[test]
fn count_emits_summary() {
    let items: Vec<_> = ["a", "b"].into_iter().map(|s| names().generate(s)).collect();

    let (count, layer) = capture(|| Selector::none().count(&items));
    assert_eq!(count, 0);

    let events = layer.with_message("counted items");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("matched"), Some("0"));
    assert_eq!(events[0].field("selector"), Some("none"));
}

#[test]
fn quantifier_short_circuit_is_traced() {
    let collection = names().generate_all(vec!["b", "a", "c"]);

    let (found, layer) = capture(|| Selector::first(equals("a")).matches(&collection));
    assert!(found);

    let events = layer.with_message("first: element matched");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::TRACE);
    assert_eq!(events[0].field("index"), Some("1"));

    let (every, layer) = capture(|| Selector::all(equals("b")).matches(&collection));
    assert!(!every);

    let events = layer.with_message("all: element did not match");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("index"), Some("1"));
}

#[test]
fn plain_matches_is_silent() {
    let single = names().generate("a");

    let (matched, layer) = capture(|| equals("a").matches(&single));
    assert!(matched);
    assert!(layer.events().is_empty());
}
