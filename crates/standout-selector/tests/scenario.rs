//! End-to-end scenarios: generators feeding selector trees.

use standout_selector::{
    Generated, Generator, Number, Queryable, Queryables, Selector, Subject, Value,
};

fn identity<'a>(s: &'a &'static str, _key: &str) -> Value<'a> {
    Value::String(s)
}

fn equals_a() -> Selector {
    Selector::lambda(|s| s.attribute("").as_str() == Some("a"))
}

struct Letters {
    a: Generated<&'static str>,
    b: Generated<&'static str>,
    c: Generated<&'static str>,
    all: Queryables<'static>,
}

fn letters() -> Letters {
    let generator = Generator::new(identity);
    Letters {
        a: generator.generate("a"),
        b: generator.generate("b"),
        c: generator.generate("c"),
        all: generator.generate_all(vec!["a", "b", "c"]),
    }
}

// ============================================================================
// Letters scenario
// ============================================================================

#[test]
fn lambda_matches_single() {
    let l = letters();

    assert!(equals_a().matches(&l.a));
    assert!(!equals_a().matches(&l.b));
}

#[test]
fn inverse_matches_other_letter() {
    let l = letters();

    assert!(Selector::inverse(equals_a()).matches(&l.c));
}

#[test]
fn first_matches_collection() {
    let l = letters();

    assert!(Selector::first(equals_a()).matches(&l.all));
}

#[test]
fn all_does_not_match_mixed_collection() {
    let l = letters();

    assert!(!Selector::all(equals_a()).matches(&l.all));
}

#[test]
fn all_none_does_not_match() {
    let l = letters();

    assert!(!Selector::all(Selector::none()).matches(&l.all));
}

#[test]
fn any_matches_collection() {
    let l = letters();

    assert!(Selector::any().matches(&l.all));
}

#[test]
fn collection_built_from_references() {
    let l = letters();
    let by_ref = Queryables::new().with(&l.b).with(&l.a);

    assert!(Selector::first(equals_a()).matches(&by_ref));
    assert_eq!(Selector::first(equals_a()).to_string(), "first(lambda)");
}

// ============================================================================
// Integer payloads
// ============================================================================

fn int_attributes<'a>(n: &'a i64, key: &str) -> Value<'a> {
    match key {
        "square" => Value::Number(Number::I64(n * n)),
        "dec" => Value::Number(Number::I64(n - 1)),
        _ => Value::Number(Number::I64(0)),
    }
}

#[test]
fn generated_integers_answer_attributes() {
    let three = Generator::new(int_attributes).generate(3);

    assert_eq!(three.attribute("square"), Value::Number(Number::I64(9)));
    assert_eq!(three.attribute("dec"), Value::Number(Number::I64(2)));
    assert_eq!(three.attribute(""), Value::Number(Number::I64(0)));
}

#[test]
fn selecting_integers_by_attribute() {
    let generator = Generator::new(int_attributes);
    let numbers: Vec<_> = (1..=6).map(|n| generator.generate(n)).collect();

    let big_square = Selector::lambda(|s| {
        s.attribute("square")
            .as_number()
            .is_some_and(|n| n >= Number::I64(10))
    });

    let selected: Vec<i64> = big_square
        .filter(&numbers)
        .into_iter()
        .map(|g| *g.payload())
        .collect();
    assert_eq!(selected, vec![4, 5, 6]);
    assert_eq!(big_square.position(&numbers), Some(3));
}

// ============================================================================
// Nil subjects
// ============================================================================

#[test]
fn nil_subject_table() {
    let nil = Subject::Absent;

    assert!(Selector::any().matches(nil));
    assert!(!Selector::none().matches(nil));
    assert!(!Selector::first(Selector::any()).matches(nil));
    assert!(Selector::all(Selector::none()).matches(nil));
    assert!(!equals_a().matches(nil));
    assert!(Selector::inverse(equals_a()).matches(nil));
}

#[test]
fn optional_subjects() {
    let l = letters();
    let present: Option<&Generated<&'static str>> = Some(&l.a);
    let missing: Option<&Generated<&'static str>> = None;

    assert!(equals_a().matches(present));
    assert!(!equals_a().matches(missing));
}
