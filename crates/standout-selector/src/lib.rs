//! Selector - composable predicates over attribute-queryable objects.
//!
//! Selector lets you describe "which objects do I want" as a small tree of
//! combinators, without reflection and without committing your types to a
//! schema. It has two halves:
//!
//! - [`Queryable`]: objects that answer attribute lookups by key. Implement
//!   it directly, or wrap any payload with a [`Generator`].
//! - [`Selector`]: boolean tests built from `any`, `none`, `inverse`,
//!   `lambda`, and the quantifiers `first` (some element) and `all` (every
//!   element) over a [`Queryables`] collection.
//!
//! # Quick Start
//!
//! ```rust
//! use standout_selector::{Generator, Number, Selector, Value};
//!
//! struct Port {
//!     number: u16,
//!     open: bool,
//! }
//!
//! let ports = Generator::new(|p: &Port, key: &str| match key {
//!     "number" => Value::Number(Number::from(p.number)),
//!     "open" => Value::Bool(p.open),
//!     _ => Value::None,
//! });
//!
//! let scan = ports.generate_all(vec![
//!     Port { number: 22, open: true },
//!     Port { number: 80, open: false },
//! ]);
//!
//! let open = Selector::lambda(|s| s.attribute("open").as_bool() == Some(true));
//!
//! assert!(Selector::first(open.clone()).matches(&scan));
//! assert!(!Selector::all(open.clone()).matches(&scan));
//! assert!(open.matches(&ports.generate(Port { number: 443, open: true })));
//! ```
//!
//! # Subjects
//!
//! Selectors are matched against a [`Subject`]: nothing
//! ([`Subject::Absent`]), a single queryable, or a collection. A
//! [`Queryables`] collection is itself [`Queryable`] (every key is absent),
//! so it can be passed anywhere a single object is accepted; only the
//! quantifiers look inside it.
//!
//! | Selector | Absent | Single | Many |
//! |----------|--------|--------|------|
//! | `any()` | `true` | `true` | `true` |
//! | `none()` | `false` | `false` | `false` |
//! | `inverse(s)` | `!s` | `!s` | `!s` |
//! | `lambda(f)` | `f(subject)` | `f(subject)` | `f(subject)` |
//! | `first(s)` | `false` | `false` | some element matches `s` |
//! | `all(s)` | `true` | `false` | every element matches `s` |
//!
//! # Convenience helpers
//!
//! [`Selector::filter`], [`Selector::count`], [`Selector::find`] and
//! [`Selector::position`] run a selector over a slice of queryables. They
//! are thin loops over [`Selector::matches`] for callers that do not want to
//! write their own; nothing else in the crate depends on them.
//!
//! Evaluation never fails. The only errors are construction errors, see
//! [`SelectorError`].

mod error;
mod generator;
mod queryable;
mod selector;
mod value;

// Re-export public API
pub use error::{Result, SelectorError};
pub use generator::{AttributeFn, Generated, Generator, GeneratorBuilder};
pub use queryable::{Queryable, Queryables, Subject};
pub use selector::{MatchFn, Selector};
pub use value::{Number, Value};
