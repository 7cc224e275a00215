//! Composable selectors.
//!
//! A [`Selector`] is a tree of combinators evaluated against a
//! [`Subject`]. Evaluation is pure and total: every call returns a `bool`
//! and nothing is mutated, so one tree can be shared and reused freely.
//!
//! | Selector | Absent | Single | Many |
//! |----------|--------|--------|------|
//! | `any()` | `true` | `true` | `true` |
//! | `none()` | `false` | `false` | `false` |
//! | `inverse(s)` | `!s` | `!s` | `!s` |
//! | `lambda(f)` | `f(subject)` | `f(subject)` | `f(subject)` |
//! | `first(s)` | `false` | `false` | some element matches `s` |
//! | `all(s)` | `true` | `false` | every element matches `s` |

use std::fmt;
use std::ops::Not;
use std::sync::Arc;

use crate::queryable::{Queryable, Queryables, Subject};

/// Function evaluated by [`Selector::Lambda`].
pub type MatchFn = Arc<dyn Fn(Subject<'_>) -> bool + Send + Sync>;

/// A composable boolean test over a [`Subject`].
///
/// # Example
///
/// ```
/// use standout_selector::{Generator, Selector, Value};
///
/// let names = Generator::new(|s: &&'static str, _key: &str| Value::String(s));
/// let hosts = names.generate_all(vec!["db-1", "web-1", "web-2"]);
///
/// let is_web = Selector::lambda(|s| {
///     s.attribute("name").as_str().is_some_and(|n| n.starts_with("web"))
/// });
///
/// assert!(Selector::first(is_web.clone()).matches(&hosts));
/// assert!(!Selector::all(is_web.clone()).matches(&hosts));
/// assert!(Selector::all(!is_web).matches(&names.generate_all(vec!["db-2"])));
/// ```
#[derive(Clone)]
pub enum Selector {
    /// Matches everything, including an absent subject.
    Any,
    /// Matches nothing.
    None,
    /// Matches when the inner selector does not.
    Inverse(Box<Selector>),
    /// Matches a collection with at least one matching element.
    First(Box<Selector>),
    /// Matches a collection whose elements all match, or an absent subject.
    All(Box<Selector>),
    /// Delegates to a caller-supplied function.
    Lambda(MatchFn),
}

impl Selector {
    /// Selector that matches every subject.
    pub fn any() -> Self {
        Selector::Any
    }

    /// Selector that matches no subject.
    pub fn none() -> Self {
        Selector::None
    }

    /// Negates `selector`.
    pub fn inverse(selector: Selector) -> Self {
        Selector::Inverse(Box::new(selector))
    }

    /// Existential quantifier over a collection subject.
    ///
    /// Elements are visited in order and evaluation stops at the first match.
    /// A single (non-collection) subject never matches.
    pub fn first(selector: Selector) -> Self {
        Selector::First(Box::new(selector))
    }

    /// Universal quantifier over a collection subject.
    ///
    /// Evaluation stops at the first element that does not match. An empty
    /// collection and an absent subject both match; a single
    /// (non-collection) subject does not.
    pub fn all(selector: Selector) -> Self {
        Selector::All(Box::new(selector))
    }

    /// Wraps a function as a selector.
    ///
    /// The function sees the subject as is, including [`Subject::Absent`].
    pub fn lambda<F>(f: F) -> Self
    where
        F: Fn(Subject<'_>) -> bool + Send + Sync + 'static,
    {
        Selector::Lambda(Arc::new(f))
    }

    /// Tests whether `subject` matches this selector.
    ///
    /// Accepts anything convertible to a [`Subject`]: a reference to a
    /// [`Queryable`], a reference to [`Queryables`], an `Option` of a
    /// reference, or a `Subject` itself.
    pub fn matches<'s>(&self, subject: impl Into<Subject<'s>>) -> bool {
        self.eval(subject.into())
    }

    fn eval(&self, subject: Subject<'_>) -> bool {
        match self {
            Selector::Any => true,
            Selector::None => false,
            Selector::Inverse(inner) => !inner.eval(subject),
            Selector::Lambda(f) => f(subject),
            Selector::First(inner) => match subject {
                Subject::Many(items) => first_match(inner, items),
                Subject::Absent | Subject::Single(_) => false,
            },
            Selector::All(inner) => match subject {
                Subject::Many(items) => all_match(inner, items),
                Subject::Absent => true,
                Subject::Single(_) => false,
            },
        }
    }

    // ========================================================================
    // Execution over slices
    // ========================================================================

    /// Returns references to the items that match, in input order.
    pub fn filter<'a, Q: Queryable>(&self, items: &'a [Q]) -> Vec<&'a Q> {
        let results: Vec<&'a Q> = items.iter().filter(|item| self.matches(*item)).collect();
        tracing::debug!(
            selector = %self,
            items = items.len(),
            matched = results.len(),
            "filtered items"
        );
        results
    }

    /// Counts the items that match.
    pub fn count<Q: Queryable>(&self, items: &[Q]) -> usize {
        let count = items.iter().filter(|item| self.matches(*item)).count();
        tracing::debug!(
            selector = %self,
            items = items.len(),
            matched = count,
            "counted items"
        );
        count
    }

    /// Returns the first matching item.
    pub fn find<'a, Q: Queryable>(&self, items: &'a [Q]) -> Option<&'a Q> {
        items.iter().find(|item| self.matches(*item))
    }

    /// Returns the index of the first matching item.
    pub fn position<Q: Queryable>(&self, items: &[Q]) -> Option<usize> {
        items.iter().position(|item| self.matches(item))
    }
}

fn first_match(inner: &Selector, items: &Queryables<'_>) -> bool {
    for (index, item) in items.iter().enumerate() {
        if inner.eval(Subject::of(item)) {
            tracing::trace!(index, "first: element matched");
            return true;
        }
    }
    false
}

fn all_match(inner: &Selector, items: &Queryables<'_>) -> bool {
    for (index, item) in items.iter().enumerate() {
        if !inner.eval(Subject::of(item)) {
            tracing::trace!(index, "all: element did not match");
            return false;
        }
    }
    true
}

impl Not for Selector {
    type Output = Selector;

    fn not(self) -> Selector {
        Selector::inverse(self)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Any => f.write_str("any"),
            Selector::None => f.write_str("none"),
            Selector::Inverse(inner) => write!(f, "inverse({inner})"),
            Selector::First(inner) => write!(f, "first({inner})"),
            Selector::All(inner) => write!(f, "all({inner})"),
            Selector::Lambda(_) => f.write_str("lambda"),
        }
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Any => f.write_str("Any"),
            Selector::None => f.write_str("None"),
            Selector::Inverse(inner) => f.debug_tuple("Inverse").field(inner).finish(),
            Selector::First(inner) => f.debug_tuple("First").field(inner).finish(),
            Selector::All(inner) => f.debug_tuple("All").field(inner).finish(),
            Selector::Lambda(_) => f.write_str("Lambda(..)"),
        }
    }
}
