//! The queryable capability and the shapes a selector can be matched against.
//!
//! - [`Queryable`]: anything that answers "what is the value of this key?"
//! - [`Queryables`]: an ordered collection of queryables. It is itself
//!   queryable (every key is absent) so it can be passed wherever a single
//!   object is accepted.
//! - [`Subject`]: what a selector actually sees. Either nothing, a single
//!   object, or a collection.

use std::fmt;

use crate::value::Value;

/// Trait for objects that selectors can inspect.
///
/// Implement it directly on your own types, or use a
/// [`Generator`](crate::Generator) to wrap objects you cannot (or do not
/// want to) implement it for.
///
/// # Example
///
/// ```
/// use standout_selector::{Queryable, Value};
///
/// struct Service {
///     name: String,
///     healthy: bool,
/// }
///
/// impl Queryable for Service {
///     fn attribute(&self, key: &str) -> Value<'_> {
///         match key {
///             "name" => Value::String(&self.name),
///             "healthy" => Value::Bool(self.healthy),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Queryable {
    /// Returns the value of the named attribute.
    ///
    /// Must be a pure lookup. Unknown keys return [`Value::None`].
    fn attribute(&self, key: &str) -> Value<'_>;

    /// Returns `Some` if this object is a collection of queryables.
    ///
    /// Only [`Queryables`] overrides this. Quantifying selectors use it to
    /// tell a single object from a collection.
    fn as_collection(&self) -> Option<&Queryables<'_>> {
        None
    }
}

impl<Q: Queryable + ?Sized> Queryable for &Q {
    fn attribute(&self, key: &str) -> Value<'_> {
        (**self).attribute(key)
    }

    fn as_collection(&self) -> Option<&Queryables<'_>> {
        (**self).as_collection()
    }
}

impl<Q: Queryable + ?Sized> Queryable for Box<Q> {
    fn attribute(&self, key: &str) -> Value<'_> {
        (**self).attribute(key)
    }

    fn as_collection(&self) -> Option<&Queryables<'_>> {
        (**self).as_collection()
    }
}

/// An ordered collection of queryables.
///
/// Insertion order is kept; [`Selector::first`](crate::Selector::first)
/// visits elements in that order. Querying the collection itself always
/// yields [`Value::None`].
///
/// # Example
///
/// ```
/// use standout_selector::{Queryable, Queryables, Value};
///
/// struct Tag(&'static str);
///
/// impl Queryable for Tag {
///     fn attribute(&self, _key: &str) -> Value<'_> {
///         Value::String(self.0)
///     }
/// }
///
/// let tags: Queryables = vec![Tag("a"), Tag("b")].into_iter().collect();
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags.attribute("anything"), Value::None);
/// ```
#[derive(Default)]
pub struct Queryables<'q> {
    items: Vec<Box<dyn Queryable + 'q>>,
}

impl<'q> Queryables<'q> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Queryables::default()
    }

    /// Appends an element.
    pub fn push(&mut self, item: impl Queryable + 'q) {
        self.items.push(Box::new(item));
    }

    /// Appends an element, builder style.
    pub fn with(mut self, item: impl Queryable + 'q) -> Self {
        self.push(item);
        self
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Option<&(dyn Queryable + 'q)> {
        self.items.get(index).map(|item| item.as_ref())
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Queryable + 'q)> + '_ {
        self.items.iter().map(|item| item.as_ref())
    }
}

impl Queryable for Queryables<'_> {
    fn attribute(&self, _key: &str) -> Value<'_> {
        Value::None
    }

    fn as_collection(&self) -> Option<&Queryables<'_>> {
        Some(self)
    }
}

impl<'q, Q: Queryable + 'q> FromIterator<Q> for Queryables<'q> {
    fn from_iter<I: IntoIterator<Item = Q>>(iter: I) -> Self {
        let mut queryables = Queryables::new();
        queryables.extend(iter);
        queryables
    }
}

impl<'q, Q: Queryable + 'q> Extend<Q> for Queryables<'q> {
    fn extend<I: IntoIterator<Item = Q>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl fmt::Debug for Queryables<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queryables")
            .field("len", &self.items.len())
            .finish()
    }
}

/// The thing a selector is matched against.
///
/// Quantifying selectors pattern-match on this instead of probing types at
/// runtime. Build one with `From`:
///
/// ```
/// use standout_selector::{Queryable, Queryables, Subject, Value};
///
/// struct Name(&'static str);
///
/// impl Queryable for Name {
///     fn attribute(&self, _key: &str) -> Value<'_> {
///         Value::String(self.0)
///     }
/// }
///
/// let one = Name("a");
/// let many: Queryables = vec![Name("a"), Name("b")].into_iter().collect();
///
/// assert!(matches!(Subject::from(&one), Subject::Single(_)));
/// assert!(matches!(Subject::from(&many), Subject::Many(_)));
/// assert!(matches!(Subject::from(None::<&Name>), Subject::Absent));
/// ```
#[derive(Clone, Copy)]
pub enum Subject<'s> {
    /// No subject at all.
    Absent,
    /// A single queryable object.
    Single(&'s (dyn Queryable + 's)),
    /// A collection of queryable objects.
    Many(&'s Queryables<'s>),
}

impl<'s> Subject<'s> {
    /// Classifies a queryable as `Single` or `Many`.
    pub fn of(queryable: &'s (dyn Queryable + 's)) -> Self {
        match queryable.as_collection() {
            Some(collection) => Subject::Many(collection),
            None => Subject::Single(queryable),
        }
    }

    /// Looks up an attribute on the subject.
    ///
    /// `Absent` and `Many` have no attributes of their own and always return
    /// [`Value::None`].
    pub fn attribute(&self, key: &str) -> Value<'s> {
        match *self {
            Subject::Single(queryable) => queryable.attribute(key),
            Subject::Absent | Subject::Many(_) => Value::None,
        }
    }

    /// Returns `true` for [`Subject::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Subject::Absent)
    }

    /// Returns the collection if the subject is `Many`.
    pub fn as_collection(&self) -> Option<&'s Queryables<'s>> {
        match *self {
            Subject::Many(collection) => Some(collection),
            _ => None,
        }
    }
}

impl<'s, Q: Queryable + 's> From<&'s Q> for Subject<'s> {
    fn from(queryable: &'s Q) -> Self {
        Subject::of(queryable)
    }
}

impl<'s, Q: Queryable + 's> From<Option<&'s Q>> for Subject<'s> {
    fn from(queryable: Option<&'s Q>) -> Self {
        match queryable {
            Some(queryable) => Subject::of(queryable),
            None => Subject::Absent,
        }
    }
}

impl fmt::Debug for Subject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Absent => f.write_str("Absent"),
            Subject::Single(_) => f.write_str("Single(..)"),
            Subject::Many(collection) => f.debug_tuple("Many").field(collection).finish(),
        }
    }
}
