//! Adapters that make arbitrary payloads queryable.
//!
//! A [`Generator`] binds an attribute function to payloads, so types that do
//! not implement [`Queryable`] (foreign types, primitives, tuples) can still
//! be matched by selectors.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, SelectorError};
use crate::queryable::{Queryable, Queryables};
use crate::value::Value;

/// Signature of the function a [`Generator`] uses to read attributes.
pub type AttributeFn<P> = dyn for<'a> Fn(&'a P, &str) -> Value<'a> + Send + Sync;

/// Turns payloads of type `P` into [`Queryable`]s.
///
/// Cloning a generator shares its attribute function.
///
/// # Example
///
/// ```
/// use standout_selector::{Generator, Number, Queryable, Value};
///
/// let squares = Generator::new(|n: &i64, key: &str| match key {
///     "square" => Value::Number(Number::I64(n * n)),
///     _ => Value::None,
/// });
///
/// let three = squares.generate(3);
/// assert_eq!(three.attribute("square"), Value::Number(Number::I64(9)));
/// assert_eq!(three.attribute("cube"), Value::None);
/// ```
pub struct Generator<P> {
    attribute_fn: Arc<AttributeFn<P>>,
}

impl<P> Generator<P> {
    /// Creates a generator from an attribute function.
    pub fn new<F>(attribute_fn: F) -> Self
    where
        F: for<'a> Fn(&'a P, &str) -> Value<'a> + Send + Sync + 'static,
    {
        Generator {
            attribute_fn: Arc::new(attribute_fn),
        }
    }

    /// Starts building a generator whose function is supplied later.
    pub fn builder() -> GeneratorBuilder<P> {
        GeneratorBuilder::default()
    }

    /// Binds `payload` to this generator's attribute function.
    ///
    /// Every call produces an independent queryable. Nothing is cached.
    pub fn generate(&self, payload: P) -> Generated<P> {
        Generated {
            payload,
            attribute_fn: Arc::clone(&self.attribute_fn),
        }
    }

    /// Generates a queryable for each payload and collects them in order.
    pub fn generate_all<'q, I>(&self, payloads: I) -> Queryables<'q>
    where
        I: IntoIterator<Item = P>,
        P: 'q,
    {
        payloads
            .into_iter()
            .map(|payload| self.generate(payload))
            .collect()
    }
}

impl<P> Clone for Generator<P> {
    fn clone(&self) -> Self {
        Generator {
            attribute_fn: Arc::clone(&self.attribute_fn),
        }
    }
}

impl<P> fmt::Debug for Generator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator").finish_non_exhaustive()
    }
}

/// Builder for a [`Generator`].
///
/// Useful when the attribute function is chosen at runtime. Building
/// without one fails immediately rather than producing a generator that
/// cannot answer lookups.
///
/// ```
/// use standout_selector::{Generator, SelectorError, Value};
///
/// let missing = Generator::<String>::builder().build();
/// assert_eq!(missing.unwrap_err(), SelectorError::MissingAttributeFn);
///
/// let names = Generator::<String>::builder()
///     .attribute_fn(|s: &String, _key: &str| Value::String(s))
///     .build()
///     .unwrap();
/// # let _ = names;
/// ```
pub struct GeneratorBuilder<P> {
    attribute_fn: Option<Arc<AttributeFn<P>>>,
}

impl<P> Default for GeneratorBuilder<P> {
    fn default() -> Self {
        GeneratorBuilder { attribute_fn: None }
    }
}

impl<P> GeneratorBuilder<P> {
    /// Sets the attribute function.
    pub fn attribute_fn<F>(mut self, attribute_fn: F) -> Self
    where
        F: for<'a> Fn(&'a P, &str) -> Value<'a> + Send + Sync + 'static,
    {
        self.attribute_fn = Some(Arc::new(attribute_fn));
        self
    }

    /// Finalizes the generator.
    ///
    /// Returns [`SelectorError::MissingAttributeFn`] if no function was set.
    pub fn build(self) -> Result<Generator<P>> {
        self.attribute_fn
            .map(|attribute_fn| Generator { attribute_fn })
            .ok_or(SelectorError::MissingAttributeFn)
    }
}

/// A payload bound to an attribute function. Created by [`Generator::generate`].
pub struct Generated<P> {
    payload: P,
    attribute_fn: Arc<AttributeFn<P>>,
}

impl<P> Generated<P> {
    /// Returns the wrapped payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Unwraps the payload, discarding the binding.
    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P> Queryable for Generated<P> {
    fn attribute(&self, key: &str) -> Value<'_> {
        (self.attribute_fn)(&self.payload, key)
    }
}

impl<P: Clone> Clone for Generated<P> {
    fn clone(&self) -> Self {
        Generated {
            payload: self.payload.clone(),
            attribute_fn: Arc::clone(&self.attribute_fn),
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for Generated<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generated")
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}
