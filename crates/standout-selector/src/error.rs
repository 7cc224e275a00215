//! Error types for the selector crate.

use thiserror::Error;

/// Errors that can occur while constructing generators.
///
/// Evaluation never fails: [`Selector::matches`](crate::Selector::matches) and
/// [`Queryable::attribute`](crate::Queryable::attribute) are total. The only
/// faults are programmer errors caught when a value is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// A generator was built without an attribute function.
    #[error("generator has no attribute function")]
    MissingAttributeFn,
}

/// Result type for selector operations.
pub type Result<T> = std::result::Result<T, SelectorError>;
