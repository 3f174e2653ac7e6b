//! Casts: checks that narrow untyped values.
//!
//! This module provides the basic casts for each JSON type, the combinators
//! that compose them, and the [`Shape`] entry point that builds both. Every
//! cast stops at the first mismatch and reports it with the path at which it
//! was found.
//!
//! # Example
//!
//! ```rust
//! use shapecast::{Cast, Shape};
//! use serde_json::json;
//!
//! let header = Shape::structure()
//!     .field("success", Shape::boolean())
//!     .field("tags", Shape::array_of(Shape::string()));
//!
//! let value = json!({"success": true, "tags": ["a", "b", 3]});
//! let rejection = header.cast(&value).unwrap_err();
//!
//! assert_eq!(rejection.message, "Value at 'tags.2' is not of type 'string'");
//! ```

mod basic;
mod combinators;
mod custom;
mod structure;
mod traits;

pub use basic::{
    ArrayCast, BooleanCast, NullCast, NumberCast, ObjectCast, StringCast, UndefinedCast,
    UnknownCast,
};
pub use combinators::{ArrayOf, Literal, LiteralValue, Nullable, ObjectOf, OneOf, Optional};
pub use custom::CustomCast;
pub use structure::{Structure, Tuple};
pub use traits::{AnyCast, Cast, DynCast};

use crate::{CastResult, Unknown};

/// Entry point for building casts.
///
/// `Shape` provides a factory method for every basic cast and combinator.
///
/// # Example
///
/// ```rust
/// use shapecast::{Cast, Shape};
/// use serde_json::json;
///
/// let user = Shape::nullable(Shape::structure().field("name", Shape::string()));
///
/// let value = json!(null);
/// assert_eq!(user.cast(&value).unwrap(), None);
/// ```
pub struct Shape;

impl Shape {
    /// Accepts any value, including an absent one.
    pub fn unknown() -> UnknownCast {
        UnknownCast
    }

    /// Accepts `null`.
    pub fn null() -> NullCast {
        NullCast
    }

    /// Accepts only an absent value.
    pub fn undefined() -> UndefinedCast {
        UndefinedCast
    }

    /// Accepts strings, narrowing to `&str`.
    pub fn string() -> StringCast {
        StringCast
    }

    /// Accepts numbers, narrowing to `&Number`.
    pub fn number() -> NumberCast {
        NumberCast
    }

    /// Accepts booleans, narrowing to `bool`.
    pub fn boolean() -> BooleanCast {
        BooleanCast
    }

    /// Accepts objects (not arrays, not `null`), narrowing to the map.
    pub fn object() -> ObjectCast {
        ObjectCast
    }

    /// Accepts arrays, narrowing to the element vector.
    pub fn array() -> ArrayCast {
        ArrayCast
    }

    /// Accepts what any alternative accepts; the first to accept wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecast::{Cast, Shape};
    /// use serde_json::json;
    ///
    /// let id = Shape::one_of([Shape::string().boxed(), Shape::number().boxed()]);
    ///
    /// let value = json!(null);
    /// let rejection = id.cast(&value).unwrap_err();
    /// assert_eq!(rejection.expected, "string | number");
    /// ```
    pub fn one_of(alternatives: impl IntoIterator<Item = AnyCast>) -> OneOf {
        OneOf::new(alternatives)
    }

    /// Accepts values strictly equal to one of the given constants.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecast::{Cast, Shape};
    /// use serde_json::json;
    ///
    /// let direction = Shape::literal(["left", "right"]);
    ///
    /// let value = json!("left");
    /// assert!(direction.cast(&value).is_ok());
    ///
    /// let value = json!("up");
    /// assert!(direction.cast(&value).is_err());
    /// ```
    pub fn literal<L>(literals: impl IntoIterator<Item = L>) -> Literal
    where
        L: Into<LiteralValue>,
    {
        Literal::new(literals)
    }

    /// Accepts an absent value or what `cast` accepts.
    pub fn optional<C: Cast>(cast: C) -> Optional<C> {
        Optional::new(cast)
    }

    /// Accepts `null` or what `cast` accepts.
    pub fn nullable<C: Cast>(cast: C) -> Nullable<C> {
        Nullable::new(cast)
    }

    /// Accepts arrays whose elements `cast` all accepts.
    pub fn array_of<C: Cast>(cast: C) -> ArrayOf<C> {
        ArrayOf::new(cast)
    }

    /// Accepts objects whose values `cast` all accepts.
    pub fn object_of<C: Cast>(cast: C) -> ObjectOf<C> {
        ObjectOf::new(cast)
    }

    /// Starts a record cast; declare fields with [`Structure::field`].
    pub fn structure() -> Structure {
        Structure::new()
    }

    /// Accepts arrays of exactly the given length, one cast per position.
    pub fn tuple(items: impl IntoIterator<Item = AnyCast>) -> Tuple {
        Tuple::new(items)
    }

    /// Lifts a checking function into a cast.
    pub fn custom<F>(check: F) -> CustomCast<F>
    where
        F: for<'v> Fn(Unknown<'v>) -> CastResult<Unknown<'v>> + Send + Sync,
    {
        CustomCast::new(check)
    }
}
