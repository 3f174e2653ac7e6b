//! Fixed-shape casts: records and tuples.
//!
//! This module provides [`Structure`] for objects with a declared set of
//! typed fields and [`Tuple`] for fixed-length arrays with a cast per
//! position.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::outcome::Rejection;
use crate::{CastResult, Unknown};

use super::basic::{ArrayCast, ObjectCast};
use super::combinators::Optional;
use super::traits::{AnyCast, Cast};

/// A cast for objects with declared fields.
///
/// Fields are checked in declaration order against the input's value for
/// that key; a missing key is passed to the field's cast as an absent value,
/// so only optional fields accept it. The first rejected field is reported
/// with its name prepended to the path.
///
/// Keys in the input that are not declared are ignored: the contract is "at
/// least these fields, correctly typed". The narrowed value is the original
/// map, extra keys included.
///
/// # Example
///
/// ```rust
/// use shapecast::{Cast, Shape};
/// use serde_json::json;
///
/// let user = Shape::structure()
///     .field("name", Shape::string())
///     .optional("nickname", Shape::string());
///
/// let value = json!({"name": "Alice", "role": "admin"});
/// assert!(user.cast(&value).is_ok());
///
/// let value = json!({"nickname": "Al"});
/// let rejection = user.cast(&value).unwrap_err();
/// assert_eq!(rejection.message, "Value at 'name' is not of type 'string'");
/// ```
#[derive(Clone, Default)]
pub struct Structure {
    fields: IndexMap<String, AnyCast>,
}

impl Structure {
    /// Creates a structure with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field.
    ///
    /// Declaring the same name twice replaces the earlier cast but keeps its
    /// position.
    pub fn field<C>(mut self, name: impl Into<String>, cast: C) -> Self
    where
        C: Cast + 'static,
    {
        self.fields.insert(name.into(), cast.boxed());
        self
    }

    /// Declares a field that may be absent.
    ///
    /// Equivalent to `.field(name, Shape::optional(cast))`.
    pub fn optional<C>(self, name: impl Into<String>, cast: C) -> Self
    where
        C: Cast + 'static,
    {
        self.field(name, Optional::new(cast))
    }

    /// Returns the declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl Cast for Structure {
    type Output<'v> = &'v Map<String, Value>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<&'v Map<String, Value>> {
        let map = ObjectCast.check(value)?;
        for (name, cast) in &self.fields {
            cast.check(map.get(name)).map_err(|r| r.within(name.as_str()))?;
        }
        Ok(map)
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        for cast in self.fields.values() {
            cast.collect_refs(refs);
        }
    }
}

/// A cast for fixed-length arrays with one cast per position.
///
/// The array must have exactly as many elements as there are positions.
/// Positions are then checked in order and the first rejected one is
/// reported with its index prepended to the path.
///
/// # Example
///
/// ```rust
/// use shapecast::{Cast, Shape};
/// use serde_json::json;
///
/// let code = Shape::tuple([Shape::number().boxed(), Shape::string().boxed()]);
///
/// let value = json!([200, "success"]);
/// assert!(code.cast(&value).is_ok());
///
/// let value = json!([200, "success", 1]);
/// let rejection = code.cast(&value).unwrap_err();
/// assert_eq!(rejection.expected, "tuple of length 2");
/// ```
#[derive(Clone)]
pub struct Tuple {
    items: Vec<AnyCast>,
}

impl Tuple {
    /// Creates a tuple cast with one cast per position.
    pub fn new(items: impl IntoIterator<Item = AnyCast>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Returns the number of positions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true for the zero-length tuple.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Cast for Tuple {
    type Output<'v> = &'v Vec<Value>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<&'v Vec<Value>> {
        let elements = ArrayCast.check(value)?;
        if elements.len() != self.items.len() {
            return Err(Rejection::mismatch(
                format!("tuple of length {}", self.items.len()),
                value,
            ));
        }
        for (idx, (cast, element)) in self.items.iter().zip(elements).enumerate() {
            cast.check(Some(element)).map_err(|r| r.within(idx))?;
        }
        Ok(elements)
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        for cast in &self.items {
            cast.collect_refs(refs);
        }
    }
}
