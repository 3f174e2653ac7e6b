//! Traits for cast polymorphism.
//!
//! This module provides the [`Cast`] trait implemented by every basic cast and
//! combinator, and the type-erased [`AnyCast`] handle used wherever casts with
//! different outputs have to sit side by side (union alternatives, record
//! fields, tuple positions).

use std::sync::Arc;

use super::combinators::OneOf;
use crate::{CastResult, Unknown};

/// A check that narrows an untyped value to a more specific type.
///
/// `check` inspects the value and either returns the narrowed view of it,
/// borrowed from the input, or a rejection locating the first mismatch.
/// Implementations hold no mutable state, so calling a cast twice on the
/// same input yields the same outcome.
///
/// The `Send + Sync` bounds allow casts to be shared across threads and
/// stored behind [`AnyCast`].
///
/// # Example
///
/// ```rust
/// use shapecast::{Cast, Shape};
/// use serde_json::json;
///
/// let value = json!("hello");
/// let narrowed: &str = Shape::string().cast(&value).unwrap();
/// assert_eq!(narrowed, "hello");
///
/// // Absent values are checked by passing `None`
/// assert!(Shape::optional(Shape::string()).check(None).is_ok());
/// ```
pub trait Cast: Send + Sync {
    /// The narrowed view produced on acceptance.
    type Output<'v>;

    /// Checks a possibly absent value.
    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<Self::Output<'v>>;

    /// Checks a value, accepting either `&Value` or `Option<&Value>`.
    fn cast<'v>(&self, value: impl Into<Unknown<'v>>) -> CastResult<Self::Output<'v>> {
        self.check(value.into())
    }

    /// Returns true if the value is accepted, discarding any rejection detail.
    fn accepts<'v>(&self, value: impl Into<Unknown<'v>>) -> bool {
        self.check(value.into()).is_ok()
    }

    /// Checks a value, returning an untyped view of what was accepted.
    ///
    /// Casts that narrow to an `Unknown` pass their accepted value through
    /// unchanged; every other cast hands back the input it accepted. This is
    /// what [`AnyCast`] runs, so erasing a cast never replaces its result.
    fn check_unknown<'v>(&self, value: Unknown<'v>) -> CastResult<Unknown<'v>> {
        self.check(value).map(|_| value)
    }

    /// Collects the names of registry references reachable from this cast.
    fn collect_refs(&self, _refs: &mut Vec<String>) {}

    /// Erases the output type so the cast can be stored with others.
    fn boxed(self) -> AnyCast
    where
        Self: Sized + 'static,
    {
        AnyCast::new(self)
    }

    /// Accepts what either `self` or `other` accepts, trying `self` first.
    fn or<C>(self, other: C) -> OneOf
    where
        Self: Sized + 'static,
        C: Cast + 'static,
    {
        OneOf::new([self.boxed(), other.boxed()])
    }
}

/// An object-safe view of [`Cast`].
///
/// The narrowed output is replaced by [`Cast::check_unknown`]'s untyped view
/// of it. Any `Cast` is a `DynCast` through the blanket implementation.
pub trait DynCast: Send + Sync {
    /// Checks a value, returning the untyped accepted value.
    fn check_dyn<'v>(&self, value: Unknown<'v>) -> CastResult<Unknown<'v>>;

    /// Collects the names of registry references reachable from this cast.
    fn collect_refs_dyn(&self, refs: &mut Vec<String>);
}

impl<C: Cast> DynCast for C {
    fn check_dyn<'v>(&self, value: Unknown<'v>) -> CastResult<Unknown<'v>> {
        self.check_unknown(value)
    }

    fn collect_refs_dyn(&self, refs: &mut Vec<String>) {
        self.collect_refs(refs)
    }
}

/// A shared, type-erased cast.
///
/// Cloning is cheap; clones share the same underlying cast.
#[derive(Clone)]
pub struct AnyCast(Arc<dyn DynCast>);

impl AnyCast {
    /// Wraps a cast.
    pub fn new<C: Cast + 'static>(cast: C) -> Self {
        Self(Arc::new(cast))
    }
}

impl Cast for AnyCast {
    type Output<'v> = Unknown<'v>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<Unknown<'v>> {
        self.0.check_dyn(value)
    }

    fn check_unknown<'v>(&self, value: Unknown<'v>) -> CastResult<Unknown<'v>> {
        self.check(value)
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        self.0.collect_refs_dyn(refs)
    }

    fn boxed(self) -> AnyCast {
        self
    }
}
