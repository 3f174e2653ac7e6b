//! Hand-written casts.
//!
//! [`CustomCast`] lifts a plain function into a [`Cast`], so checks the
//! combinators cannot express (such as "no keys besides these") compose with
//! the rest of the algebra.

use crate::{CastResult, Unknown};

use super::traits::Cast;

/// A cast backed by a function.
///
/// The function receives the possibly absent value and returns it on
/// acceptance. Inside, other casts are run with `?`, and rejections from
/// nested values are re-wrapped with [`Rejection::within`] so their path
/// stays accurate.
///
/// [`Rejection::within`]: crate::Rejection::within
///
/// # Example
///
/// ```rust
/// use shapecast::{Cast, Rejection, Shape};
/// use serde_json::json;
///
/// // `{ a: string }` and nothing else
/// let exact = Shape::custom(|value| {
///     let map = Shape::object().check(value)?;
///     if map.len() != 1 {
///         return Err(Rejection::mismatch("{ a: string } without extra keys", value));
///     }
///     Shape::string().check(map.get("a")).map_err(|r| r.within("a"))?;
///     Ok(value)
/// });
///
/// let value = json!({"a": "foo"});
/// assert!(exact.cast(&value).is_ok());
///
/// let value = json!({"a": "foo", "x": "bar"});
/// assert!(exact.cast(&value).is_err());
/// ```
#[derive(Clone)]
pub struct CustomCast<F> {
    check: F,
}

impl<F> CustomCast<F>
where
    F: for<'v> Fn(Unknown<'v>) -> CastResult<Unknown<'v>> + Send + Sync,
{
    /// Wraps a checking function.
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<F> Cast for CustomCast<F>
where
    F: for<'v> Fn(Unknown<'v>) -> CastResult<Unknown<'v>> + Send + Sync,
{
    type Output<'v> = Unknown<'v>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<Unknown<'v>> {
        (self.check)(value)
    }

    fn check_unknown<'v>(&self, value: Unknown<'v>) -> CastResult<Unknown<'v>> {
        self.check(value)
    }
}
