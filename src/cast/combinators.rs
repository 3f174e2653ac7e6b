//! Cast combinators for composing narrowing logic.
//!
//! This module provides combinators that build new casts out of existing ones:
//! - [`OneOf`]: the first alternative that accepts wins (unions)
//! - [`Literal`]: exact string, number or boolean constants
//! - [`Optional`] / [`Nullable`]: absent or `null` allowed alongside a cast
//! - [`ArrayOf`] / [`ObjectOf`]: homogeneous arrays and string-keyed maps
//!
//! # Example
//!
//! ```rust
//! use shapecast::{Cast, Shape};
//! use serde_json::json;
//!
//! // A number, or the string "unknown"
//! let angle = Shape::number().or(Shape::literal(["unknown"]));
//!
//! let value = json!("unknown");
//! assert!(angle.cast(&value).is_ok());
//!
//! let value = json!(false);
//! let rejection = angle.cast(&value).unwrap_err();
//! assert_eq!(rejection.expected, "number | unknown");
//! ```

use std::fmt::{self, Display};

use serde_json::{Map, Value};

use crate::error::CastError;
use crate::outcome::Rejection;
use crate::{CastResult, Unknown};

use super::basic::{ArrayCast, NullCast, ObjectCast, UndefinedCast};
use super::traits::{AnyCast, Cast};

/// Joins the expected descriptions of failed alternatives with `" | "`,
/// annotating those that failed below the root with their path.
fn union_rejection(failures: &[CastError], value: Unknown<'_>) -> Rejection<CastError> {
    let expected = failures
        .iter()
        .map(|failure| {
            if failure.path.is_root() {
                failure.expected.clone()
            } else {
                format!("{} at {}", failure.expected, failure.path)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    Rejection::mismatch(expected, value)
}

/// Accepts a value if any alternative does.
///
/// Alternatives are tried in order and the first acceptance is returned as
/// is. When every alternative rejects, the single resulting rejection lists
/// all of them, each annotated with the nested path it failed at (if any).
#[derive(Clone)]
pub struct OneOf {
    alternatives: Vec<AnyCast>,
}

impl OneOf {
    /// Creates a union over the given alternatives.
    pub fn new(alternatives: impl IntoIterator<Item = AnyCast>) -> Self {
        Self {
            alternatives: alternatives.into_iter().collect(),
        }
    }

    /// Adds another alternative, tried after the existing ones.
    pub fn or<C: Cast + 'static>(mut self, other: C) -> Self {
        self.alternatives.push(other.boxed());
        self
    }

    /// Returns the number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns true if there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl Cast for OneOf {
    type Output<'v> = Unknown<'v>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<Unknown<'v>> {
        let mut failures = Vec::with_capacity(self.alternatives.len());
        for alternative in &self.alternatives {
            match alternative.check(value) {
                Ok(accepted) => return Ok(accepted),
                Err(rejection) => failures.push(rejection.into_error()),
            }
        }
        Err(union_rejection(&failures, value))
    }

    fn check_unknown<'v>(&self, value: Unknown<'v>) -> CastResult<Unknown<'v>> {
        self.check(value)
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        for alternative in &self.alternatives {
            alternative.collect_refs(refs);
        }
    }
}

/// A constant that [`Literal`] compares against.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    /// Integers are stored as `f64` and compared numerically
    Number(f64),
    Boolean(bool),
}

impl LiteralValue {
    /// Returns true if `value` is strictly equal to this constant.
    ///
    /// Numbers compare by numeric value, so `1` and `1.0` are equal.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (LiteralValue::String(expected), Value::String(actual)) => expected == actual,
            (LiteralValue::Number(expected), Value::Number(actual)) => {
                actual.as_f64() == Some(*expected)
            }
            (LiteralValue::Boolean(expected), Value::Bool(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::String(s) => write!(f, "{}", s),
            LiteralValue::Number(n) => write_number(f, *n),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

// Renders a number the way JavaScript's `String(n)` does: `-0` prints as `0`
// and magnitudes outside [1e-6, 1e21) switch to exponent notation.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n == 0.0 {
        return write!(f, "0");
    }
    if n.is_nan() {
        return write!(f, "NaN");
    }
    if n.is_infinite() {
        return write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", n);
    }
    let exponent = format!("{:e}", n);
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, power)
        }
        _ => write!(f, "{}", exponent),
    }
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::String(s.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(s: String) -> Self {
        LiteralValue::String(s)
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        LiteralValue::Boolean(b)
    }
}

impl From<f64> for LiteralValue {
    fn from(n: f64) -> Self {
        LiteralValue::Number(n)
    }
}

impl From<i32> for LiteralValue {
    fn from(n: i32) -> Self {
        LiteralValue::Number(f64::from(n))
    }
}

impl From<u32> for LiteralValue {
    fn from(n: u32) -> Self {
        LiteralValue::Number(f64::from(n))
    }
}

impl From<i64> for LiteralValue {
    fn from(n: i64) -> Self {
        LiteralValue::Number(n as f64)
    }
}

impl From<u64> for LiteralValue {
    fn from(n: u64) -> Self {
        LiteralValue::Number(n as f64)
    }
}

/// Accepts a value strictly equal to one of a fixed set of constants.
///
/// The expected description is the constants joined with `" | "`, strings
/// rendered without quotes.
#[derive(Debug, Clone)]
pub struct Literal {
    literals: Vec<LiteralValue>,
    expected: String,
}

impl Literal {
    /// Creates a literal cast over the given constants.
    pub fn new<L>(literals: impl IntoIterator<Item = L>) -> Self
    where
        L: Into<LiteralValue>,
    {
        let literals: Vec<LiteralValue> = literals.into_iter().map(Into::into).collect();
        let expected = literals
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" | ");
        Self { literals, expected }
    }

    /// Returns the accepted constants.
    pub fn literals(&self) -> &[LiteralValue] {
        &self.literals
    }
}

impl Cast for Literal {
    type Output<'v> = &'v Value;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<&'v Value> {
        match value {
            Some(v) if self.literals.iter().any(|literal| literal.matches(v)) => Ok(v),
            _ => Err(Rejection::mismatch(self.expected.clone(), value)),
        }
    }
}

/// Accepts an absent value, or whatever the inner cast accepts.
///
/// Behaves as a union of `undefined` and the inner cast, with the absent
/// case narrowed to `None`.
#[derive(Debug, Clone)]
pub struct Optional<C> {
    inner: C,
}

impl<C: Cast> Optional<C> {
    /// Wraps a cast so that absent values are accepted too.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Cast> Cast for Optional<C> {
    type Output<'v> = Option<C::Output<'v>>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<Option<C::Output<'v>>> {
        let absent = match UndefinedCast.check(value) {
            Ok(()) => return Ok(None),
            Err(rejection) => rejection.into_error(),
        };
        match self.inner.check(value) {
            Ok(narrowed) => Ok(Some(narrowed)),
            Err(rejection) => Err(union_rejection(&[absent, rejection.into_error()], value)),
        }
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        self.inner.collect_refs(refs);
    }
}

/// Accepts `null`, or whatever the inner cast accepts.
///
/// Behaves as a union of `null` and the inner cast, with `null` narrowed
/// to `None`.
#[derive(Debug, Clone)]
pub struct Nullable<C> {
    inner: C,
}

impl<C: Cast> Nullable<C> {
    /// Wraps a cast so that `null` is accepted too.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Cast> Cast for Nullable<C> {
    type Output<'v> = Option<C::Output<'v>>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<Option<C::Output<'v>>> {
        let not_null = match NullCast.check(value) {
            Ok(()) => return Ok(None),
            Err(rejection) => rejection.into_error(),
        };
        match self.inner.check(value) {
            Ok(narrowed) => Ok(Some(narrowed)),
            Err(rejection) => Err(union_rejection(&[not_null, rejection.into_error()], value)),
        }
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        self.inner.collect_refs(refs);
    }
}

/// Accepts an array whose every element the item cast accepts.
///
/// Elements are checked in index order; the first rejected element is
/// reported with its index prepended to the path. The narrowed value is the
/// original array.
#[derive(Debug, Clone)]
pub struct ArrayOf<C> {
    item: C,
}

impl<C: Cast> ArrayOf<C> {
    /// Creates an array cast with the given item cast.
    pub fn new(item: C) -> Self {
        Self { item }
    }
}

impl<C: Cast> Cast for ArrayOf<C> {
    type Output<'v> = &'v Vec<Value>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<&'v Vec<Value>> {
        let items = ArrayCast.check(value)?;
        for (idx, item) in items.iter().enumerate() {
            self.item.check(Some(item)).map_err(|r| r.within(idx))?;
        }
        Ok(items)
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        self.item.collect_refs(refs);
    }
}

/// Accepts an object whose every value the item cast accepts.
///
/// Keys are visited in the input's own order; the first rejected value is
/// reported with its key prepended to the path. The narrowed value is the
/// original map.
#[derive(Debug, Clone)]
pub struct ObjectOf<C> {
    item: C,
}

impl<C: Cast> ObjectOf<C> {
    /// Creates a map cast with the given value cast.
    pub fn new(item: C) -> Self {
        Self { item }
    }
}

impl<C: Cast> Cast for ObjectOf<C> {
    type Output<'v> = &'v Map<String, Value>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<&'v Map<String, Value>> {
        let map = ObjectCast.check(value)?;
        for (key, item) in map {
            self.item
                .check(Some(item))
                .map_err(|r| r.within(key.as_str()))?;
        }
        Ok(map)
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        self.item.collect_refs(refs);
    }
}
