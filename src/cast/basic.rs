//! Casts for the basic JSON types.
//!
//! Each cast accepts exactly one kind of value and narrows it to a borrowed
//! view. On rejection the expected description is the type's canonical name
//! (`"null"`, `"string"`, ...) and the path is empty.

use serde_json::{Map, Number, Value};

use crate::outcome::Rejection;
use crate::{CastResult, Unknown};

use super::traits::Cast;

/// Accepts anything, including an absent value.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownCast;

impl Cast for UnknownCast {
    type Output<'v> = Unknown<'v>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<Unknown<'v>> {
        Ok(value)
    }
}

/// Accepts `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCast;

impl Cast for NullCast {
    type Output<'v> = ();

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<()> {
        match value {
            Some(Value::Null) => Ok(()),
            _ => Err(Rejection::mismatch("null", value)),
        }
    }
}

/// Accepts only an absent value (a missing key or element).
#[derive(Debug, Clone, Copy, Default)]
pub struct UndefinedCast;

impl Cast for UndefinedCast {
    type Output<'v> = ();

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<()> {
        match value {
            None => Ok(()),
            Some(_) => Err(Rejection::mismatch("undefined", value)),
        }
    }
}

/// Accepts strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCast;

impl Cast for StringCast {
    type Output<'v> = &'v str;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<&'v str> {
        match value {
            Some(Value::String(s)) => Ok(s.as_str()),
            _ => Err(Rejection::mismatch("string", value)),
        }
    }
}

/// Accepts numbers, integer or floating point alike.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberCast;

impl Cast for NumberCast {
    type Output<'v> = &'v Number;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<&'v Number> {
        match value {
            Some(Value::Number(n)) => Ok(n),
            _ => Err(Rejection::mismatch("number", value)),
        }
    }
}

/// Accepts `true` and `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanCast;

impl Cast for BooleanCast {
    type Output<'v> = bool;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<bool> {
        match value {
            Some(Value::Bool(b)) => Ok(*b),
            _ => Err(Rejection::mismatch("boolean", value)),
        }
    }
}

/// Accepts key-value objects. Arrays and `null` are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectCast;

impl Cast for ObjectCast {
    type Output<'v> = &'v Map<String, Value>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<&'v Map<String, Value>> {
        match value {
            Some(Value::Object(map)) => Ok(map),
            _ => Err(Rejection::mismatch("object", value)),
        }
    }
}

/// Accepts arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayCast;

impl Cast for ArrayCast {
    type Output<'v> = &'v Vec<Value>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<&'v Vec<Value>> {
        match value {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(Rejection::mismatch("array", value)),
        }
    }
}
