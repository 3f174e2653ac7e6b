//! Boolean type guards derived from casts.
//!
//! A [`Guard`] answers "does this value have the shape?" without any
//! rejection detail. Guards are always obtained from a cast through
//! [`narrow_from`], so the boolean and the detailed forms of a check can
//! never disagree.
//!
//! # Example
//!
//! ```rust
//! use shapecast::{narrow_from, Shape};
//! use serde_json::json;
//!
//! let is_tagged = narrow_from(Shape::structure().field("tags", Shape::array_of(Shape::string())));
//!
//! assert!(is_tagged.test(&json!({"tags": ["a"]})));
//! assert!(!is_tagged.test(&json!({"tags": [1]})));
//! ```

use crate::cast::{
    ArrayCast, BooleanCast, Cast, NullCast, NumberCast, ObjectCast, StringCast, UndefinedCast,
    UnknownCast,
};
use crate::Unknown;

/// A boolean view of a cast.
#[derive(Debug, Clone)]
pub struct Guard<C> {
    cast: C,
}

/// Derives a boolean guard from a cast, discarding rejection detail.
pub fn narrow_from<C: Cast>(cast: C) -> Guard<C> {
    Guard { cast }
}

impl<C: Cast> Guard<C> {
    /// Returns true if the cast accepts the value.
    pub fn test<'v>(&self, value: impl Into<Unknown<'v>>) -> bool {
        self.cast.accepts(value)
    }

    /// Returns the narrowed value if the cast accepts it.
    pub fn narrow<'v>(&self, value: impl Into<Unknown<'v>>) -> Option<C::Output<'v>> {
        self.cast.check(value.into()).ok()
    }

    /// Returns the underlying cast.
    pub fn into_inner(self) -> C {
        self.cast
    }
}

/// Always true.
pub fn is_unknown<'v>(value: impl Into<Unknown<'v>>) -> bool {
    narrow_from(UnknownCast).test(value)
}

/// Returns true for `null`.
pub fn is_null<'v>(value: impl Into<Unknown<'v>>) -> bool {
    narrow_from(NullCast).test(value)
}

/// Returns true for an absent value.
pub fn is_undefined<'v>(value: impl Into<Unknown<'v>>) -> bool {
    narrow_from(UndefinedCast).test(value)
}

/// Returns true for strings.
pub fn is_string<'v>(value: impl Into<Unknown<'v>>) -> bool {
    narrow_from(StringCast).test(value)
}

/// Returns true for numbers.
pub fn is_number<'v>(value: impl Into<Unknown<'v>>) -> bool {
    narrow_from(NumberCast).test(value)
}

/// Returns true for booleans.
pub fn is_boolean<'v>(value: impl Into<Unknown<'v>>) -> bool {
    narrow_from(BooleanCast).test(value)
}

/// Returns true for objects (not arrays, not `null`).
pub fn is_object<'v>(value: impl Into<Unknown<'v>>) -> bool {
    narrow_from(ObjectCast).test(value)
}

/// Returns true for arrays.
pub fn is_array<'v>(value: impl Into<Unknown<'v>>) -> bool {
    narrow_from(ArrayCast).test(value)
}
