//! The type-mismatch payload carried by every rejected cast.
//!
//! This module provides [`CastError`] and the two ways of producing a
//! `Rejection<CastError>`: a fresh mismatch at a leaf, and re-wrapping a
//! child's rejection one segment further up the tree.

use std::fmt::{self, Display};

use serde_json::Value;

use crate::outcome::Rejection;
use crate::path::{CastPath, PathSegment};
use crate::Unknown;

/// A type mismatch located inside the input.
///
/// `CastError` records:
/// - **expected**: what type or shape was required
/// - **path**: where, from the root of the input, the mismatch was found
/// - **received**: the offending value itself, `None` when it was absent
///
/// # Example
///
/// ```rust
/// use shapecast::{PathSegment, Rejection};
/// use serde_json::json;
///
/// let value = json!(3);
/// let rejection = Rejection::mismatch("string", Some(&value))
///     .within(PathSegment::index(2))
///     .within("tags");
///
/// assert_eq!(rejection.path.to_string(), "tags.2");
/// assert_eq!(rejection.message, "Value at 'tags.2' is not of type 'string'");
/// assert_eq!(rejection.received, Some(json!(3)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CastError {
    /// Description of the required type or shape.
    pub expected: String,
    /// Location of the mismatch, root first.
    pub path: CastPath,
    /// The value that failed, unmodified.
    pub received: Option<Value>,
}

impl CastError {
    /// Creates an error at the root path.
    pub fn new(expected: impl Into<String>, received: Option<Value>) -> Self {
        Self {
            expected: expected.into(),
            path: CastPath::root(),
            received,
        }
    }

    /// Wraps this error in a rejection whose message is rendered from it.
    pub fn into_rejection(self) -> Rejection<CastError> {
        Rejection::new(self.to_string(), self)
    }
}

impl Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "Value is not of type '{}'", self.expected)
        } else {
            write!(
                f,
                "Value at '{}' is not of type '{}'",
                self.path, self.expected
            )
        }
    }
}

impl std::error::Error for CastError {}

impl Rejection<CastError> {
    /// Creates a leaf rejection: `value` is not what `expected` describes.
    pub fn mismatch(expected: impl Into<String>, value: Unknown<'_>) -> Self {
        CastError::new(expected, value.cloned()).into_rejection()
    }

    /// Re-wraps a child's rejection one level up.
    ///
    /// Returns a new rejection whose path has `segment` in front and whose
    /// message is regenerated. `expected` and `received` are carried over.
    pub fn within(self, segment: impl Into<PathSegment>) -> Self {
        let error = self.error;
        CastError {
            path: error.path.prepend(segment),
            expected: error.expected,
            received: error.received,
        }
        .into_rejection()
    }
}

// Casts are shared across threads, so their rejections must be too.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<CastError>();
    assert_sync::<CastError>();
    assert_send::<Rejection<CastError>>();
    assert_sync::<Rejection<CastError>>();
};
