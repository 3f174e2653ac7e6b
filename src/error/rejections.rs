//! Accumulated rejections.
//!
//! Casts stop at the first mismatch, but callers validating many independent
//! values often want all of the failures at once. [`Rejections`] is the
//! non-empty collection used for that, combined through stillwater's
//! `Semigroup` so it slots into `Validation`.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::error::CastError;
use crate::outcome::Rejection;
use crate::path::CastPath;

/// A non-empty collection of rejections.
///
/// # Example
///
/// ```rust
/// use shapecast::{Cast, Rejections, Shape};
/// use serde_json::json;
/// use stillwater::prelude::*;
///
/// let a = json!(1);
/// let b = json!(true);
/// let first = Rejections::single(Shape::string().cast(&a).unwrap_err());
/// let second = Rejections::single(Shape::string().cast(&b).unwrap_err());
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rejections<E = CastError>(NonEmptyVec<Rejection<E>>);

impl<E> Rejections<E> {
    /// Creates a collection holding a single rejection.
    pub fn single(rejection: Rejection<E>) -> Self {
        Self(NonEmptyVec::singleton(rejection))
    }

    /// Creates a collection from a `NonEmptyVec` of rejections.
    pub fn from_non_empty(rejections: NonEmptyVec<Rejection<E>>) -> Self {
        Self(rejections)
    }

    /// Returns the number of rejections.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection holds at least one rejection.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the rejections in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Rejection<E>> {
        self.0.iter()
    }

    /// Returns the first rejection.
    pub fn first(&self) -> &Rejection<E> {
        self.0.head()
    }

    /// Converts this collection into a `Vec`.
    pub fn into_vec(self) -> Vec<Rejection<E>> {
        self.0.into_vec()
    }

    /// Returns a reference to the underlying `NonEmptyVec`.
    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<Rejection<E>> {
        &self.0
    }

    /// Creates a collection from a `Vec`, or `None` if the vec is empty.
    pub fn from_vec(rejections: Vec<Rejection<E>>) -> Option<Self> {
        NonEmptyVec::from_vec(rejections).map(Self)
    }
}

impl Rejections<CastError> {
    /// Returns all rejections located at `path`.
    pub fn at_path(&self, path: &CastPath) -> Vec<&Rejection<CastError>> {
        self.0.iter().filter(|r| &r.path == path).collect()
    }
}

impl<E: Clone> Semigroup for Rejections<E> {
    fn combine(self, other: Self) -> Self {
        Rejections(self.0.combine(other.0))
    }
}

impl<E> Display for Rejections<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rejected with {} error(s):", self.len())?;
        for (i, rejection) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, rejection)?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug> std::error::Error for Rejections<E> {}

impl<E> IntoIterator for Rejections<E> {
    type Item = Rejection<E>;
    type IntoIter = std::vec::IntoIter<Rejection<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}
