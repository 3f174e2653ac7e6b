//! The accept/reject container every cast returns.
//!
//! An [`Outcome`] is a plain [`Result`]: `Ok` carries the narrowed value and
//! `Err` carries a [`Rejection`], which pairs a human-readable message with a
//! domain payload `E`. Chaining is done with the ordinary `Result` tools
//! (`and_then`, `or_else`, `map_err` and `?`), so a pipeline of casts reads
//! like any other fallible Rust code.
//!
//! The batch helpers in this module ([`all_of`], [`collect`], [`collect_with`],
//! [`reduce`], [`filter_accepted`], [`collect_all`]) cover the common ways of
//! running many outcomes together.
//!
//! # Example
//!
//! ```rust
//! use shapecast::outcome::{accept, all_of, reject_message, OutcomeExt};
//!
//! let halves = all_of(vec![2, 4, 6], |n, _| {
//!     if n % 2 == 0 {
//!         accept(n / 2)
//!     } else {
//!         reject_message(format!("{} is odd", n))
//!     }
//! });
//! assert_eq!(halves.unwrap_accepted(), vec![1, 2, 3]);
//! ```

use std::fmt::{self, Debug, Display};
use std::ops::Deref;

use stillwater::Validation;

use crate::error::Rejections;

/// Result of running a cast (or any other check) over a value.
pub type Outcome<T, E = ()> = Result<T, Rejection<E>>;

/// The rejected arm of an [`Outcome`].
///
/// `message` is always present; the remaining detail lives in `error`.
/// `Rejection<E>` dereferences to `E`, so the payload's fields can be read
/// directly off the rejection (`rejection.path`, `rejection.expected`).
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection<E = ()> {
    /// Human-readable description of the failure.
    pub message: String,
    /// Domain-specific detail.
    pub error: E,
}

impl<E> Rejection<E> {
    /// Creates a rejection from a message and a payload.
    pub fn new(message: impl Into<String>, error: E) -> Self {
        Self {
            message: message.into(),
            error,
        }
    }

    /// Consumes the rejection and returns its payload.
    pub fn into_error(self) -> E {
        self.error
    }

    /// Transforms the payload, keeping the message.
    pub fn map_error<F, G>(self, f: F) -> Rejection<G>
    where
        F: FnOnce(E) -> G,
    {
        Rejection {
            message: self.message,
            error: f(self.error),
        }
    }
}

impl<E> Deref for Rejection<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.error
    }
}

impl<E> Display for Rejection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl<E: Debug> std::error::Error for Rejection<E> {}

/// Wraps `value` as an accepted outcome.
pub fn accept<T, E>(value: T) -> Outcome<T, E> {
    Ok(value)
}

/// Builds a rejected outcome from a message and a payload.
pub fn reject<T, E>(message: impl Into<String>, error: E) -> Outcome<T, E> {
    Err(Rejection::new(message, error))
}

/// Builds a rejected outcome that carries only a message.
pub fn reject_message<T>(message: impl Into<String>) -> Outcome<T> {
    Err(Rejection::new(message, ()))
}

/// Inspection and conversion helpers for [`Outcome`].
pub trait OutcomeExt<T, E> {
    /// Returns true if the outcome is accepted.
    fn is_accepted(&self) -> bool;

    /// Returns true if the outcome is rejected. Always `!is_accepted()`.
    fn is_rejected(&self) -> bool;

    /// Returns the accepted value.
    ///
    /// Meant for call sites that already know the outcome is accepted, such
    /// as tests. Casts never call this on their children.
    ///
    /// # Panics
    ///
    /// Panics with `Unexpected error: <message>` if the outcome is rejected.
    fn unwrap_accepted(self) -> T;

    /// Converts the outcome into a stillwater `Validation`, so it can join
    /// error-accumulating code.
    fn into_validation(self) -> Validation<T, Rejections<E>>;
}

impl<T, E> OutcomeExt<T, E> for Outcome<T, E> {
    fn is_accepted(&self) -> bool {
        self.is_ok()
    }

    fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    #[track_caller]
    fn unwrap_accepted(self) -> T {
        match self {
            Ok(value) => value,
            Err(rejection) => panic!("Unexpected error: {}", rejection.message),
        }
    }

    fn into_validation(self) -> Validation<T, Rejections<E>> {
        match self {
            Ok(value) => Validation::Success(value),
            Err(rejection) => Validation::Failure(Rejections::single(rejection)),
        }
    }
}

/// Applies `f` to every item in order, stopping at the first rejection.
///
/// `f` receives each item together with its index. When every call is
/// accepted the unwrapped values are returned in input order.
pub fn all_of<I, U, E, F>(items: I, mut f: F) -> Outcome<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Outcome<U, E>,
{
    let mut output = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        output.push(f(item, index)?);
    }
    Ok(output)
}

/// Gathers a sequence of outcomes, keeping the first rejection if any.
pub fn collect<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    collect_with(outcomes, |first, _| first)
}

/// Gathers a sequence of outcomes, folding every rejection with `merge`.
///
/// All outcomes are consumed even after a rejection is seen, so `merge`
/// observes each rejection in order.
pub fn collect_with<T, E, I, M>(outcomes: I, mut merge: M) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    M: FnMut(Rejection<E>, Rejection<E>) -> Rejection<E>,
{
    let mut values = Vec::new();
    let mut rejected: Option<Rejection<E>> = None;

    for outcome in outcomes {
        match outcome {
            Ok(value) => values.push(value),
            Err(rejection) => {
                rejected = Some(match rejected {
                    Some(acc) => merge(acc, rejection),
                    None => rejection,
                });
            }
        }
    }

    match rejected {
        Some(rejection) => Err(rejection),
        None => Ok(values),
    }
}

/// Folds accepted values into an accumulator, or rejections into one rejection.
///
/// If any outcome is rejected the accepted values are discarded and the
/// rejections are merged left to right.
pub fn reduce<T, U, E, I, F, M>(
    outcomes: I,
    initial: U,
    mut fold: F,
    merge: M,
) -> Outcome<U, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    F: FnMut(U, T) -> U,
    M: FnMut(Rejection<E>, Rejection<E>) -> Rejection<E>,
{
    let values = collect_with(outcomes, merge)?;
    let mut accum = initial;
    for value in values {
        accum = fold(accum, value);
    }
    Ok(accum)
}

/// Maps every item, keeping accepted results and skipping rejected ones.
///
/// Each rejection is handed to `on_rejected` before being dropped.
pub fn filter_accepted<I, U, E, F, R>(items: I, mut f: F, mut on_rejected: R) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Outcome<U, E>,
    R: FnMut(Rejection<E>),
{
    let mut output = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match f(item, index) {
            Ok(value) => output.push(value),
            Err(rejection) => on_rejected(rejection),
        }
    }
    output
}

/// Gathers a sequence of outcomes, keeping every rejection.
///
/// Accepted values are returned in order when nothing was rejected;
/// otherwise all rejections are returned together.
pub fn collect_all<T, E, I>(outcomes: I) -> Validation<Vec<T>, Rejections<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = Vec::new();
    let mut rejections = Vec::new();

    for outcome in outcomes {
        match outcome {
            Ok(value) => values.push(value),
            Err(rejection) => rejections.push(rejection),
        }
    }

    match Rejections::from_vec(rejections) {
        Some(rejections) => Validation::Failure(rejections),
        None => Validation::Success(values),
    }
}
