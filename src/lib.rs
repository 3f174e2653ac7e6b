//! # Shapecast
//!
//! Composable casts that check whether an untyped JSON value has a declared
//! shape, narrowing it to a borrowed typed view when it does and reporting the
//! first mismatch, with its path, when it doesn't.
//!
//! ## Overview
//!
//! A cast is a pure function from a possibly absent `serde_json::Value` to an
//! [`Outcome`]. Basic casts check a single JSON type; combinators build unions,
//! literals, optional and nullable values, homogeneous arrays and maps,
//! records and tuples out of other casts. When a nested check fails, every
//! enclosing cast prepends its own path segment, so the final rejection names
//! the exact location of the mismatch.
//!
//! ## Core Types
//!
//! - [`Cast`]: The trait every cast implements
//! - [`Shape`]: Entry point for building casts
//! - [`Outcome`] / [`Rejection`]: The accept/reject result of a cast
//! - [`CastError`]: What was expected, where, and what was received
//! - [`CastPath`]: Location of a mismatch (e.g., `header.tags.2`)
//! - [`Guard`]: A boolean view of a cast, via [`narrow_from`]
//! - [`CastRegistry`]: Named casts, enabling recursive shapes
//!
//! ## Example
//!
//! ```rust
//! use shapecast::{Cast, Shape};
//! use serde_json::json;
//!
//! let response = Shape::structure()
//!     .field("header", Shape::structure()
//!         .field("success", Shape::boolean())
//!         .field("tags", Shape::array_of(Shape::string())))
//!     .field("comment", Shape::optional(Shape::string()));
//!
//! let value = json!({"header": {"success": true, "tags": ["a", "b"]}});
//! assert!(response.cast(&value).is_ok());
//!
//! let value = json!({"header": {"success": true, "tags": ["a", "b", 3]}});
//! let rejection = response.cast(&value).unwrap_err();
//! assert_eq!(rejection.message, "Value at 'header.tags.2' is not of type 'string'");
//! assert_eq!(rejection.received, Some(json!(3)));
//! ```

pub mod cast;
pub mod error;
pub mod guard;
pub mod outcome;
pub mod path;
pub mod registry;

pub use cast::{
    AnyCast, ArrayCast, ArrayOf, BooleanCast, Cast, CustomCast, DynCast, Literal, LiteralValue,
    NullCast, Nullable, NumberCast, ObjectCast, ObjectOf, OneOf, Optional, Shape, StringCast,
    Structure, Tuple, UndefinedCast, UnknownCast,
};
pub use error::{CastError, Rejections};
pub use guard::{
    is_array, is_boolean, is_null, is_number, is_object, is_string, is_undefined, is_unknown,
    narrow_from, Guard,
};
pub use outcome::{accept, reject, reject_message, Outcome, OutcomeExt, Rejection};
pub use path::{CastPath, PathSegment};
pub use registry::{CastRegistry, RefCast, RegistryError};

/// An untyped input value; `None` stands for an absent one (a missing key or
/// element).
pub type Unknown<'v> = Option<&'v serde_json::Value>;

/// Type alias for the outcome of a cast.
pub type CastResult<T> = Outcome<T, CastError>;
