//! Error types for rejected casts.
//!
//! This module provides the single error taxonomy of the crate, a type
//! mismatch located by path, plus a collection type for accumulating many.

mod cast_error;
mod rejections;

pub use cast_error::CastError;
pub use rejections::Rejections;
