//! Cast registry for named casts and recursive shapes.
//!
//! This module provides the [`CastRegistry`] type that stores casts under
//! names and hands out [`RefCast`] references to them. References resolve at
//! check time, which is what lets a shape refer to itself (a tree whose
//! children are trees).

use parking_lot::RwLock;
use std::cell::Cell;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

use crate::cast::{AnyCast, Cast};
use crate::outcome::Rejection;
use crate::{CastResult, Unknown};

/// Type alias for the cast storage map.
type CastMap = RwLock<HashMap<String, AnyCast>>;

/// Default limit on nested reference resolution.
const DEFAULT_MAX_DEPTH: usize = 100;

thread_local! {
    // References currently being resolved on this thread.
    static REF_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Marks one level of reference resolution; the level is released on drop.
struct DepthGuard;

impl DepthGuard {
    fn enter(max_depth: usize) -> Option<Self> {
        REF_DEPTH.with(|depth| {
            let current = depth.get();
            if current >= max_depth {
                None
            } else {
                depth.set(current + 1);
                Some(DepthGuard)
            }
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        REF_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// A thread-safe registry of named casts.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for shared access:
/// - Multiple threads can look up and run casts concurrently
/// - Registration operations are serialized
///
/// The lock is only held while a cast is looked up, never while it runs.
///
/// # Recursion
///
/// At most `max_depth` references (100 by default) may be resolving at once
/// on a thread. A reference reached beyond that limit rejects instead of
/// recursing, so a reference that loops back to itself without descending
/// into the value (`A = A | string`) terminates.
///
/// # Example
///
/// ```rust
/// use shapecast::{Cast, CastRegistry, Shape};
/// use serde_json::json;
///
/// let registry = CastRegistry::new();
///
/// registry.register("Tree", Shape::structure()
///     .field("value", Shape::number())
///     .field("children", Shape::array_of(registry.reference("Tree")))
/// ).unwrap();
///
/// let value = json!({
///     "value": 1,
///     "children": [{"value": 2, "children": []}]
/// });
/// assert!(registry.cast("Tree", &value).unwrap().is_ok());
/// ```
pub struct CastRegistry {
    casts: Arc<CastMap>,
    max_depth: usize,
}

impl CastRegistry {
    /// Creates a new empty registry with the default max depth (100).
    pub fn new() -> Self {
        Self {
            casts: Arc::new(RwLock::new(HashMap::new())),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum number of nested references.
    ///
    /// References take the limit in effect when they are created, so set it
    /// before calling [`reference`](Self::reference).
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecast::CastRegistry;
    ///
    /// let registry = CastRegistry::new().with_max_depth(50);
    /// assert_eq!(registry.max_depth(), 50);
    /// ```
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Returns the maximum number of nested references.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Registers a cast under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    pub fn register<C>(&self, name: impl Into<String>, cast: C) -> Result<(), RegistryError>
    where
        C: Cast + 'static,
    {
        let name = name.into();
        let mut casts = self.casts.write();

        if casts.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        casts.insert(name, cast.boxed());
        Ok(())
    }

    /// Retrieves a cast by name.
    pub fn get(&self, name: &str) -> Option<AnyCast> {
        self.casts.read().get(name).cloned()
    }

    /// Returns true if a cast is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.casts.read().contains_key(name)
    }

    /// Returns a reference to the cast registered (now or later) under `name`.
    pub fn reference(&self, name: impl Into<String>) -> RefCast {
        RefCast {
            name: name.into(),
            casts: Arc::downgrade(&self.casts),
            max_depth: self.max_depth,
        }
    }

    /// Returns the names that registered casts refer to but that are not
    /// registered themselves, sorted and deduplicated.
    ///
    /// Call this once all casts are registered to catch typos in references.
    pub fn unresolved(&self) -> Vec<String> {
        let casts = self.casts.read();
        let mut refs = Vec::new();
        for cast in casts.values() {
            cast.collect_refs(&mut refs);
        }

        let mut unresolved: Vec<String> = refs
            .into_iter()
            .filter(|name| !casts.contains_key(name))
            .collect();
        unresolved.sort();
        unresolved.dedup();
        unresolved
    }

    /// Runs the cast registered under `name` on a value.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::CastNotFound` if the name doesn't exist.
    pub fn cast<'v>(
        &self,
        name: &str,
        value: impl Into<Unknown<'v>>,
    ) -> Result<CastResult<Unknown<'v>>, RegistryError> {
        let cast = self
            .get(name)
            .ok_or_else(|| RegistryError::CastNotFound(name.to_string()))?;
        Ok(cast.check(value.into()))
    }
}

impl Default for CastRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CastRegistry {
    fn clone(&self) -> Self {
        Self {
            casts: Arc::clone(&self.casts),
            max_depth: self.max_depth,
        }
    }
}

/// A cast that defers to a named cast in a registry.
///
/// The reference holds the registry weakly, so a registry that contains
/// references to itself is still freed. A reference whose name is not
/// registered, or whose registry is gone, rejects every value with the
/// name as the expected description. A reference nested deeper than its
/// registry's max depth rejects with `<name> (max reference depth <n>)`.
#[derive(Clone)]
pub struct RefCast {
    name: String,
    casts: Weak<CastMap>,
    max_depth: usize,
}

impl RefCast {
    /// Returns the name of the referenced cast.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self) -> Option<AnyCast> {
        let casts = self.casts.upgrade()?;
        let cast = casts.read().get(&self.name).cloned();
        cast
    }
}

impl Cast for RefCast {
    type Output<'v> = Unknown<'v>;

    fn check<'v>(&self, value: Unknown<'v>) -> CastResult<Unknown<'v>> {
        let cast = match self.resolve() {
            Some(cast) => cast,
            None => return Err(Rejection::mismatch(self.name.clone(), value)),
        };
        let _level = match DepthGuard::enter(self.max_depth) {
            Some(level) => level,
            None => {
                return Err(Rejection::mismatch(
                    format!("{} (max reference depth {})", self.name, self.max_depth),
                    value,
                ))
            }
        };
        cast.check(value)
    }

    fn check_unknown<'v>(&self, value: Unknown<'v>) -> CastResult<Unknown<'v>> {
        self.check(value)
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        refs.push(self.name.clone());
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a cast with a name that already exists.
    #[error("cast '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to run a cast with a name that doesn't exist.
    #[error("cast '{0}' not found")]
    CastNotFound(String),
}
