//! Paths locating a mismatch inside a nested value.
//!
//! This module provides [`CastPath`] and [`PathSegment`]. A path starts out
//! empty at the leaf where a mismatch is detected and grows towards the root
//! as the rejection travels back up through each enclosing structure, so a
//! fully propagated path reads root-to-leaf.

use std::fmt::{self, Display};

/// A single step into a nested value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key or record field (e.g., `header`)
    Field(String),
    /// An array or tuple position (e.g., `2`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// An ordered sequence of segments from the root of a value to a failure.
///
/// Field names and indices render uniformly, joined by dots.
///
/// # Example
///
/// ```rust
/// use shapecast::{CastPath, PathSegment};
///
/// let path = CastPath::root()
///     .prepend(PathSegment::index(2))
///     .prepend("tags")
///     .prepend("header");
///
/// assert_eq!(path.to_string(), "header.tags.2");
/// assert_eq!(path.to_pointer(), "/header/tags/2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CastPath {
    segments: Vec<PathSegment>,
}

impl CastPath {
    /// Creates an empty path representing the value itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `segment` placed in front of the existing ones.
    ///
    /// This is how enclosing casts record where they descended. The original
    /// path is left untouched.
    pub fn prepend(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(segment.into());
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the outermost segment, or None if this is root.
    pub fn first(&self) -> Option<&PathSegment> {
        self.segments.first()
    }

    /// Returns the innermost segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Returns the path without its innermost segment, or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Renders this path as an RFC 6901 JSON pointer.
    ///
    /// The result can be handed to [`serde_json::Value::pointer`] to fetch
    /// the offending value out of the original input.
    pub fn to_pointer(&self) -> String {
        let mut pointer = String::new();
        for segment in &self.segments {
            pointer.push('/');
            match segment {
                PathSegment::Field(name) => {
                    pointer.push_str(&name.replace('~', "~0").replace('/', "~1"))
                }
                PathSegment::Index(idx) => pointer.push_str(&idx.to_string()),
            }
        }
        pointer
    }
}

impl FromIterator<PathSegment> for CastPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl Display for CastPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = CastPath::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
        assert_eq!(path.to_pointer(), "");
    }

    #[test]
    fn test_index_renders_like_field() {
        let path = CastPath::root().push_field("users").push_index(0);
        assert_eq!(path.to_string(), "users.0");
    }

    #[test]
    fn test_prepend_builds_root_to_leaf() {
        let leaf = CastPath::root();
        let path = leaf.prepend(PathSegment::index(1)).prepend("items").prepend("body");

        assert_eq!(path.to_string(), "body.items.1");
        assert_eq!(path.first(), Some(&PathSegment::field("body")));
        assert_eq!(path.last(), Some(&PathSegment::Index(1)));
    }

    #[test]
    fn test_prepend_leaves_original_untouched() {
        let base = CastPath::root().prepend("tags");
        let a = base.prepend("header");
        let b = base.prepend("footer");

        assert_eq!(base.to_string(), "tags");
        assert_eq!(a.to_string(), "header.tags");
        assert_eq!(b.to_string(), "footer.tags");
    }

    #[test]
    fn test_parent_path() {
        let path = CastPath::root()
            .push_field("users")
            .push_index(0)
            .push_field("email");

        let parent = path.parent().unwrap();
        assert_eq!(parent.to_string(), "users.0");

        let root = parent.parent().unwrap().parent().unwrap();
        assert!(root.is_root());
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_pointer_escapes_reserved_characters() {
        let path = CastPath::root().push_field("a/b").push_field("m~n").push_index(3);
        assert_eq!(path.to_pointer(), "/a~1b/m~0n/3");
    }

    #[test]
    fn test_segment_conversions() {
        assert_eq!(PathSegment::from("name"), PathSegment::Field("name".to_string()));
        assert_eq!(
            PathSegment::from(String::from("name")),
            PathSegment::field("name")
        );
        assert_eq!(PathSegment::from(4usize), PathSegment::index(4));
    }

    #[test]
    fn test_collect_from_segments() {
        let path: CastPath = vec![PathSegment::field("a"), PathSegment::index(1)]
            .into_iter()
            .collect();
        assert_eq!(path, CastPath::root().push_field("a").push_index(1));
    }
}
