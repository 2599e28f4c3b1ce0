//! Error types for path navigation.

use std::fmt;

/// Ways a path can fail to resolve against a tree.
///
/// These are ordinary values, not aborts: navigation always pairs one of
/// them with the deepest node it reached, so callers can show the failure in
/// context (see [`PathFailure`](super::navigator::PathFailure)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path continued past a scalar leaf; `remaining` holds the
    /// unconsumed segments joined with `/`.
    ExtraElementsInPath { remaining: String },
    /// A key segment with no match in the current mapping.
    MapKeyNotFound { key: String },
    /// A sequence segment that is non-numeric, negative, or out of range.
    InvalidIndex { segment: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ExtraElementsInPath { remaining } => {
                write!(f, "extra elements in path: {}", remaining)
            }
            PathError::MapKeyNotFound { key } => {
                write!(f, "map key not found: {}", key)
            }
            PathError::InvalidIndex { segment } => {
                write!(f, "invalid index: {}", segment)
            }
        }
    }
}

impl std::error::Error for PathError {}
