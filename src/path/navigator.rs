//! Segment-by-segment tree walking.
//!
//! [`navigate`] resolves a pre-split path against a tree root. Failures are
//! values carrying both what went wrong and where the walk stopped
//! ([`PathFailure`]), so callers can render the surrounding tree instead of
//! a bare message. The walk allocates only when include-parent mode has to
//! synthesize its single-entry wrapper; plain matches borrow from the tree.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

use super::error::PathError;
use super::segment::as_index;
use crate::document::node::Node;
use crate::trace::{Discard, TraceSink};

/// A failed walk: the typed error plus the deepest node reached before the
/// walk stopped.
///
/// `context` is the diagnostic node: the mapping whose key was missing, the
/// sequence whose index was invalid, or the scalar the path tried to walk
/// past. Rendering it shows the user what the tree looked like at the point
/// of failure.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFailure<'a> {
    pub error: PathError,
    pub context: &'a Node,
}

impl fmt::Display for PathFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for PathFailure<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// The last descent taken, remembered for include-parent wrapping.
enum Step<'p> {
    Key(&'p str),
    Index(usize),
}

/// Resolves `path` against `root`.
///
/// An empty path always succeeds and yields `root` itself. With
/// `include_parent` set, a successful non-empty walk returns a synthetic
/// container exposing only the final matched pair: a single-entry mapping
/// when the last descent was by key, a single-element sequence when it was
/// by index.
///
/// # Errors
///
/// Fails with [`PathError::MapKeyNotFound`] for an unmatched key,
/// [`PathError::InvalidIndex`] for a segment that is not a valid position in
/// the current sequence, and [`PathError::ExtraElementsInPath`] when
/// segments remain after a scalar leaf. The failure always carries the
/// deepest node reached.
///
/// # Example
///
/// ```
/// use yamldig::document::parser::parse_yaml;
/// use yamldig::path::{navigate, parse_path, PathError};
///
/// let doc = parse_yaml("hello:\n  - one\n  - two\n").unwrap();
///
/// let found = navigate(doc.root(), &parse_path("hello/1"), false).unwrap();
/// assert_eq!(found.as_scalar().map(|s| s.to_string()), Some("two".to_string()));
///
/// let failure = navigate(doc.root(), &parse_path("hello/9"), false).unwrap_err();
/// assert!(matches!(failure.error, PathError::InvalidIndex { .. }));
/// ```
pub fn navigate<'a>(
    root: &'a Node,
    path: &[String],
    include_parent: bool,
) -> Result<Cow<'a, Node>, PathFailure<'a>> {
    navigate_with(&mut Discard, root, path, include_parent)
}

/// Like [`navigate`], reporting each step to `trace`.
pub fn navigate_with<'a>(
    trace: &mut dyn TraceSink,
    root: &'a Node,
    path: &[String],
    include_parent: bool,
) -> Result<Cow<'a, Node>, PathFailure<'a>> {
    trace.note(&format!(
        "navigate: path '{}' (include_parent={})",
        path.join("/"),
        include_parent
    ));
    if path.is_empty() {
        return Ok(Cow::Borrowed(root));
    }

    let mut current = root;
    let mut previous: Option<Step<'_>> = None;

    for (pos, segment) in path.iter().enumerate() {
        match current {
            Node::Mapping(entries) => match entries.get(segment.as_str()) {
                Some(child) => {
                    trace.note(&format!("mapping: descending at key '{}'", segment));
                    previous = Some(Step::Key(segment));
                    current = child;
                }
                None => {
                    trace.note(&format!("mapping: key '{}' not found", segment));
                    return Err(PathFailure {
                        error: PathError::MapKeyNotFound {
                            key: segment.clone(),
                        },
                        context: current,
                    });
                }
            },
            Node::Sequence(items) => match as_index(segment) {
                Some(index) if index < items.len() => {
                    trace.note(&format!("sequence: descending at index {}", index));
                    previous = Some(Step::Index(index));
                    current = &items[index];
                }
                _ => {
                    trace.note(&format!(
                        "sequence: '{}' is not a valid index (length {})",
                        segment,
                        items.len()
                    ));
                    return Err(PathFailure {
                        error: PathError::InvalidIndex {
                            segment: segment.clone(),
                        },
                        context: current,
                    });
                }
            },
            Node::Scalar(_) => {
                let remaining = path[pos..].join("/");
                trace.note(&format!(
                    "scalar: leaf reached with '{}' unconsumed",
                    remaining
                ));
                return Err(PathFailure {
                    error: PathError::ExtraElementsInPath { remaining },
                    context: current,
                });
            }
        }
    }

    if include_parent {
        if let Some(step) = previous {
            return Ok(Cow::Owned(wrap_final_pair(trace, step, current)));
        }
    }
    Ok(Cow::Borrowed(current))
}

/// Builds the synthetic single-pair container for include-parent mode.
fn wrap_final_pair(trace: &mut dyn TraceSink, step: Step<'_>, matched: &Node) -> Node {
    match step {
        Step::Key(key) => {
            trace.note(&format!("include_parent: wrapping final key '{}'", key));
            let mut entry = IndexMap::new();
            entry.insert(key.to_string(), matched.clone());
            Node::Mapping(entry)
        }
        Step::Index(index) => {
            trace.note(&format!("include_parent: wrapping final index {}", index));
            Node::Sequence(vec![matched.clone()])
        }
    }
}
