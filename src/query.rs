//! Path query façades.
//!
//! [`get_string`] and [`get_json`] combine navigation and rendering into the
//! one call most users want: resolve a path, then format what was found.
//! Scalars format as bare literals in both flavors; containers go through
//! the canonical sorted dump (YAML flavor) or the sorted pretty-JSON encoder
//! (JSON flavor).
//!
//! When navigation fails, the deepest node reached is still rendered and
//! travels inside the returned [`QueryError`], so a failed query always has
//! printable context attached.
//!
//! # Example
//!
//! ```
//! use yamldig::document::parser::parse_yaml;
//! use yamldig::query::get_string;
//! use yamldig::path::parse_path;
//!
//! let doc = parse_yaml("hello:\n  - one\n  - two\n  - three\n").unwrap();
//!
//! let value = get_string(doc.root(), false, &parse_path("hello/1")).unwrap();
//! assert_eq!(value, "two");
//!
//! let err = get_string(doc.root(), false, &parse_path("hello/9")).unwrap_err();
//! assert_eq!(err.rendered(), Some("  - one\n  - two\n  - three\n"));
//! ```

use std::fmt;

use anyhow::Result;

use crate::document::node::Node;
use crate::path::navigator::navigate_with;
use crate::path::PathError;
use crate::render::{json_string, sorted_string};
use crate::trace::{Discard, TraceSink};

/// Which encoder formats container output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
    Yaml,
    Json,
}

/// A failed query.
#[derive(Debug)]
pub enum QueryError {
    /// The path did not resolve. `rendered` is the formatted diagnostic node
    /// (the deepest node reached), ready to print as context.
    Path {
        path: String,
        error: PathError,
        rendered: String,
    },
    /// The matched node (or the diagnostic context) could not be encoded,
    /// e.g. a non-finite float in the JSON flavor.
    Encode(anyhow::Error),
}

impl QueryError {
    /// The rendered diagnostic context, when navigation failed.
    pub fn rendered(&self) -> Option<&str> {
        match self {
            QueryError::Path { rendered, .. } => Some(rendered),
            QueryError::Encode(_) => None,
        }
    }

    /// The underlying navigation error, when navigation failed.
    pub fn path_error(&self) -> Option<&PathError> {
        match self {
            QueryError::Path { error, .. } => Some(error),
            QueryError::Encode(_) => None,
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Path { path, error, .. } => {
                write!(f, "path '{}' did not return a valid string: {}", path, error)
            }
            QueryError::Encode(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Path { error, .. } => Some(error),
            QueryError::Encode(err) => Some(err.as_ref()),
        }
    }
}

/// Resolves `path` and formats the result: bare literals for scalars, the
/// canonical sorted dump for containers.
pub fn get_string(root: &Node, include_parent: bool, path: &[String]) -> Result<String, QueryError> {
    get_string_with(&mut Discard, root, include_parent, path)
}

/// Like [`get_string`], reporting each navigation step to `trace`.
pub fn get_string_with(
    trace: &mut dyn TraceSink,
    root: &Node,
    include_parent: bool,
    path: &[String],
) -> Result<String, QueryError> {
    run(trace, root, include_parent, path, Flavor::Yaml)
}

/// JSON-flavored variant of [`get_string`]: containers format as key-sorted
/// pretty JSON.
pub fn get_json(root: &Node, include_parent: bool, path: &[String]) -> Result<String, QueryError> {
    get_json_with(&mut Discard, root, include_parent, path)
}

/// Like [`get_json`], reporting each navigation step to `trace`.
pub fn get_json_with(
    trace: &mut dyn TraceSink,
    root: &Node,
    include_parent: bool,
    path: &[String],
) -> Result<String, QueryError> {
    run(trace, root, include_parent, path, Flavor::Json)
}

fn run(
    trace: &mut dyn TraceSink,
    root: &Node,
    include_parent: bool,
    path: &[String],
    flavor: Flavor,
) -> Result<String, QueryError> {
    match navigate_with(trace, root, path, include_parent) {
        Ok(found) => format_node(found.as_ref(), flavor).map_err(QueryError::Encode),
        Err(failure) => {
            let rendered =
                format_node(failure.context, flavor).map_err(QueryError::Encode)?;
            Err(QueryError::Path {
                path: path.join("/"),
                error: failure.error,
                rendered,
            })
        }
    }
}

fn format_node(node: &Node, flavor: Flavor) -> Result<String> {
    match node {
        Node::Scalar(s) => Ok(s.to_string()),
        container => match flavor {
            Flavor::Yaml => sorted_string(container),
            Flavor::Json => json_string(container),
        },
    }
}
