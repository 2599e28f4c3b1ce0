//! Path-based navigation over document trees.
//!
//! A path is a sequence of plain string segments, pre-split by the caller.
//! Against a mapping a segment is a literal key; against a sequence it must
//! be an unsigned decimal index. The type of the current node fully decides
//! which matcher applies, so a numeric-looking segment against a mapping is
//! a key lookup, never an index.
//!
//! # Example
//!
//! ```
//! use yamldig::document::parser::parse_yaml;
//! use yamldig::path::{navigate, parse_path};
//!
//! let doc = parse_yaml("servers:\n  - name: alpha\n  - name: beta\n").unwrap();
//! let found = navigate(doc.root(), &parse_path("servers/1/name"), false).unwrap();
//! assert_eq!(found.as_scalar().map(|s| s.to_string()), Some("beta".to_string()));
//! ```

pub mod error;
pub mod navigator;
pub mod segment;

pub use error::PathError;
pub use navigator::{navigate, navigate_with, PathFailure};

/// Splits a user-supplied path expression into segments.
///
/// Leading slashes are trimmed, then the rest splits on `/`. There is no
/// escaping syntax; a key containing a literal slash cannot be addressed
/// through this form (pass it as an already-split segment instead).
///
/// # Example
///
/// ```
/// use yamldig::path::parse_path;
///
/// assert_eq!(parse_path("/hello/1"), vec!["hello", "1"]);
/// assert_eq!(parse_path("hello"), vec!["hello"]);
/// ```
pub fn parse_path(expr: &str) -> Vec<String> {
    expr.trim_start_matches('/')
        .split('/')
        .map(str::to_string)
        .collect()
}
