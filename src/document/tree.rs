//! Decoded document wrapper.
//!
//! This module provides `Document`, the owning wrapper around one decoded
//! tree. A multi-document stream produces one `Document` per `---`-separated
//! document. The wrapper is read-only once constructed; it exists to give the
//! query and rendering entry points a single home.
//!
//! # Example
//!
//! ```
//! use yamldig::document::parser::parse_yaml;
//!
//! let doc = parse_yaml("hello: world\n").unwrap();
//! let value = doc.get_string(false, &["hello".to_string()]).unwrap();
//! assert_eq!(value, "world");
//! ```

use super::node::Node;
use crate::query::{self, QueryError};
use crate::render;
use crate::trace::TraceSink;
use anyhow::Result;

/// One decoded document and its query surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Wraps an already-decoded root node.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolves `path` against this document and formats the result as text:
    /// bare literals for scalars, the canonical sorted dump for containers.
    ///
    /// On a path error the returned [`QueryError`] carries the same rendering
    /// for the deepest node reached, so the failure can be shown in context.
    pub fn get_string(&self, include_parent: bool, path: &[String]) -> Result<String, QueryError> {
        query::get_string(&self.root, include_parent, path)
    }

    /// Like [`get_string`](Self::get_string), reporting each navigation step
    /// to `trace`.
    pub fn get_string_with(
        &self,
        trace: &mut dyn TraceSink,
        include_parent: bool,
        path: &[String],
    ) -> Result<String, QueryError> {
        query::get_string_with(trace, &self.root, include_parent, path)
    }

    /// JSON-flavored variant of [`get_string`](Self::get_string): containers
    /// format as key-sorted pretty JSON instead of the YAML-like dump.
    pub fn get_json(&self, include_parent: bool, path: &[String]) -> Result<String, QueryError> {
        query::get_json(&self.root, include_parent, path)
    }

    /// Like [`get_json`](Self::get_json), reporting each navigation step to
    /// `trace`.
    pub fn get_json_with(
        &self,
        trace: &mut dyn TraceSink,
        include_parent: bool,
        path: &[String],
    ) -> Result<String, QueryError> {
        query::get_json_with(trace, &self.root, include_parent, path)
    }

    /// Renders the whole document in canonical key-sorted form.
    pub fn sorted_string(&self) -> Result<String> {
        render::sorted::sorted_string(&self.root)
    }
}

#[cfg(test)]
mod tree_tests {
    use super::super::parser::parse_yaml;
    use crate::document::node::{Node, Scalar};

    #[test]
    fn test_document_exposes_root() {
        let doc = parse_yaml("42\n").unwrap();
        assert_eq!(doc.root(), &Node::Scalar(Scalar::Int(42)));
    }

    #[test]
    fn test_sorted_string_sorts_keys() {
        let doc = parse_yaml("b: 2\na: 1\n").unwrap();
        assert_eq!(doc.sorted_string().unwrap(), "a: 1\nb: 2\n");
    }
}
