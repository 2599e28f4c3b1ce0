//! Document tree representation.
//!
//! This module provides the core data structures for representing decoded
//! YAML/JSON documents in yamldig. A document is a tree of `Node` values:
//! mappings with string keys, ordered sequences, and typed scalar leaves.
//! Nodes are plain data; once the parser has produced a tree, nothing in the
//! engine mutates it.
//!
//! # Example
//!
//! ```
//! use yamldig::document::node::{Node, Scalar};
//! use indexmap::IndexMap;
//!
//! let mut entries = IndexMap::new();
//! entries.insert("name".to_string(), Node::Scalar(Scalar::Str("yamldig".to_string())));
//! entries.insert("version".to_string(), Node::Scalar(Scalar::Int(3)));
//! let root = Node::Mapping(entries);
//!
//! assert!(root.is_mapping());
//! assert!(!root.is_scalar());
//! ```

use indexmap::IndexMap;
use std::fmt;

/// A scalar leaf value.
///
/// The subtype is explicit so consumers can match exhaustively instead of
/// probing with runtime casts. Integers and floats are kept apart; a value
/// decoded as `3` stays an integer and never picks up a fractional display.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Null,
}

impl fmt::Display for Scalar {
    /// Formats the scalar as a bare literal: strings unquoted, booleans as
    /// `true`/`false`, numbers in natural decimal form, null as `null`.
    ///
    /// # Example
    ///
    /// ```
    /// use yamldig::document::node::Scalar;
    ///
    /// assert_eq!(Scalar::Str("hi there".to_string()).to_string(), "hi there");
    /// assert_eq!(Scalar::Float(123.123).to_string(), "123.123");
    /// assert_eq!(Scalar::Null.to_string(), "null");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => write!(f, "{}", s),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Null => write!(f, "null"),
        }
    }
}

/// A node in a decoded document tree.
///
/// Mappings preserve decode order (`IndexMap`), which is deliberately *not*
/// relied upon anywhere: the sorted renderer produces the same bytes for any
/// insertion order, and navigation looks keys up by name. Keeping the decode
/// order around makes that order-independence testable.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Key/value pairs with unique string keys.
    Mapping(IndexMap<String, Node>),
    /// An ordered, 0-indexed list of nodes.
    Sequence(Vec<Node>),
    /// A leaf value.
    Scalar(Scalar),
}

impl Node {
    /// Returns true if this node is a mapping.
    ///
    /// # Example
    ///
    /// ```
    /// use yamldig::document::node::{Node, Scalar};
    /// use indexmap::IndexMap;
    ///
    /// assert!(Node::Mapping(IndexMap::new()).is_mapping());
    /// assert!(!Node::Scalar(Scalar::Int(42)).is_mapping());
    /// ```
    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    /// Returns true if this node is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    /// Returns true if this node is a scalar leaf.
    ///
    /// # Example
    ///
    /// ```
    /// use yamldig::document::node::{Node, Scalar};
    ///
    /// assert!(Node::Scalar(Scalar::Null).is_scalar());
    /// assert!(!Node::Sequence(vec![]).is_scalar());
    /// ```
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Returns true if this node can hold children (mapping or sequence).
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Mapping(_) | Node::Sequence(_))
    }

    /// Returns the scalar value if this node is a leaf.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }
}
