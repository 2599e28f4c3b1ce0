//! Document model: tree nodes, parsing, and the per-document wrapper.

pub mod node;
pub mod parser;
pub mod tree;

pub use node::{Node, Scalar};
pub use tree::Document;
