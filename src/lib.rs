//! yamldig: navigate, query, and canonically render YAML/JSON documents.
//!
//! The library decodes YAML (and JSON, as a YAML subset) into an explicit
//! tree model, resolves slash-style paths against it, and renders trees back
//! to text deterministically: mapping keys sorted, indentation canonical, so
//! semantically equal documents produce byte-identical output.
//!
//! # Example
//!
//! ```
//! use yamldig::document::parser::parse_yaml;
//! use yamldig::path::parse_path;
//!
//! let doc = parse_yaml("hello:\n  - one\n  - two\n  - three\n").unwrap();
//! assert_eq!(
//!     doc.get_string(false, &parse_path("hello/1")).unwrap(),
//!     "two"
//! );
//! assert_eq!(doc.sorted_string().unwrap(), "hello: \n  - one\n  - two\n  - three\n");
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod path;
pub mod query;
pub mod render;
pub mod trace;
