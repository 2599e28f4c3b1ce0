//! Deterministic text rendering for document trees.
//!
//! Two flavors share the same canonicalization goal (semantically equal
//! trees produce byte-identical output):
//!
//! - [`sorted`]: the YAML-like key-sorted dump used for whole-document
//!   output and for navigation diagnostics.
//! - [`json`]: key-sorted pretty JSON via the `serde_json` encoder.
//!
//! Scalar quoting is never re-implemented here; [`scalar`] delegates it to
//! the `serde_yaml` emitter.

pub mod json;
pub mod scalar;
pub mod sorted;

pub use json::json_string;
pub use sorted::{sorted_string, write_sorted};
