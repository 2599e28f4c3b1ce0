//! YAML/JSON parsing into the yamldig tree model.
//!
//! This module converts raw document text into `Node` trees. Decoding is
//! delegated to `serde_yaml` (JSON parses through the same path, being a
//! YAML subset); this module's job is the conversion from `serde_yaml`'s
//! dynamic value type into the explicit tagged model in
//! [`node`](super::node), including multi-document streams.
//!
//! Merge keys (`<<`) and alias references are resolved before conversion, so
//! the resulting tree contains only plain mappings, sequences, and scalars.
//!
//! # Note on numbers
//!
//! Integers that fit `i64` stay integers; unsigned values beyond `i64::MAX`
//! and everything with a fractional part decode as `f64`.
//!
//! # Example
//!
//! ```
//! use yamldig::document::parser::parse_yaml;
//!
//! let doc = parse_yaml("name: yamldig\ncount: 42\n").unwrap();
//! assert!(doc.root().is_mapping());
//! ```

use super::node::{Node, Scalar};
use super::tree::Document;
use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;

/// Parses a string containing exactly one YAML (or JSON) document.
///
/// Empty input decodes as a single `null` scalar. Input containing more than
/// one document is an error; use [`parse_yaml_documents`] for streams.
///
/// # Errors
///
/// Returns an error if the input is not valid YAML or uses a non-scalar
/// mapping key.
pub fn parse_yaml(input: &str) -> Result<Document> {
    let mut value: Value = serde_yaml::from_str(input).context("Failed to parse YAML")?;
    value
        .apply_merge()
        .context("Failed to resolve YAML merge keys")?;
    Ok(Document::new(convert_value(value)?))
}

/// Parses a (possibly multi-document) YAML stream into one `Document` per
/// `---`-separated document, in stream order.
///
/// An empty stream yields an empty vector.
pub fn parse_yaml_documents(input: &str) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for (i, deserializer) in serde_yaml::Deserializer::from_str(input).enumerate() {
        let mut value = Value::deserialize(deserializer)
            .with_context(|| format!("Failed to parse YAML document {}", i + 1))?;
        value
            .apply_merge()
            .with_context(|| format!("Failed to resolve merge keys in document {}", i + 1))?;
        documents.push(Document::new(convert_value(value)?));
    }
    Ok(documents)
}

/// Converts a decoded `serde_yaml` value into the explicit node model.
fn convert_value(value: Value) -> Result<Node> {
    match value {
        Value::Null => Ok(Node::Scalar(Scalar::Null)),
        Value::Bool(b) => Ok(Node::Scalar(Scalar::Bool(b))),
        Value::Number(n) => Ok(Node::Scalar(convert_number(&n))),
        Value::String(s) => Ok(Node::Scalar(Scalar::Str(s))),
        Value::Sequence(items) => {
            let mut nodes = Vec::with_capacity(items.len());
            for item in items {
                nodes.push(convert_value(item)?);
            }
            Ok(Node::Sequence(nodes))
        }
        Value::Mapping(entries) => {
            let mut map = IndexMap::with_capacity(entries.len());
            for (key, val) in entries {
                map.insert(scalar_key(&key)?, convert_value(val)?);
            }
            Ok(Node::Mapping(map))
        }
        // Custom tags carry no meaning for navigation; use the inner value.
        Value::Tagged(tagged) => convert_value(tagged.value),
    }
}

fn convert_number(n: &serde_yaml::Number) -> Scalar {
    match n.as_i64() {
        Some(i) => Scalar::Int(i),
        // Floats and u64 values beyond i64::MAX; as_f64 is total for
        // serde_yaml numbers.
        None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// YAML permits scalar keys of any type; paths address them by their literal
/// form, so `1:` becomes the key `"1"` and `true:` the key `"true"`.
fn scalar_key(key: &Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(convert_number(n).to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => scalar_key(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err(anyhow!("Unsupported non-scalar mapping key"))
        }
    }
}
