//! JSON-flavored rendering.

use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::document::node::{Node, Scalar};

/// Renders `node` as key-sorted, 2-space-indented pretty JSON.
///
/// Key order comes from the `serde_json` encoder's default map, which keeps
/// keys sorted, so this flavor is order-independent the same way the YAML
/// dump is. The output carries no trailing newline.
///
/// # Errors
///
/// Non-finite floats (`.inf`, `.nan` in YAML) have no JSON representation
/// and are an error.
///
/// # Example
///
/// ```
/// use yamldig::document::parser::parse_yaml;
/// use yamldig::render::json::json_string;
///
/// let doc = parse_yaml("hello: world\n").unwrap();
/// assert_eq!(json_string(doc.root()).unwrap(), "{\n  \"hello\": \"world\"\n}");
/// ```
pub fn json_string(node: &Node) -> Result<String> {
    let value = to_json_value(node)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

fn to_json_value(node: &Node) -> Result<Value> {
    match node {
        Node::Mapping(entries) => {
            let mut map = serde_json::Map::new();
            for (key, child) in entries {
                map.insert(key.clone(), to_json_value(child)?);
            }
            Ok(Value::Object(map))
        }
        Node::Sequence(items) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                values.push(to_json_value(item)?);
            }
            Ok(Value::Array(values))
        }
        Node::Scalar(Scalar::Str(s)) => Ok(Value::String(s.clone())),
        Node::Scalar(Scalar::Bool(b)) => Ok(Value::Bool(*b)),
        Node::Scalar(Scalar::Int(i)) => Ok(Value::Number((*i).into())),
        Node::Scalar(Scalar::Float(x)) => serde_json::Number::from_f64(*x)
            .map(Value::Number)
            .ok_or_else(|| anyhow!("Cannot represent non-finite float {} in JSON", x)),
        Node::Scalar(Scalar::Null) => Ok(Value::Null),
    }
}
