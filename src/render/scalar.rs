//! YAML scalar encoding.

use anyhow::Result;
use serde_yaml::Value;

use crate::document::node::Scalar;

/// Encodes a scalar in YAML literal form.
///
/// Quoting and numeric formatting belong to the `serde_yaml` emitter, not to
/// this crate: a string that would read back as something else (`"3"`,
/// `"true"`, `"a: b"`) comes out quoted, plain strings stay bare. The
/// returned string ends with the emitter's newline, which rendered lines use
/// as their terminator.
///
/// # Example
///
/// ```
/// use yamldig::document::node::Scalar;
/// use yamldig::render::scalar::yaml_scalar;
///
/// assert_eq!(yaml_scalar(&Scalar::Str("one".to_string())).unwrap(), "one\n");
/// assert_eq!(yaml_scalar(&Scalar::Str("3".to_string())).unwrap(), "'3'\n");
/// assert_eq!(yaml_scalar(&Scalar::Null).unwrap(), "null\n");
/// ```
pub fn yaml_scalar(scalar: &Scalar) -> Result<String> {
    let value = match scalar {
        Scalar::Str(s) => Value::String(s.clone()),
        Scalar::Bool(b) => Value::Bool(*b),
        Scalar::Int(i) => Value::Number((*i).into()),
        Scalar::Float(x) => Value::Number((*x).into()),
        Scalar::Null => Value::Null,
    };
    Ok(serde_yaml::to_string(&value)?)
}
