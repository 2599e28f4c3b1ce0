//! Canonical key-sorted tree rendering.
//!
//! This renderer produces a deterministic YAML-like dump: mapping keys in
//! byte-wise sorted order, 3 spaces of indentation per level, and dash
//! markers aligned with the keys of the mappings they sit beside. Two
//! semantically equal trees render to byte-identical output whatever the
//! decode order was, which makes the output diffable and usable as a
//! canonical form.
//!
//! It is not a general YAML emitter: no anchors, no multi-document streams,
//! no comments. Scalar quoting is delegated to [`yaml_scalar`].
//!
//! Layout rules:
//! - a mapping entry at `level` starts at `level*3` spaces, minus 2 inside a
//!   sequence element;
//! - the first key directly after a dash marker carries no indentation;
//! - scalar values print inline after `key: `; container values start on the
//!   next line, one level deeper;
//! - a dash marker at `level` is `- ` preceded by `max(level*3 - 3, 0) + 2`
//!   spaces, and its element renders one level deeper with the
//!   sequence-element shift applied.

use std::io::Write;

use anyhow::Result;

use super::scalar::yaml_scalar;
use crate::document::node::Node;

/// Renders `node` to `writer` in canonical sorted form.
///
/// `level` is the starting indentation level; whole-document output uses 0.
/// Writer errors propagate unchanged.
///
/// # Example
///
/// ```
/// use yamldig::document::parser::parse_yaml;
/// use yamldig::render::sorted::write_sorted;
///
/// let doc = parse_yaml("b: 2\na: 1\n").unwrap();
/// let mut out = Vec::new();
/// write_sorted(&mut out, doc.root(), 0).unwrap();
/// assert_eq!(out, b"a: 1\nb: 2\n");
/// ```
pub fn write_sorted<W: Write>(writer: &mut W, node: &Node, level: usize) -> Result<()> {
    render(writer, node, level, false, false)
}

/// Renders `node` to a `String` at level 0.
pub fn sorted_string(node: &Node) -> Result<String> {
    let mut buf = Vec::new();
    write_sorted(&mut buf, node, 0)?;
    Ok(String::from_utf8(buf)?)
}

fn render<W: Write>(
    w: &mut W,
    node: &Node,
    level: usize,
    array_key: bool,
    array_element: bool,
) -> Result<()> {
    match node {
        Node::Mapping(entries) => {
            let spacing = if array_element {
                (level * 3).saturating_sub(2)
            } else {
                level * 3
            };
            let mut pairs: Vec<(&str, &Node)> =
                entries.iter().map(|(k, v)| (k.as_str(), v)).collect();
            pairs.sort_by_key(|&(key, _)| key);

            let mut after_dash = array_key;
            for (key, value) in pairs {
                if after_dash {
                    after_dash = false;
                    write!(w, "{}: ", key)?;
                } else {
                    write!(w, "{}{}: ", " ".repeat(spacing), key)?;
                }
                match value {
                    Node::Scalar(s) => w.write_all(yaml_scalar(s)?.as_bytes())?,
                    container => {
                        writeln!(w)?;
                        render(w, container, level + 1, false, array_element)?;
                    }
                }
            }
        }
        Node::Sequence(items) => {
            let indent = " ".repeat((level * 3).saturating_sub(3));
            for item in items {
                write!(w, "{}  - ", indent)?;
                render(w, item, level + 1, true, true)?;
            }
        }
        Node::Scalar(s) => w.write_all(yaml_scalar(s)?.as_bytes())?,
    }
    Ok(())
}
