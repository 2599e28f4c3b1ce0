//! End-to-end query tests: parse a document, resolve a path, check the
//! formatted result.
//!
//! Covers:
//! - Scalar results as bare literals, container results as sorted dumps
//! - Sequence indexing and the include-parent wrapper
//! - The three navigation errors and their rendered diagnostic context
//! - YAML and JSON output flavors

use yamldig::document::parser::parse_yaml;
use yamldig::path::{parse_path, PathError};
use yamldig::query::QueryError;

#[test]
fn test_get_scalar_from_mapping() {
    let doc = parse_yaml("hello: world\n").unwrap();
    let value = doc.get_string(false, &parse_path("hello")).unwrap();
    assert_eq!(value, "world");
}

#[test]
fn test_get_scalar_by_sequence_index() {
    let doc = parse_yaml("hello:\n  - one\n  - two\n  - three\n").unwrap();
    let value = doc.get_string(false, &parse_path("hello/1")).unwrap();
    assert_eq!(value, "two");
}

#[test]
fn test_get_deep_scalar_through_sequence_element() {
    let yaml = "hello:\n  - one\n  - world: 123.123\n  - three\n";
    let doc = parse_yaml(yaml).unwrap();
    let value = doc.get_string(false, &parse_path("hello/1/world")).unwrap();
    assert_eq!(value, "123.123");
}

#[test]
fn test_numeric_segment_is_a_key_on_mappings() {
    // A mapping with the key "1": the segment must match the key, not be
    // treated as an index.
    let doc = parse_yaml("hello:\n  \"1\": first\n  \"2\": second\n").unwrap();
    let value = doc.get_string(false, &parse_path("hello/2")).unwrap();
    assert_eq!(value, "second");
}

#[test]
fn test_get_container_renders_sorted() {
    let yaml = "database:\n  port: 5432\n  host: localhost\n  name: app\n";
    let doc = parse_yaml(yaml).unwrap();
    let value = doc.get_string(false, &parse_path("database")).unwrap();
    assert_eq!(value, "host: localhost\nname: app\nport: 5432\n");
}

#[test]
fn test_empty_path_returns_whole_document() {
    let doc = parse_yaml("b: 2\na: 1\n").unwrap();
    let value = doc.get_string(false, &[]).unwrap();
    assert_eq!(value, "a: 1\nb: 2\n");
}

#[test]
fn test_include_keeps_final_mapping_key() {
    let yaml = "hello:\n  - one\n  - world: 123.123\n  - three\n";
    let doc = parse_yaml(yaml).unwrap();
    let value = doc.get_string(true, &parse_path("hello/1/world")).unwrap();
    assert_eq!(value, "world: 123.123\n");
}

#[test]
fn test_include_wraps_final_index_in_single_element_sequence() {
    let doc = parse_yaml("hello:\n  - one\n  - two\n  - three\n").unwrap();
    let value = doc.get_string(true, &parse_path("hello/1")).unwrap();
    assert_eq!(value, "  - two\n");
}

#[test]
fn test_include_without_path_is_plain_lookup() {
    let doc = parse_yaml("b: 2\na: 1\n").unwrap();
    let value = doc.get_string(true, &[]).unwrap();
    assert_eq!(value, "a: 1\nb: 2\n");
}

#[test]
fn test_missing_key_reports_error_and_context() {
    let doc = parse_yaml("x: 1\n").unwrap();
    let err = doc.get_string(false, &parse_path("y")).unwrap_err();

    assert_eq!(
        err.to_string(),
        "path 'y' did not return a valid string: map key not found: y"
    );
    assert_eq!(err.rendered(), Some("x: 1\n"));
    let Some(PathError::MapKeyNotFound { key }) = err.path_error() else {
        panic!("expected MapKeyNotFound, got {:?}", err);
    };
    assert_eq!(key, "y");
}

#[test]
fn test_out_of_range_index_reports_invalid_index() {
    let doc = parse_yaml("hello:\n  - one\n  - two\n  - three\n").unwrap();
    let err = doc.get_string(false, &parse_path("hello/3")).unwrap_err();

    assert_eq!(
        err.to_string(),
        "path 'hello/3' did not return a valid string: invalid index: 3"
    );
    // The diagnostic is the sequence navigation stopped at.
    assert_eq!(err.rendered(), Some("  - one\n  - two\n  - three\n"));
    let Some(PathError::InvalidIndex { segment }) = err.path_error() else {
        panic!("expected InvalidIndex, got {:?}", err);
    };
    assert_eq!(segment, "3");
}

#[test]
fn test_non_numeric_segment_on_sequence_is_invalid_index() {
    let doc = parse_yaml("hello:\n  - one\n  - two\n").unwrap();
    let err = doc.get_string(false, &parse_path("hello/world")).unwrap_err();
    let Some(PathError::InvalidIndex { segment }) = err.path_error() else {
        panic!("expected InvalidIndex, got {:?}", err);
    };
    assert_eq!(segment, "world");
}

#[test]
fn test_leftover_segments_on_scalar_report_extra_elements() {
    let doc = parse_yaml("\"hello\"\n").unwrap();
    let err = doc.get_string(false, &parse_path("hello")).unwrap_err();

    assert_eq!(
        err.to_string(),
        "path 'hello' did not return a valid string: extra elements in path: hello"
    );
    assert_eq!(err.rendered(), Some("hello"));
}

#[test]
fn test_extra_elements_lists_all_unconsumed_segments() {
    let doc = parse_yaml("a:\n  b: leaf\n").unwrap();
    let err = doc.get_string(false, &parse_path("a/b/c/d")).unwrap_err();
    let Some(PathError::ExtraElementsInPath { remaining }) = err.path_error() else {
        panic!("expected ExtraElementsInPath, got {:?}", err);
    };
    assert_eq!(remaining, "c/d");
    assert_eq!(err.rendered(), Some("leaf"));
}

#[test]
fn test_error_deep_in_tree_renders_deepest_node() {
    let yaml = "spec:\n  containers:\n    - name: web\n      image: nginx\n";
    let doc = parse_yaml(yaml).unwrap();
    let err = doc
        .get_string(false, &parse_path("spec/containers/0/command"))
        .unwrap_err();
    assert_eq!(err.rendered(), Some("image: nginx\nname: web\n"));
}

#[test]
fn test_null_and_quoted_scalars() {
    let doc = parse_yaml("empty: null\nnumish: \"3\"\nboolish: \"true\"\n").unwrap();
    let get = |p: &str| doc.get_string(false, &parse_path(p)).unwrap();

    // Bare literals: no YAML quoting on direct scalar hits.
    assert_eq!(get("empty"), "null");
    assert_eq!(get("numish"), "3");
    assert_eq!(get("boolish"), "true");
}

#[test]
fn test_quoting_survives_inside_container_results() {
    let doc = parse_yaml("wrap:\n  numish: \"3\"\n  boolish: \"true\"\n").unwrap();
    let value = doc.get_string(false, &parse_path("wrap")).unwrap();
    assert_eq!(value, "boolish: 'true'\nnumish: '3'\n");
}

#[test]
fn test_json_flavor_container_output() {
    let yaml = "database:\n  port: 5432\n  host: localhost\n  tags:\n    - a\n    - b\n";
    let doc = parse_yaml(yaml).unwrap();
    let value = doc.get_json(false, &parse_path("database")).unwrap();
    assert_eq!(
        value,
        "{\n  \"host\": \"localhost\",\n  \"port\": 5432,\n  \"tags\": [\n    \"a\",\n    \"b\"\n  ]\n}"
    );
}

#[test]
fn test_json_flavor_scalar_is_bare_literal() {
    let doc = parse_yaml("hello: world\n").unwrap();
    let value = doc.get_json(false, &parse_path("hello")).unwrap();
    assert_eq!(value, "world");
}

#[test]
fn test_json_flavor_diagnostic_context_is_json() {
    let doc = parse_yaml("x: 1\n").unwrap();
    let err = doc.get_json(false, &parse_path("y")).unwrap_err();
    assert_eq!(err.rendered(), Some("{\n  \"x\": 1\n}"));
}

#[test]
fn test_json_flavor_rejects_non_finite_floats() {
    let doc = parse_yaml("v: .inf\n").unwrap();
    let err = doc.get_json(false, &[]).unwrap_err();
    assert!(matches!(err, QueryError::Encode(_)));
}

#[test]
fn test_json_input_documents_work_the_same() {
    // JSON is a YAML subset, so .json files flow through the same parser.
    let json = r#"{"hello": ["one", "two", "three"]}"#;
    let doc = parse_yaml(json).unwrap();
    assert_eq!(doc.get_string(false, &parse_path("hello/2")).unwrap(), "three");
}

#[test]
fn test_parse_path_strips_leading_slashes() {
    let doc = parse_yaml("a:\n  b: 1\n").unwrap();
    assert_eq!(doc.get_string(false, &parse_path("/a/b")).unwrap(), "1");
    assert_eq!(doc.get_string(false, &parse_path("a/b")).unwrap(), "1");
}
