//! Behaviour tests for [`response_format::format_response`] and [`response_format::render_lines`].
//! Each test documents the input shape and the exact lines expected in the chat.

use response_format::{format_response, format_value, render_lines, MAX_MESSAGE_CHARS};
use serde_json::json;

/// **Test: A flat object yields one bullet line per key.**
#[test]
fn flat_object_renders_single_bullet_line() {
    assert_eq!(format_response(r#"{"a_b": "c"}"#), vec!["• A B: c"]);
}

/// **Test: An array under a key gets a header, numbered entries, and deeper indentation.**
#[test]
fn array_under_key_is_numbered_and_indented() {
    assert_eq!(
        format_response(r#"{"x": [1, 2]}"#),
        vec!["• X", "  #1", "    1", "  #2", "    2"]
    );
}

/// **Test: Non-JSON text falls back to a single unchanged line.**
#[test]
fn non_json_text_falls_back_to_raw_line() {
    assert_eq!(format_response("hello"), vec!["hello"]);
}

/// **Test: Code fences around the JSON are stripped before parsing.**
#[test]
fn fenced_json_is_unwrapped() {
    let raw = "```json\n{\"full_name\": \"Jane Doe\", \"age\": 31, \"verified\": false}\n```";
    assert_eq!(
        format_response(raw),
        vec!["• Full Name: Jane Doe", "• Age: 31", "• Verified: false"]
    );
}

/// **Test: Fences around non-JSON are still stripped for the fallback line.**
#[test]
fn fenced_plain_text_is_unwrapped() {
    assert_eq!(format_response("```\nno record\n```"), vec!["no record"]);
}

/// **Test: Keys keep the source order, not alphabetical order.**
#[test]
fn object_keys_keep_source_order() {
    let lines = format_response(r#"{"zeta": 1, "alpha": 2, "mid_key": 3}"#);
    assert_eq!(lines, vec!["• Zeta: 1", "• Alpha: 2", "• Mid Key: 3"]);
}

/// **Test: Nested objects and arrays of objects render with growing depth.**
#[test]
fn nested_structures_render_recursively() {
    let raw = r#"{
        "owner": {"name": "A", "address": {"city_name": "Pune"}},
        "records": [{"sim_type": "prepaid"}, null]
    }"#;
    assert_eq!(
        format_response(raw),
        vec![
            "• Owner",
            "  • Name: A",
            "  • Address",
            "    • City Name: Pune",
            "• Records",
            "  #1",
            "    • Sim Type: prepaid",
            "  #2",
            "    null",
        ]
    );
}

/// **Test: A top-level array of scalars numbers each element with its value below.**
#[test]
fn top_level_array_of_scalars() {
    assert_eq!(
        format_response(r#"["a", true]"#),
        vec!["#1", "  a", "#2", "  true"]
    );
}

/// **Test: A top-level JSON scalar renders as one line.**
#[test]
fn top_level_scalar_renders_one_line() {
    assert_eq!(format_response(r#""just text""#), vec!["just text"]);
    assert_eq!(format_response("42"), vec!["42"]);
}

/// **Test: Empty containers produce a header but no children.**
#[test]
fn empty_containers_produce_headers_only() {
    assert_eq!(format_response(r#"{"tags": [], "meta": {}}"#), vec!["• Tags", "• Meta"]);
    assert!(format_response("{}").is_empty());
}

/// **Test: Every key of a wide object appears exactly once, title-cased.**
#[test]
fn every_key_appears_exactly_once() {
    let keys = ["first_name", "last_name", "mobile_no", "alt_mobile_no", "circle"];
    let mut obj = serde_json::Map::new();
    for k in keys {
        obj.insert(k.to_string(), json!("v"));
    }
    let lines = format_value(&serde_json::Value::Object(obj), 0);

    assert_eq!(lines.len(), keys.len());
    for expected in ["First Name", "Last Name", "Mobile No", "Alt Mobile No", "Circle"] {
        let hits = lines
            .iter()
            .filter(|l| l.starts_with(&format!("• {}:", expected)))
            .count();
        assert_eq!(hits, 1, "key {expected} should appear once in {lines:?}");
    }
}

/// **Test: format_value honours a starting depth.**
#[test]
fn format_value_with_initial_depth() {
    assert_eq!(format_value(&json!({"k": 1}), 2), vec!["    • K: 1"]);
}

/// **Test: Oversized non-JSON input is truncated to the message ceiling.**
#[test]
fn fallback_line_is_truncated() {
    let raw = "x".repeat(MAX_MESSAGE_CHARS + 500);
    let lines = format_response(&raw);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].chars().count(), MAX_MESSAGE_CHARS);
}

/// **Test: Rendered output never exceeds the ceiling, even for huge JSON with multi-byte text.**
#[test]
fn rendered_output_never_exceeds_ceiling() {
    let items: Vec<_> = (0..2_000).map(|i| json!({"naam": format!("नाम {i}")})).collect();
    let raw = serde_json::to_string(&json!({ "results": items })).unwrap();

    let text = render_lines(&format_response(&raw));

    assert_eq!(text.chars().count(), MAX_MESSAGE_CHARS);
    assert!(text.starts_with("• Results\n  #1\n    • Naam: नाम 0"));
}

/// **Test: render_lines joins with newlines and leaves short output alone.**
#[test]
fn render_lines_joins_with_newlines() {
    assert_eq!(render_lines(&["a", "b", "c"]), "a\nb\nc");
    assert_eq!(render_lines::<String>(&[]), "");
}

/// **Test: Integers beyond 64 bits render digit for digit.**
///
/// **Setup:** Ids wider than `u64`, positive and negative, nested and at the top level.
/// **Expected:** Exact digits; ordinary integers and strings with long digit runs are unchanged.
#[test]
fn wide_integers_render_exactly() {
    assert_eq!(
        format_response(r#"{"id": 123456789012345678901234}"#),
        vec!["• Id: 123456789012345678901234"]
    );
    assert_eq!(
        format_response(r#"{"ids": [-98765432109876543210987, 7], "note": "ref 123456789012345678901234"}"#),
        vec![
            "• Ids",
            "  #1",
            "    -98765432109876543210987",
            "  #2",
            "    7",
            "• Note: ref 123456789012345678901234",
        ]
    );
    assert_eq!(format_response("123456789012345678901234"), vec!["123456789012345678901234"]);
    assert_eq!(
        format_response(r#"{"max": 18446744073709551615}"#),
        vec!["• Max: 18446744073709551615"]
    );
}

/// **Test: Fractions and exponents render in shortest float form.**
#[test]
fn floats_render_in_shortest_form() {
    assert_eq!(
        format_response(r#"{"a": 1.10, "b": 1e20, "c": 2.5}"#),
        vec!["• A: 1.1", "• B: 1e20", "• C: 2.5"]
    );
}
