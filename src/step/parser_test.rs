// ABOUTME: Tests for the step parser - tolerant handling of untrusted text.
// ABOUTME: Covers objects, arrays, scalars, and malformed input.

use super::*;

#[test]
fn test_invalid_json_wraps_raw_as_output() {
    let raw = "the weather looks nice today";
    let parsed = parse_response(raw);

    assert_eq!(parsed.steps.len(), 1);
    assert_eq!(
        parsed.primary,
        Some(Step::Output {
            content: raw.to_string()
        })
    );
}

#[test]
fn test_truncated_json_wraps_raw_as_output() {
    let raw = "{\"step\": \"OUTPUT\", \"content\": \"unfinis";
    let parsed = parse_response(raw);

    assert_eq!(
        parsed.primary,
        Some(Step::Output {
            content: raw.to_string()
        })
    );
}

#[test]
fn test_object_start() {
    let parsed = parse_response(r#"{"step":"START","content":"weather in London"}"#);
    assert_eq!(
        parsed.primary,
        Some(Step::Start {
            content: "weather in London".to_string()
        })
    );
}

#[test]
fn test_object_plan() {
    let parsed = parse_response(r#"{"step":"PLAN","content":"call the weather tool"}"#);
    assert_eq!(
        parsed.primary,
        Some(Step::Plan {
            content: "call the weather tool".to_string()
        })
    );
}

#[test]
fn test_object_tool() {
    let parsed = parse_response(r#"{"step":"TOOL","tool":"get_weather","input":"London"}"#);
    assert_eq!(
        parsed.primary,
        Some(Step::Tool {
            tool: "get_weather".to_string(),
            input: "London".to_string()
        })
    );
    assert_eq!(parsed.steps.len(), 1);
    assert!(parsed.steps[0].is_tool());
}

#[test]
fn test_object_observe() {
    let parsed =
        parse_response(r#"{"step":"OBSERVE","tool":"get_weather","input":"London","output":"Sunny"}"#);
    assert_eq!(
        parsed.primary,
        Some(Step::Observe {
            tool: "get_weather".to_string(),
            input: "London".to_string(),
            output: "Sunny".to_string()
        })
    );
}

#[test]
fn test_object_output() {
    let parsed = parse_response(r#"{"step":"OUTPUT","content":"done"}"#);
    assert_eq!(
        parsed.primary,
        Some(Step::Output {
            content: "done".to_string()
        })
    );
}

#[test]
fn test_unknown_step_tag() {
    let parsed = parse_response(r#"{"step":"THINK","content":"hmm"}"#);
    assert_eq!(
        parsed.primary,
        Some(Step::Unknown {
            content: Some("hmm".to_string())
        })
    );
}

#[test]
fn test_object_missing_step_field() {
    let parsed = parse_response(r#"{"content":"no step here"}"#);
    assert_eq!(
        parsed.primary,
        Some(Step::Unknown {
            content: Some("no step here".to_string())
        })
    );
}

#[test]
fn test_tool_missing_fields_default_empty() {
    let parsed = parse_response(r#"{"step":"TOOL"}"#);
    assert_eq!(
        parsed.primary,
        Some(Step::Tool {
            tool: String::new(),
            input: String::new()
        })
    );
}

#[test]
fn test_array_preserves_order_and_all_entries() {
    let raw = r#"[
        {"step":"PLAN","content":"two cities"},
        {"step":"TOOL","tool":"get_weather","input":"Paris"},
        {"step":"TOOL","tool":"get_weather","input":"Tokyo"}
    ]"#;
    let parsed = parse_response(raw);

    assert_eq!(parsed.primary, None);
    assert_eq!(parsed.steps.len(), 3);
    assert_eq!(
        parsed.steps[0],
        Step::Plan {
            content: "two cities".to_string()
        }
    );
    assert_eq!(
        parsed.steps[1],
        Step::Tool {
            tool: "get_weather".to_string(),
            input: "Paris".to_string()
        }
    );
    assert_eq!(
        parsed.steps[2],
        Step::Tool {
            tool: "get_weather".to_string(),
            input: "Tokyo".to_string()
        }
    );
}

#[test]
fn test_empty_array() {
    let parsed = parse_response("[]");
    assert_eq!(parsed.primary, None);
    assert!(parsed.steps.is_empty());
}

#[test]
fn test_array_with_non_object_elements() {
    let parsed = parse_response(r#"[1, "x"]"#);
    assert_eq!(parsed.primary, None);
    assert_eq!(parsed.steps.len(), 2);
    assert_eq!(parsed.steps[0], Step::Unknown { content: None });
    assert_eq!(parsed.steps[1], Step::Unknown { content: None });
}

#[test]
fn test_bare_string_becomes_output() {
    let parsed = parse_response(r#""hello there""#);
    assert_eq!(
        parsed.primary,
        Some(Step::Output {
            content: "hello there".to_string()
        })
    );
}

#[test]
fn test_number_becomes_output() {
    let parsed = parse_response("42");
    assert_eq!(
        parsed.primary,
        Some(Step::Output {
            content: "42".to_string()
        })
    );
}

#[test]
fn test_null_becomes_output() {
    let parsed = parse_response("null");
    assert_eq!(
        parsed.primary,
        Some(Step::Output {
            content: "null".to_string()
        })
    );
}

#[test]
fn test_non_string_fields_default_empty() {
    let parsed = parse_response(r#"{"step":"OUTPUT","content":7}"#);
    assert_eq!(
        parsed.primary,
        Some(Step::Output {
            content: String::new()
        })
    );
}
