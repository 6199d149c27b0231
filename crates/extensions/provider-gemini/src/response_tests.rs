use super::*;
use formfill_protocols::FieldValue;

#[test]
fn test_extract_plain_array() {
    assert_eq!(extract_array(r#"[{"value": "a"}]"#), Some(r#"[{"value": "a"}]"#));
}

#[test]
fn test_extract_from_prose_and_fences() {
    let text = "Here you go:\n```json\n[\n  {\"value\": \"Jane\"}\n]\n```\nEnjoy!";
    assert_eq!(extract_array(text), Some("[\n  {\"value\": \"Jane\"}\n]"));
}

#[test]
fn test_extract_spans_first_to_last_bracket() {
    let text = "[1] and [2]";
    assert_eq!(extract_array(text), Some("[1] and [2]"));
}

#[test]
fn test_extract_missing_or_reversed() {
    assert_eq!(extract_array("no array here"), None);
    assert_eq!(extract_array("only an opening ["), None);
    assert_eq!(extract_array("] backwards ["), None);
}

#[test]
fn test_parse_values_mixed_types() {
    let values = parse_values(
        r#"Sure! [{"value": "Jane"}, {"value": true}, {"value": 42}, {"value": null}, "stray", {}]"#,
    )
    .unwrap();

    assert_eq!(values.len(), 6);
    assert_eq!(values[0].value, Some(FieldValue::text("Jane")));
    assert_eq!(values[1].value, Some(FieldValue::Flag(true)));
    assert_eq!(values[2].supplied().map(FieldValue::as_text), Some("42".to_string()));
    assert!(values[3].value.is_none());
    assert!(values[4].value.is_none());
    assert!(values[5].value.is_none());
}

#[test]
fn test_parse_values_no_array() {
    let err = parse_values("I cannot help with that.").unwrap_err();
    assert!(matches!(err, GenerationError::MissingArray(_)));
    assert_eq!(err.to_string(), "Could not parse JSON response from Gemini");
}

#[test]
fn test_parse_values_invalid_json() {
    let err = parse_values(r#"[{"value": "unterminated}]"#).unwrap_err();
    assert!(matches!(err, GenerationError::InvalidJson(_)));
}

#[test]
fn test_parse_values_two_arrays() {
    // Two arrays joined by prose are not valid JSON.
    let err = parse_values("[1] or [2]").unwrap_err();
    assert!(matches!(err, GenerationError::InvalidJson(_)));
}

#[test]
fn test_parse_empty_array() {
    assert!(parse_values("[]").unwrap().is_empty());
}
