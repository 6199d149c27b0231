use super::*;

#[test]
fn test_generation_error_api() {
    let err = GenerationError::Api {
        provider: "Gemini".to_string(),
        status: 400,
        message: "API key not valid".to_string(),
    };
    assert_eq!(err.to_string(), "Gemini API error: API key not valid");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn test_generation_error_empty_response() {
    let err = GenerationError::EmptyResponse("Gemini".to_string());
    assert_eq!(err.to_string(), "No data generated from Gemini API");
    assert_eq!(err.status(), None);
}

#[test]
fn test_generation_error_missing_array() {
    let err = GenerationError::MissingArray("Gemini".to_string());
    assert_eq!(err.to_string(), "Could not parse JSON response from Gemini");
}

#[test]
fn test_generation_error_invalid_json() {
    let err = GenerationError::InvalidJson("expected value at line 1".to_string());
    assert!(err.to_string().contains("Invalid JSON array"));
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn test_generation_error_network() {
    let err = GenerationError::Network("Connection refused".to_string());
    assert!(err.to_string().contains("Network error"));
}

#[test]
fn test_generation_error_debug() {
    let err = GenerationError::InvalidRequest("empty credential".to_string());
    let debug_str = format!("{:?}", err);
    assert!(debug_str.contains("InvalidRequest"));
}
