// crates/shared-kernel/tests/error_mapping.rs
use text_analyzer_shared_kernel::{AnalyzerError, RequestError, ResponseError};

#[test]
fn malformed_request_maps_to_400() {
    let err: AnalyzerError = RequestError::NotAnObject { found: "array" }.into();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.public_message(), "Invalid JSON format");
    assert!(err.to_string().contains("Expected a JSON object, found array"));
}

#[test]
fn serialization_failure_maps_to_500() {
    let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
    let err: AnalyzerError = ResponseError::from(json_err).into();
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.public_message(), "Internal server error");
    assert!(err.to_string().starts_with("Serialization failure: Failed to serialize JSON response"));
}
