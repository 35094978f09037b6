// crates/gateway/src/codec.rs
use serde::Serialize;
use serde_json::Value;

use text_analyzer_domain::AnalysisRequest;
use text_analyzer_shared_kernel::{AnalyzerError, RequestError, RequestResult, ResponseResult};

/// Decodes a proxy body into an [`AnalysisRequest`].
///
/// The top level must be a JSON object. A missing `text` field is accepted and
/// read as an empty string; a `text` of any type other than string is not.
///
/// # Errors
///
/// Returns [`RequestError`] when the body is not valid JSON, is not an object,
/// or carries a mistyped `text` field.
pub fn decode_request(body: &str) -> RequestResult<AnalysisRequest> {
    let value: Value = serde_json::from_str(body).map_err(|e| RequestError::InvalidJson {
        details: e.to_string(),
    })?;

    if !value.is_object() {
        return Err(RequestError::NotAnObject { found: json_kind(&value) });
    }

    serde_json::from_value(value).map_err(|e| RequestError::InvalidField {
        details: e.to_string(),
    })
}

/// # Errors
///
/// Propagates serializer failures as [`ResponseError`](text_analyzer_shared_kernel::ResponseError).
pub fn encode_response<T: Serialize>(value: &T) -> ResponseResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// `{"error": "..."}` body for a failed invocation.
pub fn error_body(err: &AnalyzerError) -> String {
    format!(r#"{{"error": "{}"}}"#, err.public_message())
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_objects_by_kind() {
        for (body, kind) in [("[]", "array"), ("null", "null"), ("\"x\"", "string"), ("1", "number")] {
            match decode_request(body) {
                Err(RequestError::NotAnObject { found }) => assert_eq!(found, kind),
                other => panic!("unexpected result for {body}: {other:?}"),
            }
        }
    }

    #[test]
    fn malformed_json_is_invalid_json() {
        assert!(matches!(
            decode_request(r#"{"invalid": json}"#),
            Err(RequestError::InvalidJson { .. })
        ));
        assert!(matches!(decode_request(""), Err(RequestError::InvalidJson { .. })));
    }

    #[test]
    fn mistyped_text_is_invalid_field() {
        assert!(matches!(
            decode_request(r#"{"text": ["a"]}"#),
            Err(RequestError::InvalidField { .. })
        ));
    }

    #[test]
    fn error_bodies_match_wire_format() {
        let bad: AnalyzerError = RequestError::InvalidJson { details: String::new() }.into();
        assert_eq!(error_body(&bad), r#"{"error": "Invalid JSON format"}"#);
    }
}
