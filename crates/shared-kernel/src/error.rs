// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Every variant is recovered inside the gateway and turned into an HTTP
/// response; nothing here is ever surfaced to the Lambda runtime.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] RequestError),

    #[error("Serialization failure: {0}")]
    SerializationFailure(#[from] ResponseError),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

impl AnalyzerError {
    /// HTTP status code the gateway responds with.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MalformedRequest(_) => 400,
            Self::SerializationFailure(_) => 500,
        }
    }

    /// Fixed, client-facing message. Details stay in the logs.
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::MalformedRequest(_) => "Invalid JSON format",
            Self::SerializationFailure(_) => "Internal server error",
        }
    }
}

/// Errors raised while decoding an inbound request body.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Body is not valid JSON: {details}")]
    InvalidJson { details: String },

    #[error("Expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Invalid request field: {details}")]
    InvalidField { details: String },
}

pub type RequestResult<T> = std::result::Result<T, RequestError>;

/// Errors raised while encoding an outbound response body.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Failed to serialize {format} response: {details}")]
    Serialization { format: String, details: String },
}

pub type ResponseResult<T> = std::result::Result<T, ResponseError>;

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}
