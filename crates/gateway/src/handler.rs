// crates/gateway/src/handler.rs
use lambda_runtime::LambdaEvent;
use serde::Serialize;
use tracing::{debug, error, info, info_span, warn};

use text_analyzer_domain::{TextAnalysis, analyze};
use text_analyzer_shared_kernel::{AnalyzerError, Result};

use crate::{
    codec,
    event::{GatewayRequest, GatewayResponse},
};

/// Lambda entry point. Never returns `Err`; every failure becomes a 4xx/5xx response.
///
/// # Errors
///
/// The signature is dictated by `lambda_runtime::service_fn`.
pub async fn function_handler(
    event: LambdaEvent<GatewayRequest>,
) -> std::result::Result<GatewayResponse, lambda_runtime::Error> {
    let (request, context) = event.into_parts();
    let span = info_span!(
        "invocation",
        request_id = %context.request_id,
        method = request.http_method.as_deref().unwrap_or("-"),
        path = request.path.as_deref().unwrap_or("-")
    );
    let _entered = span.enter();

    Ok(handle(&request))
}

pub fn handle(request: &GatewayRequest) -> GatewayResponse {
    handle_body(request.body())
}

/// 生のボディ文字列を 200/400/500 のいずれかのレスポンスに変換する。
pub fn handle_body(body: &str) -> GatewayResponse {
    respond(analyze_body(body))
}

fn analyze_body(body: &str) -> Result<TextAnalysis> {
    let request = codec::decode_request(body)?;
    let analysis = analyze(request.text());
    debug!(
        byte_count = analysis.byte_count().value(),
        rune_count = analysis.rune_count().value(),
        "analyzed text"
    );
    Ok(analysis)
}

fn respond<T: Serialize>(outcome: Result<T>) -> GatewayResponse {
    let encoded = outcome.and_then(|payload| Ok(codec::encode_response(&payload)?));
    match encoded {
        Ok(body) => {
            info!(status = 200, "request handled");
            GatewayResponse::json(200, body)
        }
        Err(err) => error_response(&err),
    }
}

fn error_response(err: &AnalyzerError) -> GatewayResponse {
    let status = err.status_code();
    match err {
        AnalyzerError::MalformedRequest(_) => warn!(status, error = %err, "rejected request"),
        AnalyzerError::SerializationFailure(_) => error!(status, error = %err, "failed to encode response"),
    }
    GatewayResponse::json(status, codec::error_body(err))
}
