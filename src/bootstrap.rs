// src/bootstrap.rs
use std::io::{Read, Write};

use anyhow::Context;
use lambda_runtime::service_fn;
use tracing::info;

use text_analyzer_gateway::{GatewayRequest, GatewayResponse, function_handler, handle};

use crate::cli::InvokeArgs;

/// Lambda ランタイムのイベントループ。プロセス終了まで戻らない。
///
/// # Errors
///
/// Fails when the runtime cannot reach the Lambda runtime API.
pub async fn serve() -> Result<(), lambda_runtime::Error> {
    info!("starting lambda runtime");
    lambda_runtime::run(service_fn(function_handler)).await
}

/// Runs one invocation locally and writes the proxy response as JSON.
///
/// The body comes from `--body`, falling back to `input`. 4xx/5xx responses are
/// still written and returned as `Ok`.
///
/// # Errors
///
/// Fails only when `input` cannot be read or `output` cannot be written.
pub fn invoke<R: Read, W: Write>(args: &InvokeArgs, mut input: R, mut output: W) -> anyhow::Result<GatewayResponse> {
    let body = match &args.body {
        Some(body) => body.clone(),
        None => {
            let mut buf = String::new();
            input
                .read_to_string(&mut buf)
                .context("failed to read request body from stdin")?;
            buf
        }
    };

    let response = handle(&GatewayRequest::with_body(body));

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .context("failed to encode gateway response")?;

    writeln!(output, "{rendered}").context("failed to write response")?;
    Ok(response)
}
