//! # Gateway
//!
//! Adapter between API Gateway proxy events and the text analyzer.
//!
//! - [`event`]: proxy request/response shapes
//! - [`codec`]: JSON decoding of requests and encoding of responses
//! - [`handler`]: the 200/400/500 mapping and the Lambda entry point

// crates/gateway/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod codec;
pub mod event;
pub mod handler;

pub use event::{GatewayRequest, GatewayResponse};
pub use handler::{function_handler, handle, handle_body};
