//! Lambda bootstrap for the text analyzer: CLI, logging, and the runtime loop.

// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod cli;
pub mod logging;

pub use text_analyzer_domain::{TextAnalysis, analyze};
pub use text_analyzer_gateway::{GatewayRequest, GatewayResponse};
