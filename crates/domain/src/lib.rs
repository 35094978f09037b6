//! # Domain
//!
//! Text measurement and the data carried in and out of one invocation.
//!
//! - [`analyzer`]: the pure `analyze` function and its measurements
//! - [`model`]: [`AnalysisRequest`] and [`TextAnalysis`]

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analyzer;
pub mod model;
pub mod value_objects;

pub use analyzer::{analyze, measure_bytes, measure_runes, render_message};
pub use model::{AnalysisRequest, TextAnalysis};
