// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{AnalyzerError, RequestError, RequestResult, ResponseError, ResponseResult, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{ByteCount, CharCount, RuneCount};
