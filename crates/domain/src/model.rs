// crates/domain/src/model.rs
pub mod analysis;
pub mod request;

pub use analysis::TextAnalysis;
pub use request::AnalysisRequest;
