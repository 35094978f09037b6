//! Count value objects, re-exported from the shared kernel.

pub use text_analyzer_shared_kernel::value_objects::{ByteCount, CharCount, RuneCount};
