// crates/domain/src/model/analysis.rs
use serde::{Deserialize, Serialize};

use crate::value_objects::{ByteCount, CharCount, RuneCount};

/// 1 回の解析結果。フィールド順がそのまま JSON のキー順になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysis {
    message: String,
    char_count: CharCount,
    byte_count: ByteCount,
    rune_count: RuneCount,
}

impl TextAnalysis {
    /// `char_count` is derived from `byte_count`; the two always agree.
    pub fn new(message: String, byte_count: ByteCount, rune_count: RuneCount) -> Self {
        Self {
            message,
            char_count: CharCount::from(byte_count),
            byte_count,
            rune_count,
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn char_count(&self) -> CharCount {
        self.char_count
    }

    #[inline]
    pub fn byte_count(&self) -> ByteCount {
        self.byte_count
    }

    #[inline]
    pub fn rune_count(&self) -> RuneCount {
        self.rune_count
    }
}
