// crates/domain/src/analyzer.rs
//! 文字列の計測

use crate::{
    model::TextAnalysis,
    value_objects::{ByteCount, RuneCount},
};

const MESSAGE_PREFIX: &str = "analyzed the string \u{201c}";
const MESSAGE_SUFFIX: &str = "\u{201d}";

/// Measures `text` and renders the echo message.
///
/// Holds no state, so repeated or concurrent calls with the same input return
/// the same result.
pub fn analyze(text: &str) -> TextAnalysis {
    TextAnalysis::new(render_message(text), measure_bytes(text), measure_runes(text))
}

/// UTF-8 バイト数
#[inline]
pub fn measure_bytes(text: &str) -> ByteCount {
    ByteCount::new(text.len())
}

/// Unicode スカラー値の個数
#[inline]
pub fn measure_runes(text: &str) -> RuneCount {
    RuneCount::new(bytecount::num_chars(text.as_bytes()))
}

pub fn render_message(text: &str) -> String {
    let mut message = String::with_capacity(MESSAGE_PREFIX.len() + text.len() + MESSAGE_SUFFIX.len());
    message.push_str(MESSAGE_PREFIX);
    message.push_str(text);
    message.push_str(MESSAGE_SUFFIX);
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_wraps_text_in_curly_quotes() {
        assert_eq!(render_message("abc"), "analyzed the string “abc”");
        assert_eq!(render_message(""), "analyzed the string “”");
    }

    #[test]
    fn runes_count_scalar_values_not_graphemes() {
        // e + combining acute accent: one grapheme, two scalar values
        let text = "e\u{301}";
        assert_eq!(measure_runes(text), 2usize);
        assert_eq!(measure_bytes(text), 3usize);
    }
}
