// crates/domain/tests/analyze_examples.rs
use text_analyzer_domain::analyze;

#[test]
fn empty_text_has_zero_counts() {
    let analysis = analyze("");
    assert!(analysis.byte_count().is_zero());
    assert!(analysis.rune_count().is_zero());
    assert!(analysis.char_count().is_zero());
    assert_eq!(analysis.message(), "analyzed the string “”");
}

#[test]
fn english_text() {
    let analysis = analyze("Hello World");
    assert_eq!(analysis.rune_count(), 11usize);
    assert_eq!(analysis.byte_count(), 11usize);
    assert_eq!(analysis.char_count(), 11usize);
}

#[test]
fn japanese_text() {
    let analysis = analyze("こんにちは");
    assert_eq!(analysis.rune_count(), 5usize);
    assert_eq!(analysis.byte_count(), 15usize);
    assert_eq!(analysis.char_count(), 15usize);
    assert_eq!(analysis.message(), "analyzed the string “こんにちは”");
}

#[test]
fn emoji_counts_four_bytes_per_scalar() {
    let analysis = analyze("🦀🦀");
    assert_eq!(analysis.rune_count(), 2usize);
    assert_eq!(analysis.byte_count(), 8usize);
}

#[test]
fn repeated_calls_are_identical() {
    let text = "mixed ASCII と 日本語 🦀";
    assert_eq!(analyze(text), analyze(text));
}

#[test]
fn serializes_with_fixed_field_order() {
    let json = serde_json::to_string(&analyze("é")).expect("serializes");
    assert_eq!(
        json,
        r#"{"message":"analyzed the string “é”","char_count":2,"byte_count":2,"rune_count":1}"#
    );
}
