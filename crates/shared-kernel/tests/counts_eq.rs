// crates/shared-kernel/tests/counts_eq.rs
use text_analyzer_shared_kernel::{ByteCount, CharCount, RuneCount};

#[test]
fn eq_with_usize_both_sides() {
    let count = RuneCount::from(7);
    assert!(count == 7usize);
    assert!(7usize == count);
}

#[test]
fn charcount_mirrors_bytecount() {
    let bytes = ByteCount::from(15);
    let chars = CharCount::from(bytes);
    assert_eq!(chars, bytes);
    assert_eq!(chars.value(), 15);
}

#[test]
fn default_matches_zero() {
    assert_eq!(ByteCount::default(), ByteCount::zero());
    assert!(RuneCount::default().is_zero());
    assert_eq!(CharCount::ZERO, CharCount::zero());
}

#[test]
fn display_is_plain_number() {
    assert_eq!(ByteCount::from(42).to_string(), "42");
}
