use rstest::rstest;

use super::scan;

#[rstest]
#[case::plain(b"hello world", 16, "hello")]
#[case::exact_budget_then_space(b"abcd rest", 5, "abcd")]
#[case::exact_budget_then_newline(b"abcd\nrest", 5, "abcd")]
#[case::truncated_at_eof(b"abcd", 5, "abcd")]
#[case::leading_whitespace(b" \t\n  tok", 16, "tok")]
#[case::punctuation_is_content(b"a-b.c! x", 16, "a-b.c!")]
#[case::empty_at_eof(b"   ", 8, "")]
fn token_capture(#[case] input: &[u8], #[case] max_len: usize, #[case] expected: &str) {
    let mut s = scan(input);
    assert_eq!(s.next_token(max_len).unwrap(), expected);
    assert!(!s.is_poisoned());
}

#[test]
fn token_series_consumes_separators() {
    let mut s = scan(b"one two\tthree\nfour");
    for expected in ["one", "two", "three", "four"] {
        assert_eq!(s.next_token(8).unwrap(), expected);
    }
    // Stream exhausted: further captures are empty, never errors.
    assert_eq!(s.next_token(8).unwrap(), "");
    assert!(!s.is_poisoned());
}

#[rstest]
#[case::simple(b"\"hello\"", 8, "\"hello\"")]
#[case::interior_whitespace(b"  \"a b\tc\" tail", 32, "\"a b\tc\"")]
#[case::empty_string(b"\"\"", 8, "\"\"")]
#[case::closing_quote_on_budget_edge(b"\"abcd\"", 7, "\"abcd\"")]
fn quoted_capture(#[case] input: &[u8], #[case] max_len: usize, #[case] expected: &str) {
    let mut s = scan(input);
    assert_eq!(s.next_quoted(max_len).unwrap(), expected);
    assert!(!s.is_poisoned());
}

#[test]
fn quoted_partial_accepted_at_newline_boundary() {
    // Budget fills right as a newline is read: lenient partial capture, the
    // newline included, no closing quote required.
    let mut s = scan(b"\"ab\nmore");
    assert_eq!(s.next_quoted(5).unwrap(), "\"ab\n");
    assert!(!s.is_poisoned());
}

#[rstest]
#[case::negative(b"-42 ", -100, 100, -42)]
#[case::positive(b"37\n", -100, 100, 37)]
#[case::zero(b"0", -1, 1, 0)]
#[case::leading_zeros(b"007 ", 0, 100, 7)]
#[case::i64_max(b"9223372036854775807", i64::MIN, i64::MAX, i64::MAX)]
#[case::i64_min(b"-9223372036854775808", i64::MIN, i64::MAX, i64::MIN)]
#[case::bound_inclusive_low(b"-100", -100, 100, -100)]
#[case::bound_inclusive_high(b"100", -100, 100, 100)]
fn integer_capture(
    #[case] input: &[u8],
    #[case] min: i64,
    #[case] max: i64,
    #[case] expected: i64,
) {
    let mut s = scan(input);
    assert_eq!(s.next_integer(min, max).unwrap(), expected);
    assert!(!s.is_poisoned());
}

#[rstest]
#[case::at_max(b"255", 255, 255)]
#[case::zero(b"0", 255, 0)]
#[case::large(b"4000000000 ", u64::MAX, 4_000_000_000)]
fn unsigned_capture(#[case] input: &[u8], #[case] max: u64, #[case] expected: u64) {
    let mut s = scan(input);
    assert_eq!(s.next_unsigned(max).unwrap(), expected);
    assert!(!s.is_poisoned());
}

#[rstest]
#[case::simple(b"3.14 ", 3.14)]
#[case::negative(b"-2.5", -2.5)]
#[case::negative_fraction_only_part(b"-0.5", -0.5)]
#[case::no_fraction(b"3", 3.0)]
#[case::trailing_point(b"10.", 10.0)]
#[case::leading_point(b".5", 0.5)]
#[case::long_fraction(b"0.0625", 0.0625)]
fn float_capture(#[case] input: &[u8], #[case] expected: f64) {
    let mut s = scan(input);
    let got = s.next_float(-1000.0, 1000.0).unwrap();
    assert!((got - expected).abs() < 1e-9, "got {got}, expected {expected}");
    assert!(!s.is_poisoned());
}

#[test]
fn width_conveniences_cover_their_full_ranges() {
    let mut s = scan(b"-128 127 -32768 65535 4294967295 1.5");
    assert_eq!(s.next_i8().unwrap(), i8::MIN);
    assert_eq!(s.next_i8().unwrap(), i8::MAX);
    assert_eq!(s.next_i16().unwrap(), i16::MIN);
    assert_eq!(s.next_u16().unwrap(), u16::MAX);
    assert_eq!(s.next_u32().unwrap(), u32::MAX);
    assert!((s.next_f64().unwrap() - 1.5).abs() < 1e-9);
    assert!(!s.is_poisoned());
}

#[test]
fn mixed_line_of_fields() {
    let mut s = scan(b"move \"north east\" 3 0.5\n");
    assert_eq!(s.next_token(8).unwrap(), "move");
    assert_eq!(s.next_quoted(32).unwrap(), "\"north east\"");
    assert_eq!(s.next_integer(0, 10).unwrap(), 3);
    assert!((s.next_float(0.0, 1.0).unwrap() - 0.5).abs() < 1e-9);
    assert!(!s.is_poisoned());
}
