use std::io;

use thiserror::Error;

/// Errors detected while scanning console input.
///
/// Every variant is recorded on the [`Scanner`](crate::Scanner) latch when it
/// is first produced; subsequent operations on the same scanner return a
/// clone of the latched value without touching the source. The I/O variant
/// therefore carries an [`io::ErrorKind`] rather than an [`io::Error`], so
/// the latch stays `Clone + PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The underlying byte source reported a read failure. End-of-stream is
    /// not an error and never produces this variant.
    #[error("I/O error when reading: {0}")]
    Stream(io::ErrorKind),
    /// A token or quoted string exceeded the caller's buffer budget
    /// mid-stream.
    #[error("input is out of length")]
    OverLength,
    /// `next_quoted` found a non-whitespace byte other than `"` first.
    #[error("expected string in quotation marks")]
    ExpectedQuote,
    /// The stream ended before the closing `"` of a quoted string.
    #[error("expected '\"' at the end")]
    UnterminatedQuote,
    /// A `-` sign was not followed by a decimal digit.
    #[error("expected number after '-'")]
    ExpectedDigitAfterSign,
    /// A byte that is neither a digit nor whitespace appeared in integer
    /// input.
    #[error("unknown byte {0:#04x} in number input")]
    InvalidDigit(u8),
    /// A byte that is neither a digit, a single `.`, nor whitespace appeared
    /// in floating-point input.
    #[error("unknown byte {0:#04x} in float input")]
    InvalidNumericChar(u8),
    /// The accumulated number overflowed 64 bits or fell outside the
    /// caller-supplied bounds.
    #[error("number input is out of range")]
    NumberOutOfRange,
    /// The stream ended where a value was required.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
