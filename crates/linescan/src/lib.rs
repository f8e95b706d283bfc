//! A latching, single-lookahead scanner for structured console input.
//!
//! `linescan` reads whitespace-delimited tokens, quoted strings, and
//! strictly range-checked numbers from any blocking byte stream, one byte of
//! lookahead at a time. It is meant for small CLI programs that want safe
//! interactive input without a parser generator.
//!
//! The defining behavior is the *latch*: the first malformed token poisons
//! the [`Scanner`], and every later operation returns the same error without
//! reading further. Callers either check each `Result`, or run a batch of
//! reads and ask [`Scanner::is_poisoned`] once at the end. The latch is
//! never cleared; recovery is a new `Scanner` (and, mid-stream,
//! [`Scanner::discard_line`] to resynchronize at a line boundary).
//!
//! ```
//! use linescan::Scanner;
//!
//! let mut scanner = Scanner::new(&b"launch 3 2.5\n"[..]);
//! assert_eq!(scanner.next_token(16).unwrap(), "launch");
//! assert_eq!(scanner.next_integer(0, 10).unwrap(), 3);
//! assert!((scanner.next_float(0.0, 100.0).unwrap() - 2.5).abs() < 1e-9);
//! ```

mod error;
mod scanner;
mod source;

#[cfg(test)]
mod tests;

pub use error::ScanError;
pub use scanner::Scanner;
pub use source::ByteSource;
