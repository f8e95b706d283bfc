//! Scanner: single-lookahead token extraction over a blocking byte source.
//!
//! What it does
//! - Pulls bytes one at a time from a [`ByteSource`], keeping exactly one
//!   byte of lookahead in `current`.
//! - Skips whitespace (space, tab, and newline only), captures bounded
//!   raw tokens and quoted strings, and converts signed/unsigned integers
//!   and floats with strict overflow detection.
//! - Latches the first error it sees. A latched scanner refuses all further
//!   work: every operation short-circuits with a clone of the stored error
//!   and performs no source reads.
//!
//! Invariants
//! - `current` is `Some` only after a successful advance; `None` means the
//!   stream is exhausted or nothing has been read yet.
//! - The latch is write-once from the scanner's point of view. Nothing in
//!   this module ever clears it; recovery means building a new `Scanner`.
//! - End-of-stream is not an error by itself. Operations decide whether EOF
//!   at their position is acceptable (token capture: yes; quoted capture and
//!   numbers: no).
//! - When an error latches mid-line, the remainder of the line is drained
//!   first, so the stream is left at a line boundary for whoever inspects
//!   the wreckage. Stream failures skip the drain (the source is dead).
//!
//! Typical loop
//! ```ignore
//! let mut scanner = Scanner::new(io::stdin().lock());
//! let name = scanner.next_token(32)?;
//! let age = scanner.next_unsigned(130)?;
//! ```

use bstr::BString;

use crate::{error::ScanError, source::ByteSource};

/// The exact whitespace set: space, tab, newline. Other control bytes are
/// ordinary token content.
#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n')
}

/// Why a bounded capture loop stopped.
///
/// The boundary policy (which endings are a success and which latch an
/// error) is decided per operation by matching on this, rather than being
/// implicit in a length comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureEnd {
    /// The operation's terminating byte was seen: whitespace for raw
    /// tokens, the closing `"` for quoted strings.
    Terminator,
    /// The stream ended mid-capture.
    StreamEnd,
    /// The byte budget filled with more content pending.
    BudgetFull,
}

/// Which shapes the shared digit-accumulation core accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberMode {
    /// Optional `-`, digits only.
    Signed,
    /// Digits only; `-` is an invalid digit here.
    Unsigned,
    /// Optional `-`, digits, at most one `.`.
    Float,
}

impl NumberMode {
    fn allows_sign(self) -> bool {
        !matches!(self, NumberMode::Unsigned)
    }
}

/// Raw output of the digit-accumulation core, before bound checks.
///
/// `int_part` carries the sign; `negative` is kept separately so the
/// fractional part of values like `-0.5` is subtracted rather than added.
struct Digits {
    negative: bool,
    int_part: i64,
    frac: f64,
}

impl Digits {
    fn float_value(&self) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "floating-point capture is inherently approximate"
        )]
        let int_part = self.int_part as f64;
        if self.negative {
            int_part - self.frac
        } else {
            int_part + self.frac
        }
    }
}

/// A latching scanner over a blocking byte stream.
///
/// Construct one per input stream. All operations take `&mut self` and
/// mutate the lookahead byte and the latch in place; callers needing
/// concurrent scanning own separate scanners over separate sources.
///
/// Operations return `Result`, and additionally record the first error on an
/// internal latch. Once latched, every subsequent operation returns that
/// same error again without reading the source, which lets a caller run a
/// whole line of reads and check once at the end:
///
/// ```
/// use linescan::Scanner;
///
/// let mut scanner = Scanner::new(&b"alice \"in wonderland\" -7"[..]);
/// let name = scanner.next_token(16);
/// let title = scanner.next_quoted(32);
/// let score = scanner.next_integer(-10, 10);
/// assert!(!scanner.is_poisoned());
/// assert_eq!(score.unwrap(), -7);
/// ```
#[derive(Debug)]
pub struct Scanner<S> {
    source: S,
    /// One byte of lookahead; `None` before the first read and at EOF.
    current: Option<u8>,
    /// First error seen; never cleared by this type.
    latch: Option<ScanError>,
}

impl<S: ByteSource> Scanner<S> {
    /// Binds a scanner to a byte source. The source is owned for the
    /// scanner's lifetime; reclaim it with [`into_inner`](Self::into_inner).
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: None,
            latch: None,
        }
    }

    /// `true` once any operation has latched an error.
    pub fn is_poisoned(&self) -> bool {
        self.latch.is_some()
    }

    /// The latched error, if any.
    pub fn last_error(&self) -> Option<&ScanError> {
        self.latch.as_ref()
    }

    /// Releases the underlying byte source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Consumes and drops bytes through the next newline (or EOF), so the
    /// next scan starts at a clean line boundary.
    ///
    /// A no-op when the scanner is already poisoned (the error path drained
    /// the line when it latched) or when the lookahead byte is already
    /// whitespace: calling this after a successful scan must not eat the
    /// following line.
    pub fn discard_line(&mut self) {
        if self.latch.is_some() {
            return;
        }
        if matches!(self.current, Some(b) if is_whitespace(b)) {
            return;
        }
        while let Ok(Some(byte)) = self.advance() {
            if byte == b'\n' {
                break;
            }
        }
    }

    /// Skips leading whitespace, then captures a maximal run of
    /// non-whitespace bytes, at most `max_len - 1` of them.
    ///
    /// End-of-stream mid-token is graceful truncation, not a failure: the
    /// bytes collected so far are returned, possibly none. The terminating
    /// whitespace byte is consumed but not included.
    ///
    /// # Errors
    ///
    /// [`ScanError::OverLength`] when the budget fills and the next byte is
    /// neither whitespace nor EOF; [`ScanError::Stream`] on read failure.
    pub fn next_token(&mut self, max_len: usize) -> Result<BString, ScanError> {
        self.check_latch()?;
        let budget = max_len.saturating_sub(1);
        let mut text = BString::from(Vec::with_capacity(budget.min(64)));

        let mut byte = self.skip_whitespace()?;
        let end = loop {
            let Some(b) = byte else {
                break CaptureEnd::StreamEnd;
            };
            if is_whitespace(b) {
                break CaptureEnd::Terminator;
            }
            if text.len() == budget {
                break CaptureEnd::BudgetFull;
            }
            text.push(b);
            byte = self.advance()?;
        };

        match end {
            // Losing the delimiter at stream end is not a failure.
            CaptureEnd::Terminator | CaptureEnd::StreamEnd => Ok(text),
            CaptureEnd::BudgetFull => Err(self.poison(ScanError::OverLength)),
        }
    }

    /// Skips leading whitespace, then captures a `"`-delimited string
    /// verbatim, interior whitespace included, returning it with both
    /// quote bytes, at most `max_len - 1` bytes in total.
    ///
    /// One deliberate leniency: if the budget fills before the closing quote
    /// and the byte at that point is a newline, the partial capture is
    /// returned as a success. This boundary policy is part of the contract.
    ///
    /// # Errors
    ///
    /// [`ScanError::ExpectedQuote`] when the first significant byte is not
    /// `"`; [`ScanError::UnexpectedEndOfInput`] when the stream ends before
    /// it; [`ScanError::UnterminatedQuote`] when the stream ends inside the
    /// string; [`ScanError::OverLength`] when the budget fills mid-stream.
    pub fn next_quoted(&mut self, max_len: usize) -> Result<BString, ScanError> {
        self.check_latch()?;
        let budget = max_len.saturating_sub(1);

        let Some(first) = self.skip_whitespace()? else {
            return Err(self.poison(ScanError::UnexpectedEndOfInput));
        };
        if first != b'"' {
            return Err(self.poison(ScanError::ExpectedQuote));
        }

        let mut text = BString::from(vec![b'"']);
        let end = loop {
            if text.len() >= budget {
                break CaptureEnd::BudgetFull;
            }
            let Some(byte) = self.advance()? else {
                break CaptureEnd::StreamEnd;
            };
            text.push(byte);
            if byte == b'"' {
                break CaptureEnd::Terminator;
            }
        };

        match end {
            CaptureEnd::Terminator => Ok(text),
            CaptureEnd::StreamEnd => Err(self.poison(ScanError::UnterminatedQuote)),
            // The lenient boundary: a newline on the budget edge is an
            // acceptable partial capture.
            CaptureEnd::BudgetFull if self.current == Some(b'\n') => Ok(text),
            CaptureEnd::BudgetFull => Err(self.poison(ScanError::OverLength)),
        }
    }

    /// Scans a signed decimal integer and checks it against `[min, max]`.
    ///
    /// Digits accumulate into an `i64` with the sign applied at every step;
    /// any overflow of the full 64-bit range aborts immediately rather than
    /// wrapping.
    ///
    /// # Errors
    ///
    /// [`ScanError::ExpectedDigitAfterSign`] for a bare `-`;
    /// [`ScanError::InvalidDigit`] for any non-digit, non-whitespace byte;
    /// [`ScanError::NumberOutOfRange`] on overflow or a value outside
    /// `[min, max]`; [`ScanError::UnexpectedEndOfInput`] when the stream
    /// ends before any digit.
    pub fn next_integer(&mut self, min: i64, max: i64) -> Result<i64, ScanError> {
        self.check_latch()?;
        let digits = self.next_number_core(NumberMode::Signed)?;
        let value = digits.int_part;
        if value < min || value > max {
            return Err(self.poison(ScanError::NumberOutOfRange));
        }
        Ok(value)
    }

    /// Scans an unsigned decimal integer and checks it against `[0, max]`.
    ///
    /// No sign handling: a leading `-` is an invalid digit here. The shared
    /// accumulator is 64-bit signed, so magnitudes above `i64::MAX` are out
    /// of range.
    ///
    /// # Errors
    ///
    /// As [`next_integer`](Self::next_integer), minus the bare-sign case.
    pub fn next_unsigned(&mut self, max: u64) -> Result<u64, ScanError> {
        self.check_latch()?;
        let digits = self.next_number_core(NumberMode::Unsigned)?;
        let Ok(value) = u64::try_from(digits.int_part) else {
            return Err(self.poison(ScanError::NumberOutOfRange));
        };
        if value > max {
            return Err(self.poison(ScanError::NumberOutOfRange));
        }
        Ok(value)
    }

    /// Scans a decimal floating-point number (optional `-`, digits, at most
    /// one `.`) and checks it against `[min, max]`.
    ///
    /// Fractional digits are scaled by growing powers of ten and added to
    /// the integer part; the sign applies to the whole value.
    ///
    /// # Errors
    ///
    /// [`ScanError::InvalidNumericChar`] for any byte that is neither a
    /// digit nor the single permitted `.`; otherwise as
    /// [`next_integer`](Self::next_integer).
    pub fn next_float(&mut self, min: f64, max: f64) -> Result<f64, ScanError> {
        self.check_latch()?;
        let digits = self.next_number_core(NumberMode::Float)?;
        let value = digits.float_value();
        if value < min || value > max {
            return Err(self.poison(ScanError::NumberOutOfRange));
        }
        Ok(value)
    }

    // --- Cursor primitives --------------------------------------------------

    /// Reads one byte into the lookahead slot. `Ok(None)` is EOF; a read
    /// failure latches `Stream` and is returned.
    fn advance(&mut self) -> Result<Option<u8>, ScanError> {
        match self.source.next_byte() {
            Ok(byte) => {
                self.current = byte;
                Ok(byte)
            }
            Err(e) => Err(self.poison(ScanError::Stream(e.kind()))),
        }
    }

    /// Advances at least once, then keeps advancing while the byte read is
    /// whitespace. Returns the first significant byte, or `None` at EOF.
    fn skip_whitespace(&mut self) -> Result<Option<u8>, ScanError> {
        loop {
            match self.advance()? {
                Some(byte) if is_whitespace(byte) => {}
                other => return Ok(other),
            }
        }
    }

    /// Records `err` on the latch and hands it back for returning.
    ///
    /// Except for stream failures, the rest of the line is drained first so
    /// the source sits at a line boundary. Secondary read failures during
    /// the drain are ignored; the primary error wins.
    fn poison(&mut self, err: ScanError) -> ScanError {
        if !matches!(err, ScanError::Stream(_)) {
            while !matches!(self.current, Some(b'\n') | None) {
                match self.source.next_byte() {
                    Ok(byte) => self.current = byte,
                    Err(_) => break,
                }
            }
        }
        self.latch = Some(err.clone());
        err
    }

    /// Short-circuit for latched scanners: no reads, no classification.
    fn check_latch(&self) -> Result<(), ScanError> {
        match &self.latch {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    // --- Shared numeric core ------------------------------------------------

    /// One digit-accumulation routine behind all three numeric operations,
    /// so the overflow and termination rules cannot drift between them.
    ///
    /// State machine: skip whitespace → optional sign → integer digits →
    /// (float mode only) fraction digits → terminated on whitespace or EOF.
    fn next_number_core(&mut self, mode: NumberMode) -> Result<Digits, ScanError> {
        let Some(mut byte) = self.skip_whitespace()? else {
            return Err(self.poison(ScanError::UnexpectedEndOfInput));
        };

        let mut sign: i64 = 1;
        if byte == b'-' && mode.allows_sign() {
            sign = -1;
            match self.advance()? {
                Some(b) if b.is_ascii_digit() => byte = b,
                _ => return Err(self.poison(ScanError::ExpectedDigitAfterSign)),
            }
        }

        let mut int_part: i64 = 0;
        let mut frac: f64 = 0.0;
        let mut scale: f64 = 0.1;
        let mut in_fraction = false;

        loop {
            if byte.is_ascii_digit() {
                let digit = byte - b'0';
                if in_fraction {
                    frac += f64::from(digit) * scale;
                    scale /= 10.0;
                } else {
                    let Some(next) = int_part
                        .checked_mul(10)
                        .and_then(|acc| acc.checked_add(i64::from(digit) * sign))
                    else {
                        return Err(self.poison(ScanError::NumberOutOfRange));
                    };
                    int_part = next;
                }
            } else if byte == b'.' && mode == NumberMode::Float && !in_fraction {
                in_fraction = true;
            } else {
                let err = if mode == NumberMode::Float {
                    ScanError::InvalidNumericChar(byte)
                } else {
                    ScanError::InvalidDigit(byte)
                };
                return Err(self.poison(err));
            }

            match self.advance()? {
                Some(b) if !is_whitespace(b) => byte = b,
                _ => break,
            }
        }

        Ok(Digits {
            negative: sign < 0,
            int_part,
            frac,
        })
    }
}

/// Fixed-width conveniences over the three scanners, mirroring the ranges of
/// the narrower machine types. The bound check guarantees the narrowing cast
/// below is lossless.
impl<S: ByteSource> Scanner<S> {
    /// [`next_integer`](Self::next_integer) over the full `i8` range.
    ///
    /// # Errors
    ///
    /// As [`next_integer`](Self::next_integer).
    #[expect(clippy::cast_possible_truncation, reason = "bound-checked to i8 range")]
    pub fn next_i8(&mut self) -> Result<i8, ScanError> {
        self.next_integer(i64::from(i8::MIN), i64::from(i8::MAX))
            .map(|v| v as i8)
    }

    /// [`next_integer`](Self::next_integer) over the full `i16` range.
    ///
    /// # Errors
    ///
    /// As [`next_integer`](Self::next_integer).
    #[expect(clippy::cast_possible_truncation, reason = "bound-checked to i16 range")]
    pub fn next_i16(&mut self) -> Result<i16, ScanError> {
        self.next_integer(i64::from(i16::MIN), i64::from(i16::MAX))
            .map(|v| v as i16)
    }

    /// [`next_integer`](Self::next_integer) over the full `i32` range.
    ///
    /// # Errors
    ///
    /// As [`next_integer`](Self::next_integer).
    #[expect(clippy::cast_possible_truncation, reason = "bound-checked to i32 range")]
    pub fn next_i32(&mut self) -> Result<i32, ScanError> {
        self.next_integer(i64::from(i32::MIN), i64::from(i32::MAX))
            .map(|v| v as i32)
    }

    /// [`next_integer`](Self::next_integer) over the full `i64` range.
    ///
    /// # Errors
    ///
    /// As [`next_integer`](Self::next_integer).
    pub fn next_i64(&mut self) -> Result<i64, ScanError> {
        self.next_integer(i64::MIN, i64::MAX)
    }

    /// [`next_unsigned`](Self::next_unsigned) over the full `u8` range.
    ///
    /// # Errors
    ///
    /// As [`next_unsigned`](Self::next_unsigned).
    #[expect(clippy::cast_possible_truncation, reason = "bound-checked to u8 range")]
    pub fn next_u8(&mut self) -> Result<u8, ScanError> {
        self.next_unsigned(u64::from(u8::MAX)).map(|v| v as u8)
    }

    /// [`next_unsigned`](Self::next_unsigned) over the full `u16` range.
    ///
    /// # Errors
    ///
    /// As [`next_unsigned`](Self::next_unsigned).
    #[expect(clippy::cast_possible_truncation, reason = "bound-checked to u16 range")]
    pub fn next_u16(&mut self) -> Result<u16, ScanError> {
        self.next_unsigned(u64::from(u16::MAX)).map(|v| v as u16)
    }

    /// [`next_unsigned`](Self::next_unsigned) over the full `u32` range.
    ///
    /// # Errors
    ///
    /// As [`next_unsigned`](Self::next_unsigned).
    #[expect(clippy::cast_possible_truncation, reason = "bound-checked to u32 range")]
    pub fn next_u32(&mut self) -> Result<u32, ScanError> {
        self.next_unsigned(u64::from(u32::MAX)).map(|v| v as u32)
    }

    /// [`next_float`](Self::next_float) over the full finite `f64` range.
    ///
    /// # Errors
    ///
    /// As [`next_float`](Self::next_float).
    pub fn next_f64(&mut self) -> Result<f64, ScanError> {
        self.next_float(f64::MIN, f64::MAX)
    }
}
