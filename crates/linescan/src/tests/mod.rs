mod scan_good;

use crate::Scanner;

/// Scanner over an in-memory byte slice, the test-side stand-in for stdin.
fn scan(bytes: &[u8]) -> Scanner<&[u8]> {
    Scanner::new(bytes)
}
