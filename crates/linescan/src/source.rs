//! The input seam: anything that can hand over one byte at a time.

use std::io::{self, Read};

/// A blocking, forward-only producer of single bytes.
///
/// Exhaustion (`Ok(None)`) is reported separately from failure (`Err`), which
/// is the whole contract the scanner depends on. The blanket impl below
/// covers every [`io::Read`], so `&[u8]`, files, and locked stdin all work
/// directly; wrap unbuffered readers like [`std::fs::File`] in an
/// [`io::BufReader`] to avoid a syscall per byte (stdin's lock is already
/// buffered).
pub trait ByteSource {
    /// Reads the next byte, blocking until one is available.
    ///
    /// Returns `Ok(None)` at end-of-stream.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<R: Read> ByteSource for R {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}
