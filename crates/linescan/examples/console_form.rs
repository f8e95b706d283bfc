//! A small interactive form driven entirely by the scanner.
//!
//! Prompts for a handful of differently-typed fields on one stdin stream and
//! shows the two idioms the latch supports:
//!
//! 1. Check each `Result` as it comes back; a malformed field has already
//!    drained its line, so a fresh scanner picks up cleanly on the next one.
//! 2. Or run every field first and ask `is_poisoned()` once at the end,
//!    treating the whole form as one transaction.
//!
//! Run with
//!
//! ```bash
//! cargo run -p linescan --example console_form
//! ```
//!
//! and type something like:
//!
//! ```text
//! ada "systems programming" 36 1.63
//! ```

use std::io::{self, Write};

use bstr::ByteSlice;
use linescan::Scanner;

fn main() -> io::Result<()> {
    print!("name, \"interest\", age, height-in-meters: ");
    io::stdout().flush()?;

    let mut scanner = Scanner::new(io::stdin().lock());

    let name = scanner.next_token(32);
    let interest = scanner.next_quoted(64);
    let age = scanner.next_unsigned(130);
    let height = scanner.next_float(0.3, 2.8);

    if scanner.is_poisoned() {
        // One check covers the whole form: the first malformed field
        // poisoned the scanner and the rest short-circuited.
        eprintln!("[ERROR] Scanner: {}", scanner.last_error().unwrap());
        std::process::exit(1);
    }

    // The latch check above guarantees every field parsed.
    let (name, interest, age, height) =
        (name.unwrap(), interest.unwrap(), age.unwrap(), height.unwrap());
    println!(
        "hello {}, {} years, {height:.2}m, into {}",
        name.as_bstr(),
        age,
        interest.as_bstr(),
    );

    // Leave the stream at a line boundary for whatever runs next.
    scanner.discard_line();
    Ok(())
}
