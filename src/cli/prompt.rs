//! Interactive startup prompt for the countdown target time.
//!
//! The target is entered in packed `HHMM` form (e.g. `1430` for 14:30).
//! Invalid entries re-prompt; an empty line or end-of-file cancels, which
//! callers treat as a normal exit, not an error.

use std::io::{self, BufRead, Write};

use crate::cli::commands::parse_target;
use crate::timer::TargetTime;

/// Reads a target time from stdin, re-prompting until the entry is valid.
///
/// Returns `Ok(None)` when the user cancels (empty line or EOF).
///
/// # Errors
///
/// Returns an error only when reading stdin or writing the prompt fails.
pub fn prompt_target_time() -> io::Result<Option<TargetTime>> {
    let stdin = io::stdin();
    read_target_time(&mut stdin.lock(), &mut io::stdout())
}

/// Prompt loop over arbitrary reader/writer, split out for tests.
fn read_target_time<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<TargetTime>> {
    loop {
        write!(output, "Target time (HHMM): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None); // EOF: cancelled
        }
        let entry = line.trim();
        if entry.is_empty() {
            return Ok(None); // empty line: cancelled
        }

        match parse_target(entry) {
            Ok(target) => return Ok(Some(target)),
            Err(reason) => writeln!(output, "{reason}")?,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
