use std::io::{self, Write};

use tracing::warn;

/// Writes the failure line for one assertion: `<file>:<line>: test failed: <name>`.
pub fn write_failure<W: Write>(sink: &mut W, file: &str, line: u32, name: &str) -> io::Result<()> {
    writeln!(sink, "{}:{}: test failed: {}", file, line, name)?;
    sink.flush()
}

/// Writes the advisory emitted when a suite is released without any records.
pub fn write_empty_run<W: Write>(sink: &mut W, system: &str) -> io::Result<()> {
    writeln!(sink, "Warning: no {} unit tests were run.", system)?;
    sink.flush()
}

/// Diagnostics are best effort: a broken sink never changes the tally.
pub(crate) fn report(result: io::Result<()>) {
    if let Err(e) = result {
        warn!("Failed to write suite diagnostic: {}", e);
    }
}
