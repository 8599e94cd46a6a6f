use std::io::{self, Stderr, Write};
use std::panic::Location;

use tracing::{debug, instrument, warn};

use crate::core::diagnostic;

pub mod violation;

pub use violation::ContractViolation;

/// Tag of a live suite context, the bytes "CTst".
pub const MAGIC: u32 = 0x7473_5443;

/// Fill byte for anything that does not hold a live context.
///
/// 0x95 is 10010101: four bits set, prime when unsigned (149), negative
/// when signed (-107, also prime), with an odd high nibble.
pub const BAD_MEM: u8 = 0x95;

/// Name printed in the empty-run warning unless the caller picks another.
pub const DEFAULT_SYSTEM_NAME: &str = "CTEST";

const POISON_TAG: u32 = u32::from_ne_bytes([BAD_MEM; 4]);
const POISON_COUNT: u64 = u64::from_ne_bytes([BAD_MEM; 8]);

/// Pass/fail tally for one test run.
///
/// Failures are reported to `sink` as they are recorded, one line each.
/// Releasing the suite (explicitly or by dropping it) warns on the sink
/// if nothing was recorded.
#[derive(Debug)]
pub struct Suite<W: Write = Stderr> {
    magic: u32,
    pass: u64,
    fail: u64,
    system: String,
    sink: W,
}

impl Suite<Stderr> {
    pub fn new() -> Self {
        Self::with_sink(io::stderr())
    }
}

impl Default for Suite<Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Suite<W> {
    pub fn with_sink(sink: W) -> Self {
        Self::named(DEFAULT_SYSTEM_NAME, sink)
    }

    /// Creates a suite whose empty-run warning names `system`.
    #[instrument(name = "create_suite", level = "debug", skip(sink))]
    pub fn named(system: &str, sink: W) -> Self {
        let mut suite = Self {
            magic: POISON_TAG,
            pass: POISON_COUNT,
            fail: POISON_COUNT,
            system: system.to_string(),
            sink,
        };

        suite.magic = MAGIC;
        suite.pass = 0;
        suite.fail = 0;

        suite.validate();
        debug!("Suite context created");
        suite
    }

    /// Records one assertion outcome. A false `ok` also writes
    /// `<file>:<line>: test failed: <name>` to the sink.
    #[instrument(name = "record", level = "debug", skip(self))]
    pub fn record(&mut self, name: &str, ok: bool, file: &str, line: u32) {
        self.validate();
        if ok {
            self.pass = bump(self.pass, "pass");
        } else {
            self.fail = bump(self.fail, "fail");
            diagnostic::report(diagnostic::write_failure(&mut self.sink, file, line, name));
        }
    }

    /// Like [`Suite::record`], located at the caller. Returns `ok`.
    #[track_caller]
    pub fn check(&mut self, name: &str, ok: bool) -> bool {
        let location = Location::caller();
        self.record(name, ok, location.file(), location.line());
        ok
    }

    pub fn count_pass(&self) -> u64 {
        self.validate();
        self.pass
    }

    pub fn count_fail(&self) -> u64 {
        self.validate();
        self.fail
    }

    pub fn count_test(&self) -> u64 {
        self.validate();
        match self.pass.checked_add(self.fail) {
            Some(total) => total,
            None => ContractViolation::Overflow { counter: "test" }.raise(),
        }
    }

    pub fn system_name(&self) -> &str {
        &self.system
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Ends the run. Same as dropping the suite.
    pub fn release(self) {
        drop(self)
    }

    #[instrument(name = "release_suite", level = "debug", skip(self))]
    pub(crate) fn retire(&mut self) {
        self.validate();
        if self.count_test() == 0 {
            warn!("No {} unit tests were run", self.system);
            diagnostic::report(diagnostic::write_empty_run(&mut self.sink, &self.system));
        }

        self.magic = POISON_TAG;
        self.pass = POISON_COUNT;
        self.fail = POISON_COUNT;
        debug!("Suite context released");
    }

    #[cfg(test)]
    pub(crate) fn is_live(&self) -> bool {
        self.magic == MAGIC
    }

    #[cfg(test)]
    pub(crate) fn corrupt(&mut self, tag: u32) {
        self.magic = tag;
    }

    #[cfg(test)]
    pub(crate) fn preload(&mut self, pass: u64, fail: u64) {
        self.pass = pass;
        self.fail = fail;
    }

    #[track_caller]
    fn validate(&self) {
        if self.magic != MAGIC {
            ContractViolation::BadTag { found: self.magic }.raise();
        }
    }
}

impl<W: Write> Drop for Suite<W> {
    fn drop(&mut self) {
        // A second panic while unwinding would abort the process.
        if std::thread::panicking() {
            return;
        }
        self.retire();
    }
}

fn bump(count: u64, counter: &'static str) -> u64 {
    match count.checked_add(1) {
        Some(next) => next,
        None => ContractViolation::Overflow { counter }.raise(),
    }
}
