use std::io::Write;

use ctest::{ctest, Suite, DEFAULT_SYSTEM_NAME};
use tracing::{info, instrument};

type Group<W> = (&'static str, fn(&mut Suite<W>));

/// Self-check groups, in run order. The set is fixed; callers can only pick one.
fn groups<W: Write>() -> [Group<W>; 3] {
    [
        ("counts", counts::<W>),
        ("diagnostics", diagnostics::<W>),
        ("lifecycle", lifecycle::<W>),
    ]
}

/// Runs every group, or only the one called `only`. Returns how many ran.
#[instrument(name = "run_selfcheck", level = "info", skip(suite))]
pub fn run<W: Write>(suite: &mut Suite<W>, only: Option<&str>) -> usize {
    let mut ran = 0;
    for (name, group) in groups::<W>() {
        if only.is_some_and(|wanted| wanted != name) {
            continue;
        }
        info!("Running self-check group: {}", name);
        group(suite);
        ran += 1;
    }
    ran
}

fn counts<W: Write>(suite: &mut Suite<W>) {
    let mut inner = Suite::with_sink(Vec::new());
    ctest!(suite, inner.count_pass() == 0);
    ctest!(suite, inner.count_fail() == 0);
    ctest!(suite, inner.count_test() == 0);

    inner.record("a", true, "t.c", 1);
    inner.record("b", false, "t.c", 2);
    inner.record("c", true, "t.c", 3);
    ctest!(suite, inner.count_pass() == 2);
    ctest!(suite, inner.count_fail() == 1);
    ctest!(suite, inner.count_test() == inner.count_pass() + inner.count_fail());
    inner.release();
}

fn diagnostics<W: Write>(suite: &mut Suite<W>) {
    let mut inner = Suite::with_sink(Vec::new());
    inner.record("quiet", true, "t.c", 1);
    ctest!(suite, inner.sink().is_empty(), "passing record writes nothing");

    inner.record("b", false, "t.c", 42);
    ctest!(suite, inner.sink().as_slice() == b"t.c:42: test failed: b\n");
    inner.release();
}

fn lifecycle<W: Write>(suite: &mut Suite<W>) {
    let mut out = Vec::new();
    Suite::with_sink(&mut out).release();
    let expected = format!("Warning: no {} unit tests were run.\n", DEFAULT_SYSTEM_NAME);
    ctest!(suite, out == expected.as_bytes(), "empty run warns on release");

    let mut out = Vec::new();
    let mut inner = Suite::with_sink(&mut out);
    inner.record("a", true, "t.c", 1);
    inner.release();
    ctest!(suite, out.is_empty(), "non-empty run releases silently");
}
