/// Evaluates a boolean expression and records it in a suite, labelled with
/// the expression text (or an explicit name) and the call site.
///
/// ```
/// let mut suite = ctest::Suite::with_sink(Vec::new());
/// ctest::ctest!(suite, 1 + 1 == 2);
/// ctest::ctest!(suite, "abc".len() == 3, "length of abc");
/// assert_eq!(suite.count_pass(), 2);
/// ```
#[macro_export]
macro_rules! ctest {
    ($suite:expr, $cond:expr $(,)?) => {
        $crate::ctest!($suite, $cond, stringify!($cond))
    };
    ($suite:expr, $cond:expr, $name:expr $(,)?) => {{
        let ok: bool = $cond;
        $suite.record($name, ok, file!(), line!());
        ok
    }};
}
