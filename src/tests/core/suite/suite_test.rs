#[cfg(test)]
mod tests {
    use crate::core::suite::Suite;
    use crate::tests::support::text;

    #[test]
    fn test_new_suite_is_empty() {
        let mut suite = Suite::with_sink(Vec::new());
        assert_eq!(suite.count_pass(), 0);
        assert_eq!(suite.count_fail(), 0);
        assert_eq!(suite.count_test(), 0);

        // Keep the release quiet.
        suite.record("setup", true, "t.c", 1);
    }

    #[test]
    fn test_passing_record() {
        let mut suite = Suite::with_sink(Vec::new());
        suite.record("a", true, "t.c", 7);

        assert_eq!(suite.count_pass(), 1);
        assert_eq!(suite.count_fail(), 0);
        assert_eq!(suite.count_test(), 1);
        assert!(suite.sink().is_empty());
    }

    #[test]
    fn test_failing_record_writes_one_line() {
        let mut suite = Suite::with_sink(Vec::new());
        suite.record("b", false, "t.c", 42);

        assert_eq!(suite.count_pass(), 0);
        assert_eq!(suite.count_fail(), 1);
        assert_eq!(text(suite.sink()), "t.c:42: test failed: b\n");
    }

    #[test]
    fn test_mixed_run() {
        let mut suite = Suite::with_sink(Vec::new());
        suite.record("p1", true, "mix.c", 1);
        suite.record("f1", false, "mix.c", 2);
        suite.record("p2", true, "mix.c", 3);
        suite.record("f2", false, "mix.c", 4);
        suite.record("p3", true, "mix.c", 5);

        assert_eq!(suite.count_pass(), 3);
        assert_eq!(suite.count_fail(), 2);
        assert_eq!(suite.count_test(), 5);
        assert_eq!(
            text(suite.sink()),
            "mix.c:2: test failed: f1\nmix.c:4: test failed: f2\n"
        );
    }

    #[test]
    fn test_total_tracks_pass_and_fail() {
        let mut suite = Suite::with_sink(Vec::new());
        let outcomes = [true, false, false, true, true, true, false, true];
        let (mut last_pass, mut last_fail) = (0, 0);

        for (i, ok) in outcomes.into_iter().enumerate() {
            suite.record("step", ok, "loop.c", i as u32);

            let (pass, fail) = (suite.count_pass(), suite.count_fail());
            assert_eq!(suite.count_test(), pass + fail);
            assert!(pass >= last_pass);
            assert!(fail >= last_fail);
            (last_pass, last_fail) = (pass, fail);
        }

        assert_eq!(last_pass, 5);
        assert_eq!(last_fail, 3);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let mut suite = Suite::with_sink(Vec::new());
        suite.record("x", false, "t.c", 1);
        suite.record("y", true, "t.c", 2);

        assert_eq!(suite.count_pass(), suite.count_pass());
        assert_eq!(suite.count_fail(), suite.count_fail());
        assert_eq!(suite.count_test(), suite.count_test());
        assert_eq!(suite.sink().len(), "t.c:1: test failed: x\n".len());
    }

    #[test]
    fn test_check_uses_caller_location() {
        let mut suite = Suite::with_sink(Vec::new());
        assert!(suite.check("fine", true));

        let line = line!() + 1;
        assert!(!suite.check("located", false));

        assert_eq!(suite.count_test(), 2);
        assert_eq!(
            text(suite.sink()),
            format!("{}:{}: test failed: located\n", file!(), line)
        );
    }

    #[test]
    #[should_panic(expected = "suite pass count overflowed")]
    fn test_pass_overflow_panics() {
        let mut suite = Suite::with_sink(Vec::new());
        suite.preload(u64::MAX, 0);
        suite.record("one too many", true, "t.c", 1);
    }

    #[test]
    #[should_panic(expected = "suite test count overflowed")]
    fn test_total_overflow_panics() {
        let mut suite = Suite::with_sink(Vec::new());
        suite.preload(u64::MAX, 1);
        suite.count_test();
    }
}
