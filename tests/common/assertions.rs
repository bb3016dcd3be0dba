//! Assertion macros with descriptive failure output.

/// Assert that stdout or stderr contains `needle`.
///
/// ```ignore
/// assert_output_contains!(result, "migrate completed");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain {:?}.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert the exact sequence of step ids the scripts logged.
#[macro_export]
macro_rules! assert_step_log {
    ($env:expr, [$($step:expr),* $(,)?]) => {
        let expected: Vec<String> = vec![$($step.to_string()),*];
        assert_eq!(
            $env.step_log(),
            expected,
            "unexpected step log in {:?}",
            $env.project_root.path()
        );
    };
}
