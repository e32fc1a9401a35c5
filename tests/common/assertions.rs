//! Custom assertion macros for CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that a command's output contains expected text.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "has been set successfully");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $expected:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($expected),
            "Expected output to contain '{}'\n\
             --- stdout ---\n{}\n\
             --- stderr ---\n{}",
            $expected,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a command succeeded, showing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        let result = &$result;
        assert!(
            result.is_success(),
            "Expected success, got exit code {}\n\
             --- stdout ---\n{}\n\
             --- stderr ---\n{}",
            result.exit_code,
            result.stdout,
            result.stderr
        );
    };
}

/// Assert that a command failed with a non-zero exit code.
#[macro_export]
macro_rules! assert_failure {
    ($result:expr) => {
        let result = &$result;
        assert!(
            !result.is_success() && result.exit_code != 0,
            "Expected failure, but command succeeded\n\
             --- stdout ---\n{}",
            result.stdout
        );
    };
}

/// Assert a string field at a dotted path of a YAML file.
///
/// # Example
/// ```ignore
/// assert_yaml_field!(env, "values.yaml", "image.tag", "2.0.0");
/// ```
#[macro_export]
macro_rules! assert_yaml_field {
    ($env:expr, $file:expr, $path:expr, $expected:expr) => {
        let doc = $env.read_yaml($file);
        let actual = $crate::common::yaml_get(&doc, $path).and_then(|v| v.as_str());
        assert_eq!(
            actual,
            Some($expected),
            "Unexpected value at '{}' in {}:\n{}",
            $path,
            $file,
            $env.read_file($file)
        );
    };
}
