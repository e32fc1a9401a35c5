//! Test environment for isolated helm-image-updater runs.
//!
//! Provides `TestEnv` - a temp directory holding the YAML files under test,
//! plus helpers to run the CLI against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Variables the CLI reads as option fallbacks; cleared for every run.
pub const ENV_VARS: &[&str] = &[
    "HELM_IMAGE_UPDATER_FILE",
    "HELM_IMAGE_UPDATER_VERSION",
    "HELM_IMAGE_UPDATER_REPOSITORY",
    "HELM_IMAGE_UPDATER_CHART",
];

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp directory.
pub struct TestEnv {
    /// Temporary directory holding the files under test
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_helm-image-updater")),
        }
    }

    /// Create an environment with one file already written
    pub fn with_file(relative: &str, content: &str) -> Self {
        let env = Self::new();
        env.write_file(relative, content);
        env
    }

    /// Get path relative to the temp root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Path as a string argument for `--file`
    pub fn arg(&self, relative: &str) -> String {
        self.path(relative).display().to_string()
    }

    /// Write a file under the temp root
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a file under the temp root
    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Parse a YAML file under the temp root
    pub fn read_yaml(&self, relative: &str) -> serde_yaml_ng::Value {
        serde_yaml_ng::from_str(&self.read_file(relative))
            .unwrap_or_else(|e| panic!("{} is not valid YAML: {}", relative, e))
    }

    /// Run the CLI with the temp root as working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");

        for key in ENV_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute helm-image-updater");

        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert Command output to TestResult
fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Look up a dotted path (`sub.image.tag`) in a parsed document
pub fn yaml_get<'a>(value: &'a serde_yaml_ng::Value, dotted: &str) -> Option<&'a serde_yaml_ng::Value> {
    dotted
        .split('.')
        .try_fold(value, |current, key| current.as_mapping()?.get(key))
}

/// File modification metadata used to prove a file was not rewritten
pub fn modified(path: &Path) -> std::time::SystemTime {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .expect("Failed to stat file")
}
