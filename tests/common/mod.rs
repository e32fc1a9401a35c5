//! Common test utilities for helm-image-updater CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp directory
//! - Assertion macros: `assert_output_contains!`, `assert_yaml_field!`
//! - Fixtures: Reusable values/chart file contents

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
