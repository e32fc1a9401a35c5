//! Application Layer
//!
//! Use cases that orchestrate domain rules and infrastructure.
//!
//! - `update` - read-modify-write of image fields and chart `appVersion`

pub mod update;

pub use update::{Preview, UpdateOptions, UpdateOutcome, UpdateRequest, UpdateUseCase};
