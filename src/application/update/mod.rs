//! Update Use Case
//!
//! Orchestrates one read-modify-write of a values file or Chart.yaml.
//!
//! This module handles:
//! - Rejecting empty requests before touching the file
//! - Loading and resolving the targeted section
//! - Comparing requested values against current ones
//! - Saving only when something changed (or previewing in dry-run mode)

mod options;
mod request;
mod result;
mod use_case;


pub use options::UpdateOptions;
pub use request::UpdateRequest;
pub use result::{Preview, UpdateOutcome};
pub use use_case::UpdateUseCase;
