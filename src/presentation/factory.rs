//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use helm_image_updater::{LocalFs, UpdateUseCase};

/// Type alias for the concrete UpdateUseCase backed by the local disk
pub type ConcreteUpdateUseCase = UpdateUseCase<LocalFs>;

/// Create an update use case with all dependencies wired up
pub fn create_update_use_case() -> ConcreteUpdateUseCase {
    UpdateUseCase::new(LocalFs::new())
}
