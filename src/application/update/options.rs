//! Update options

/// Options shared by every update command
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Compute the rewrite but never write it
    pub dry_run: bool,
}

impl UpdateOptions {
    /// Create new update options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
