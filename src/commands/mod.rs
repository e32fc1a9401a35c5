//! Command handlers
//!
//! Every subcommand goes through the same path: build an `UpdateRequest`,
//! execute it, render the outcome.

mod update;

pub use update::cmd_update;
