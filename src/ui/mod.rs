//! Terminal UI helpers: color detection, diffs and error reporting

pub mod diff;
pub mod error;
pub mod terminal;
pub mod theme;
