//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;

pub use file_system::{FileAction, FileError, FileSystem, FsResult};
