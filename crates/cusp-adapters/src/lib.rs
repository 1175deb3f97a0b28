//! Infrastructure adapters for Cusp.
//!
//! This crate implements the ports defined in `cusp-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod generator;
pub mod process;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generator::{PREMAKE_FILE_NAME, PremakeGenerator};
pub use process::SystemCommandRunner;
pub use vcs::{GITIGNORE, GitBootstrapper};
