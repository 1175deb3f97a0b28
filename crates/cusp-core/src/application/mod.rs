//! Application layer for Cusp.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`WorkspaceService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ClassOutcome, InitOutcome, InitRequest, NewProject, ProjectSummary, WorkspaceService,
    config_path,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    BuildFileGenerator, CommandInvocation, CommandOutput, CommandRunner, Filesystem,
    VcsBootstrapper, VcsOutcome,
};

pub use error::ApplicationError;
