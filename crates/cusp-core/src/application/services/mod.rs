//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a workspace" or "add a project".

pub mod workspace_service;

pub use workspace_service::{
    ClassOutcome, InitOutcome, InitRequest, NewProject, ProjectSummary, WorkspaceService,
    config_path,
};
