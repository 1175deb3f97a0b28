// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Cusp.
//!
//! This module contains the workspace model with no I/O. Filesystem, build
//! script generation and VCS concerns are handled via ports (traits) defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or subprocess calls
//! - **Few external crates**: std + thiserror + serde (for the manifest schema)
//! - **Invariants on insertion**: `Solution::add_project` is the only way in
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod manifest;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    common::{validate_file_name, validate_name},
    project::Project,
    scaffold_plan::{HEADER_PRELUDE, INCLUDE_DIR, SRC_DIR, ScaffoldPlan},
    solution::Solution,
};

pub use error::{DomainError, ErrorCategory};

pub use manifest::{CONFIG_FILE_NAME, Manifest, ProjectRecord};

pub use value_objects::{CppDialect, ProjectKind, Toolset};
