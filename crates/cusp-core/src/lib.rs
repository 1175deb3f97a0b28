//! Cusp Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Cusp
//! C++ workspace manager, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            cusp-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (WorkspaceService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, BuildFileGenerator, Vcs)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     cusp-adapters (Infrastructure)      │
//! │ (LocalFilesystem, PremakeGenerator, Git)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Solution, Project, Manifest, Plan)    │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cusp_core::{
//!     application::{InitRequest, WorkspaceService},
//!     domain::{CppDialect, ProjectKind, Toolset},
//! };
//!
//! // Adapters are injected by the caller
//! let service = WorkspaceService::new(filesystem, generator, vcs);
//!
//! let outcome = service.init(".".as_ref(), InitRequest {
//!     workspace: "Game".into(),
//!     project: "Game".into(),
//!     architecture: "x86_64".into(),
//!     toolset: Toolset::Gcc,
//!     cpp_dialect: CppDialect::default(),
//!     kind: ProjectKind::ConsoleApp,
//!     links: vec![],
//!     author: "ada".into(),
//!     init_git: true,
//! })?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ClassOutcome, InitOutcome, InitRequest, NewProject, ProjectSummary, WorkspaceService,
        ports::{BuildFileGenerator, CommandRunner, Filesystem, VcsBootstrapper, VcsOutcome},
    };
    pub use crate::domain::{CppDialect, Manifest, Project, ProjectKind, Solution, Toolset};
    pub use crate::error::{CuspError, CuspResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
