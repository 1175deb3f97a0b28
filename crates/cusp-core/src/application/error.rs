//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// No `cusp.json` where a workspace was expected.
    #[error("cusp.json not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// `cusp.json` exists but does not describe a valid workspace.
    #[error("Malformed workspace config {path}: {reason}")]
    ConfigMalformed { path: PathBuf, reason: String },

    /// A workspace is already initialized at the target location.
    #[error("Workspace already initialized at {path}")]
    AlreadyInitialized { path: PathBuf },

    /// The build file generator rejected the tree or failed to write.
    #[error("Build file generation failed: {reason}")]
    GenerationFailed { reason: String },

    /// An external command ran but did not succeed.
    #[error("Command `{command}` failed{}: {stderr}", exit_suffix(.status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },
}

fn exit_suffix(status: &Option<i32>) -> String {
    status
        .map(|code| format!(" with exit code {code}"))
        .unwrap_or_default()
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ConfigNotFound { path } => vec![
                format!("No workspace config at {}", path.display()),
                "Run this command from a workspace root, or pass --workspace <DIR>".into(),
                "Create a workspace first: cusp new <NAME>".into(),
            ],
            Self::ConfigMalformed { reason, .. } => vec![
                format!("Schema problem: {reason}"),
                "Fix cusp.json by hand or restore it from version control".into(),
            ],
            Self::AlreadyInitialized { path } => vec![
                format!("{} already contains cusp.json", path.display()),
                "Choose a different workspace name".into(),
                "Use 'cusp add-project' to extend the existing workspace".into(),
            ],
            Self::GenerationFailed { .. } => vec![
                "cusp.json was saved; re-run 'cusp generate' once the problem is fixed".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("External command failed: {command}"),
                "Check the command output above for details".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigNotFound { .. } => ErrorCategory::NotFound,
            Self::AlreadyInitialized { .. } => ErrorCategory::Conflict,
            Self::ConfigMalformed { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. }
            | Self::GenerationFailed { .. }
            | Self::CommandFailed { .. } => ErrorCategory::Internal,
        }
    }
}
