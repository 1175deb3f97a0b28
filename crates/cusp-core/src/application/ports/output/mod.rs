//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cusp-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::CuspResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cusp_adapters::filesystem::LocalFilesystem` (production)
/// - `cusp_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `write_file` never creates parent directories; the scaffold plan does
/// - `create_dir_all` is create-if-missing, so re-running is safe
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CuspResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> CuspResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> CuspResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> CuspResult<()>;

    /// All regular files below `dir`, recursively, sorted.
    fn list_files(&self, dir: &Path) -> CuspResult<Vec<PathBuf>>;
}

/// Port for build script generation.
///
/// Implemented by:
/// - `cusp_adapters::generator::PremakeGenerator` (premake5.lua)
///
/// The generator receives the canonical `cusp.json` tree. It must be
/// idempotent and must not touch anything but its own output files.
#[cfg_attr(test, mockall::automock)]
pub trait BuildFileGenerator: Send + Sync {
    /// Generate build files for the workspace rooted at `root`.
    fn generate(&self, root: &Path, tree: &serde_json::Value) -> CuspResult<()>;
}

/// Port for version-control bootstrap.
///
/// Implemented by:
/// - `cusp_adapters::vcs::GitBootstrapper`
#[cfg_attr(test, mockall::automock)]
pub trait VcsBootstrapper: Send + Sync {
    /// Initialize a repository at `root` when `enabled`.
    fn maybe_init(&self, root: &Path, enabled: bool) -> CuspResult<VcsOutcome>;
}

/// Port for running external programs.
///
/// Implemented by:
/// - `cusp_adapters::process::SystemCommandRunner`
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Whether `program` can be spawned at all.
    fn is_available(&self, program: &str) -> bool;

    /// Run to completion, capturing status and output.
    ///
    /// Returns `Err` only when the process could not be spawned; a non-zero
    /// exit is reported through [`CommandOutput::status`].
    fn run(&self, invocation: &CommandInvocation) -> CuspResult<CommandOutput>;
}

/// Result of a VCS bootstrap attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsOutcome {
    /// Bootstrap was not requested.
    Skipped,
    /// The VCS tool is not installed; nothing was done.
    ToolUnavailable,
    /// The repository command ran but failed. The workspace itself is intact.
    Failed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },
    /// Repository and ignore-file were created.
    Initialized,
}

impl VcsOutcome {
    /// Whether the caller should surface a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::ToolUnavailable | Self::Failed { .. })
    }
}

/// A program, its argv and its working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}
