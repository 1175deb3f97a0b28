//! git repository bootstrap.

use std::path::Path;

use cusp_core::{
    application::ports::{CommandInvocation, CommandRunner, Filesystem, VcsBootstrapper, VcsOutcome},
    error::CuspResult,
};
use tracing::{info, instrument, warn};

const GIT: &str = "git";

/// Ignore file written next to a fresh repository.
pub const GITIGNORE: &str = "\
# This File Was Generated By Cusp
.vs/**
.vscode/**
*/bin/**
*/bin-init/**
*/build/**
Makefile
*.sln
premake5.lua
";

/// Runs `git init` in the workspace root and writes `.gitignore`.
pub struct GitBootstrapper {
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
}

impl GitBootstrapper {
    pub fn new(runner: Box<dyn CommandRunner>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { runner, filesystem }
    }
}

impl VcsBootstrapper for GitBootstrapper {
    #[instrument(skip(self), fields(root = %root.display()))]
    fn maybe_init(&self, root: &Path, enabled: bool) -> CuspResult<VcsOutcome> {
        if !enabled {
            return Ok(VcsOutcome::Skipped);
        }

        if !self.runner.is_available(GIT) {
            warn!("git is not installed or not on PATH");
            return Ok(VcsOutcome::ToolUnavailable);
        }

        let invocation = CommandInvocation::new(GIT).arg("init").current_dir(root);
        let output = self.runner.run(&invocation)?;
        if !output.success() {
            warn!(status = ?output.status, "git init failed");
            return Ok(VcsOutcome::Failed {
                command: invocation.to_string(),
                status: output.status,
                stderr: output.stderr.trim().to_string(),
            });
        }

        self.filesystem.write_file(&root.join(".gitignore"), GITIGNORE)?;

        info!("git repository initialized");
        Ok(VcsOutcome::Initialized)
    }
}
