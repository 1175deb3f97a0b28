//! Command runner backed by `std::process::Command`.

use std::process::{Command, Stdio};

use cusp_core::{
    application::{
        ApplicationError,
        ports::{CommandInvocation, CommandOutput, CommandRunner},
    },
    error::CuspResult,
};
use tracing::{debug, instrument};

/// Runs programs on the host, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn is_available(&self, program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    #[instrument(skip_all, fields(command = %invocation))]
    fn run(&self, invocation: &CommandInvocation) -> CuspResult<CommandOutput> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).stdin(Stdio::null());
        if let Some(dir) = &invocation.cwd {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .map_err(|e| ApplicationError::CommandFailed {
                command: invocation.to_string(),
                status: None,
                stderr: format!("failed to spawn: {e}"),
            })?;

        let result = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(status = ?result.status, "Command finished");
        Ok(result)
    }
}
