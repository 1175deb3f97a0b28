//! Implementation of the `cusp new` command.
//!
//! Responsibility: translate CLI arguments (plus configured defaults) into an
//! `InitRequest`, call the workspace service, and display results.

use std::path::PathBuf;

use tracing::{info, instrument};

use cusp_core::application::{InitRequest, VcsOutcome};

use crate::{
    cli::NewArgs,
    commands::{or_config, workspace_service},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `cusp new` command.
///
/// Dispatch sequence:
/// 1. Resolve the parent directory
/// 2. Merge flags with configured defaults into an `InitRequest`
/// 3. Early-exit if `--dry-run`
/// 4. Create the workspace via `WorkspaceService::init`
/// 5. Print warnings and next-steps guidance
#[instrument(skip_all, fields(workspace = %args.name))]
pub fn execute(args: NewArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    // 1. Parent directory
    let parent = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    if !parent.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("output directory '{}' does not exist", parent.display()),
            source: None,
        });
    }

    // 2. Request
    let dry_run = args.dry_run;
    let request = build_request(args, config)?;
    let root = parent.join(&request.workspace);
    let service = workspace_service();

    // 3. Dry run: describe but do not write.
    if dry_run {
        output.info(&format!(
            "Dry run: would create workspace '{}' at {}",
            request.workspace,
            root.display(),
        ))?;
        output.field("Project", &request.project)?;
        output.field("Kind", request.kind.as_str())?;
        output.field("Toolset", request.toolset.as_str())?;
        output.field("Architecture", &request.architecture)?;
        output.field("Dialect", request.cpp_dialect.as_str())?;
        output.field("Links", &request.links.join(", "))?;
        output.field("Git", if request.init_git { "yes" } else { "no" })?;
        if !service.check_init_preconditions(&root) {
            output.warning(&format!("{} already holds a workspace", root.display()))?;
        }
        return Ok(());
    }

    // 4. Create
    output.header(&format!("Creating workspace '{}'...", request.workspace))?;
    let outcome = service.init(&parent, request)?;
    info!(root = %outcome.root.display(), "Workspace created");

    // 5. Report
    if let Some(message) = vcs_warning(&outcome.vcs) {
        output.warning(&message)?;
    }
    output.success(&format!(
        "Workspace '{}' created at {}",
        outcome.solution.name(),
        outcome.root.display()
    ))?;

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", outcome.root.display()))?;
    output.print(&format!(
        "  premake5 {}",
        premake_action(outcome.solution.build_system())
    ))?;

    Ok(())
}

/// Merge flags over configured defaults.
fn build_request(args: NewArgs, config: &AppConfig) -> CliResult<InitRequest> {
    let defaults = &config.defaults;
    let opts = args.project_opts;

    Ok(InitRequest {
        project: args.project.unwrap_or_else(|| args.name.clone()),
        workspace: args.name,
        architecture: args
            .architecture
            .unwrap_or_else(|| defaults.architecture.clone()),
        toolset: or_config(args.toolset, "defaults.toolset", &defaults.toolset)?,
        cpp_dialect: or_config(opts.dialect, "defaults.dialect", &defaults.dialect)?,
        kind: or_config(opts.kind, "defaults.kind", &defaults.kind)?,
        links: opts.links,
        author: args.author.unwrap_or_else(|| defaults.author.clone()),
        init_git: !args.no_git && (args.git || defaults.git),
    })
}

/// Warning line for a repository setup that did not happen.
fn vcs_warning(vcs: &VcsOutcome) -> Option<String> {
    match vcs {
        VcsOutcome::ToolUnavailable => {
            Some("git was not found on PATH; skipped repository setup".into())
        }
        VcsOutcome::Failed {
            command, stderr, ..
        } => Some(format!(
            "`{command}` failed, the workspace was created without a repository: {stderr}"
        )),
        VcsOutcome::Skipped | VcsOutcome::Initialized => None,
    }
}

/// premake action generating the native build files.
fn premake_action(build_system: &str) -> &'static str {
    match build_system {
        "msbuild" => "vs2022",
        _ => "gmake2",
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use cusp_core::domain::{ProjectKind, Toolset};

    fn parse(args: &[&str]) -> NewArgs {
        let argv = ["cusp", "new"].iter().chain(args).copied();
        match Cli::parse_from(argv).command {
            Commands::New(args) => args,
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let request = build_request(parse(&["Game"]), &AppConfig::default()).unwrap();

        assert_eq!(request.workspace, "Game");
        assert_eq!(request.project, "Game");
        assert_eq!(request.architecture, "x86_64");
        assert_eq!(request.toolset, Toolset::Gcc);
        assert_eq!(request.kind, ProjectKind::ConsoleApp);
        assert_eq!(request.cpp_dialect.as_str(), "C++17");
        assert!(!request.init_git);
    }

    #[test]
    fn flags_override_config() {
        let args = parse(&[
            "Tools", "--project", "Core", "--toolset", "msc", "--kind", "sharedlib", "--arch",
            "x86", "--dialect", "C++20", "--author", "grace", "--git",
        ]);

        let request = build_request(args, &AppConfig::default()).unwrap();

        assert_eq!(request.project, "Core");
        assert_eq!(request.toolset, Toolset::Msc);
        assert_eq!(request.kind, ProjectKind::SharedLib);
        assert_eq!(request.architecture, "x86");
        assert_eq!(request.cpp_dialect.as_str(), "C++20");
        assert_eq!(request.author, "grace");
        assert!(request.init_git);
    }

    #[test]
    fn no_git_beats_configured_git() {
        let mut config = AppConfig::default();
        config.defaults.git = true;

        assert!(build_request(parse(&["Game"]), &config).unwrap().init_git);
        assert!(!build_request(parse(&["Game", "--no-git"]), &config).unwrap().init_git);
    }

    #[test]
    fn invalid_configured_kind_is_config_error() {
        let mut config = AppConfig::default();
        config.defaults.kind = "utility".into();

        let err = build_request(parse(&["Game"]), &config).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn failed_repository_setup_is_reported_as_warning() {
        let failed = VcsOutcome::Failed {
            command: "git init".into(),
            status: Some(128),
            stderr: "fatal: cannot mkdir .git".into(),
        };

        let message = vcs_warning(&failed).unwrap();
        assert!(message.contains("git init"));
        assert!(message.contains("fatal: cannot mkdir .git"));
        assert!(vcs_warning(&VcsOutcome::ToolUnavailable).is_some());
        assert!(vcs_warning(&VcsOutcome::Initialized).is_none());
        assert!(vcs_warning(&VcsOutcome::Skipped).is_none());
    }

    #[test]
    fn premake_action_follows_build_system() {
        assert_eq!(premake_action("msbuild"), "vs2022");
        assert_eq!(premake_action("make"), "gmake2");
    }
}
