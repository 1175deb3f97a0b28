//! `cusp add-project`: append a project to an existing workspace.

use tracing::instrument;

use cusp_core::application::NewProject;

use crate::{
    cli::{AddProjectArgs, GlobalArgs},
    commands::{or_config, workspace_service},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Load the workspace, add the project, and rewrite config and build files.
///
/// The dialect defaults to the workspace dialect; the kind defaults to
/// `defaults.kind` from the configuration.
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: AddProjectArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let root = global.workspace_root();
    let service = workspace_service();
    let mut solution = service.load(&root)?;

    let opts = args.project_opts;
    let project = NewProject {
        name: args.name,
        kind: or_config(opts.kind, "defaults.kind", &config.defaults.kind)?,
        links: opts.links,
        cpp_dialect: opts
            .dialect
            .unwrap_or_else(|| solution.cpp_dialect().clone()),
    };
    let name = project.name.clone();
    let kind = project.kind;

    service.add_project(&root, &mut solution, project)?;

    output.success(&format!(
        "Added {kind} project '{name}' to workspace '{}'",
        solution.name()
    ))?;
    Ok(())
}
