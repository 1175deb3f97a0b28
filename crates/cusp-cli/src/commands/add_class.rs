//! `cusp add-class`: header and source pair for a class.

use tracing::instrument;

use cusp_core::application::ClassOutcome;

use crate::{
    cli::{AddClassArgs, GlobalArgs},
    commands::workspace_service,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.project, class = %args.class))]
pub fn execute(args: AddClassArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let root = global.workspace_root();
    let service = workspace_service();
    service.load(&root)?;

    match service.add_class(&root, &args.project, &args.class)? {
        ClassOutcome::Created { header, source } => {
            output.success(&format!("Class '{}' added", args.class))?;
            output.field("Header", &header.display().to_string())?;
            output.field("Source", &source.display().to_string())?;
        }
        ClassOutcome::ProjectNotFound { project } => {
            output.warning(&format!(
                "Project '{project}' not found in {}; nothing was created",
                root.display()
            ))?;
        }
    }

    Ok(())
}
