//! `cusp generate`: rebuild premake5.lua from cusp.json.

use tracing::instrument;

use cusp_adapters::PREMAKE_FILE_NAME;

use crate::{
    cli::GlobalArgs, commands::workspace_service, error::CliResult, output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let root = global.workspace_root();
    let service = workspace_service();
    let solution = service.load(&root)?;

    service.regenerate(&root, &solution)?;

    output.success(&format!(
        "{} regenerated for {} project(s)",
        root.join(PREMAKE_FILE_NAME).display(),
        solution.projects().len()
    ))?;
    Ok(())
}
