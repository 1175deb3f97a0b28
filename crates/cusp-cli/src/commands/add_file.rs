//! `cusp add-header` and `cusp add-source`.

use std::path::PathBuf;

use tracing::instrument;

use crate::{
    cli::{AddFileArgs, GlobalArgs},
    commands::workspace_service,
    error::CliResult,
    output::OutputManager,
};

/// Write `<project>/include/<file>` with an include guard.
#[instrument(skip_all, fields(project = %args.project, file = %args.file))]
pub fn header(args: AddFileArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let root = global.workspace_root();
    let service = workspace_service();
    service.load(&root)?;

    let path = service.add_header(&root, &args.project, &args.file)?;
    report(output, "Header", path)
}

/// Write an empty `<project>/src/<file>`.
#[instrument(skip_all, fields(project = %args.project, file = %args.file))]
pub fn source(args: AddFileArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let root = global.workspace_root();
    let service = workspace_service();
    service.load(&root)?;

    let path = service.add_source_file(&root, &args.project, &args.file)?;
    report(output, "Source file", path)
}

fn report(output: &OutputManager, what: &str, path: PathBuf) -> CliResult<()> {
    output.success(&format!("{what} written: {}", path.display()))?;
    Ok(())
}
