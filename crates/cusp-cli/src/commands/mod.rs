//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core requests, call the
//! workspace service, and report through the [`OutputManager`]. No business
//! logic lives here.
//!
//! [`OutputManager`]: crate::output::OutputManager

use std::str::FromStr;

use cusp_adapters::{GitBootstrapper, LocalFilesystem, PremakeGenerator, SystemCommandRunner};
use cusp_core::{application::WorkspaceService, domain::DomainError};

use crate::error::{CliError, CliResult};

pub mod add_class;
pub mod add_file;
pub mod add_project;
pub mod completions;
pub mod config;
pub mod generate;
pub mod info;
pub mod new;

/// Wire the production adapters into a service.
pub(crate) fn workspace_service() -> WorkspaceService {
    WorkspaceService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(PremakeGenerator::new(Box::new(LocalFilesystem::new()))),
        Box::new(GitBootstrapper::new(
            Box::new(SystemCommandRunner::new()),
            Box::new(LocalFilesystem::new()),
        )),
    )
}

/// Use the flag if given, otherwise parse the configured default.
///
/// A bad configured value is a configuration error, not a user error.
pub(crate) fn or_config<T>(flag: Option<T>, key: &str, configured: &str) -> CliResult<T>
where
    T: FromStr<Err = DomainError>,
{
    match flag {
        Some(value) => Ok(value),
        None => configured.parse::<T>().map_err(|e| CliError::ConfigError {
            message: format!("{key}: {e}"),
            source: Some(Box::new(e)),
        }),
    }
}
