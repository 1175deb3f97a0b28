//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `cusp-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `BuildFileGenerator`: premake script generation
//!   - `VcsBootstrapper`: repository initialization
//!   - `CommandRunner`: subprocess execution
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    BuildFileGenerator, CommandInvocation, CommandOutput, CommandRunner, Filesystem,
    VcsBootstrapper, VcsOutcome,
};

#[cfg(test)]
pub use output::{MockBuildFileGenerator, MockFilesystem, MockVcsBootstrapper};
