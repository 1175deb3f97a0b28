//! Version-control bootstrap adapters.

mod git;

pub use git::{GITIGNORE, GitBootstrapper};
