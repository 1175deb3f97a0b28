use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Directory holding a project's public headers.
pub const INCLUDE_DIR: &str = "include";

/// Directory holding a project's translation units.
pub const SRC_DIR: &str = "src";

/// Content written to every new header.
pub const HEADER_PRELUDE: &str = "#pragma once\n";

/// Directories an operation needs on disk, in creation order.
///
/// This is the output of the model; it contains no I/O. The workspace
/// service materializes it (and undoes it on failure).
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    root: PathBuf,
    includes_root: bool,
    directories: Vec<PathBuf>,
}

impl ScaffoldPlan {
    /// Plan under an existing `root`. Directories are relative to it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            includes_root: false,
            directories: Vec::new(),
        }
    }

    /// Full tree used at workspace initialization: the root itself, then
    /// the first project's subtree.
    pub fn for_workspace(root: impl Into<PathBuf>, first_project: &str) -> Self {
        Self {
            includes_root: true,
            ..Self::for_project(root, first_project)
        }
    }

    /// Subtree for a single project: `<name>/`, `<name>/include/`, `<name>/src/`.
    pub fn for_project(root: impl Into<PathBuf>, project: &str) -> Self {
        let project = PathBuf::from(project);
        Self::new(root)
            .with_directory(project.clone())
            .with_directory(project.join(INCLUDE_DIR))
            .with_directory(project.join(SRC_DIR))
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directories.push(path.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.directories.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "scaffold entries",
            });
        }

        let mut seen = HashSet::new();
        for path in &self.directories {
            let path_str = path.display().to_string();

            if path.is_absolute() {
                return Err(DomainError::InvalidFileName {
                    name: path_str,
                    reason: "absolute paths are not allowed".into(),
                });
            }
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::InvalidFileName {
                    name: path_str,
                    reason: "path appears twice in the plan".into(),
                });
            }
        }

        Ok(())
    }

    /// Every directory to ensure, joined onto the root, parents first.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.includes_root
            .then(|| self.root.clone())
            .into_iter()
            .chain(self.directories.iter().map(|dir| self.root.join(dir)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_plan_lists_canonical_subtree() {
        let plan = ScaffoldPlan::for_project("Game", "Lib");
        let paths: Vec<_> = plan.paths().collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("Game/Lib"),
                PathBuf::from("Game/Lib/include"),
                PathBuf::from("Game/Lib/src"),
            ]
        );
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn workspace_plan_starts_with_root() {
        let plan = ScaffoldPlan::for_workspace("Game", "Game");
        let paths: Vec<_> = plan.paths().collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("Game"),
                PathBuf::from("Game/Game"),
                PathBuf::from("Game/Game/include"),
                PathBuf::from("Game/Game/src"),
            ]
        );
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn rejects_duplicates_and_absolute_paths() {
        let dup = ScaffoldPlan::new("ws")
            .with_directory("a")
            .with_directory("a");
        assert!(dup.validate().is_err());

        let abs = ScaffoldPlan::new("ws").with_directory("/tmp/x");
        assert!(abs.validate().is_err());
    }

    #[test]
    fn empty_plan_is_invalid() {
        assert!(ScaffoldPlan::new("ws").validate().is_err());
    }
}
