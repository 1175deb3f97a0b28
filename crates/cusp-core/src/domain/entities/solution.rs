use crate::domain::{
    entities::{common::validate_name, project::Project},
    error::DomainError,
    value_objects::{CppDialect, Toolset},
};

/// A workspace: ordered projects plus workspace-level metadata.
///
/// This is the pure in-memory model. It enforces the cross-project
/// invariants on every insertion:
///
/// - at most one entry-point (`consoleapp`) project
/// - project names are unique
///
/// Insertion order is preserved and is the order projects appear in
/// `cusp.json` and in generated build scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    name: String,
    architecture: String,
    toolset: Toolset,
    cpp_dialect: CppDialect,
    author: String,
    init_git: bool,
    projects: Vec<Project>,
}

impl Solution {
    /// Create an empty solution with validated metadata.
    pub fn new(
        name: impl Into<String>,
        architecture: impl Into<String>,
        toolset: Toolset,
        cpp_dialect: CppDialect,
        author: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;

        let architecture = architecture.into().trim().to_string();
        if architecture.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "architecture",
            });
        }

        Ok(Self {
            name,
            architecture,
            toolset,
            cpp_dialect,
            author: author.into(),
            init_git: false,
            projects: Vec::new(),
        })
    }

    /// Request VCS bootstrap when the workspace is initialized.
    pub fn with_git(mut self, init_git: bool) -> Self {
        self.init_git = init_git;
        self
    }

    /// Append a project, enforcing the workspace invariants.
    ///
    /// On error the solution is left untouched.
    pub fn add_project(&mut self, project: Project) -> Result<(), DomainError> {
        if self.contains(project.name()) {
            return Err(DomainError::DuplicateProject {
                name: project.name().to_string(),
            });
        }

        if project.is_entry_point() {
            if let Some(existing) = self.entry_point() {
                return Err(DomainError::MultipleEntryPoints {
                    existing: existing.name().to_string(),
                });
            }
        }

        self.projects.push(project);
        Ok(())
    }

    /// Remove a project by name. Used to undo an insertion whose on-disk
    /// side effects failed.
    pub(crate) fn remove_project(&mut self, name: &str) -> Option<Project> {
        let index = self.projects.iter().position(|p| p.name() == name)?;
        Some(self.projects.remove(index))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn toolset(&self) -> Toolset {
        self.toolset
    }

    pub fn cpp_dialect(&self) -> &CppDialect {
        &self.cpp_dialect
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn init_git(&self) -> bool {
        self.init_git
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.project(name).is_some()
    }

    /// The project providing `main()`, if any.
    pub fn entry_point(&self) -> Option<&Project> {
        self.projects.iter().find(|p| p.is_entry_point())
    }

    pub fn build_system(&self) -> &'static str {
        self.toolset.build_system()
    }
}
