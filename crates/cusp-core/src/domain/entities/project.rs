use std::fmt;

use crate::domain::{
    entities::common::validate_name,
    error::DomainError,
    value_objects::{CppDialect, ProjectKind},
};

/// A single compilable unit of a workspace.
///
/// Projects carry no behaviour beyond their declared metadata; invariants
/// that span projects (entry point, unique names) live on `Solution`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    cpp_dialect: CppDialect,
    kind: ProjectKind,
    links: Vec<String>,
}

impl Project {
    /// Create a validated project.
    ///
    /// Link names are trimmed; empty entries are dropped. Order and
    /// duplicates are kept because they matter to the linker.
    pub fn new(
        name: impl Into<String>,
        cpp_dialect: CppDialect,
        kind: ProjectKind,
        links: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;

        let links = links
            .into_iter()
            .map(|l| {
                let l: String = l.into();
                l.trim().to_string()
            })
            .filter(|l| !l.is_empty())
            .collect();

        Ok(Self {
            name,
            cpp_dialect,
            kind,
            links,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cpp_dialect(&self) -> &CppDialect {
        &self.cpp_dialect
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn is_entry_point(&self) -> bool {
        self.kind.is_entry_point()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.kind, self.cpp_dialect)
    }
}
