//! Canonical `cusp.json` schema.
//!
//! The manifest is the persisted form of a [`Solution`] and the only input
//! the build file generator sees. Shape:
//!
//! ```json
//! {
//!   "workspace": "Game",
//!   "architecture": "x86_64",
//!   "author": "ada",
//!   "toolset": "gcc",
//!   "cppdialect": "C++17",
//!   "projects": {
//!     "Game": { "projectname": "Game", "cppdialect": "C++17", "kind": "consoleapp", "links": [] }
//!   }
//! }
//! ```
//!
//! `projects` is an object keyed by project name. Its entries are written
//! and read back in workspace order; the map visitor below collects them into
//! a `Vec`, so ordering never depends on the JSON map implementation.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, SeqAccess, Visitor},
};

use crate::domain::{
    entities::{Project, Solution},
    error::DomainError,
    value_objects::{CppDialect, ProjectKind, Toolset},
};

/// Fixed name of the config file at the workspace root.
pub const CONFIG_FILE_NAME: &str = "cusp.json";

/// Serialized workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub workspace: String,
    pub architecture: String,
    pub author: String,
    pub toolset: Toolset,
    pub cppdialect: CppDialect,
    #[serde(with = "ordered_projects")]
    pub projects: Vec<ProjectRecord>,
}

/// Serialized project. The name is duplicated in the enclosing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub projectname: String,
    pub cppdialect: CppDialect,
    pub kind: ProjectKind,
    pub links: Vec<String>,
}

impl From<&Project> for ProjectRecord {
    fn from(project: &Project) -> Self {
        Self {
            projectname: project.name().to_string(),
            cppdialect: project.cpp_dialect().clone(),
            kind: project.kind(),
            links: project.links().to_vec(),
        }
    }
}

impl ProjectRecord {
    /// Rebuild the project through the same constructor live mutation uses.
    pub fn into_project(self) -> Result<Project, DomainError> {
        Project::new(self.projectname, self.cppdialect, self.kind, self.links)
    }
}

impl Manifest {
    pub fn from_solution(solution: &Solution) -> Self {
        Self {
            workspace: solution.name().to_string(),
            architecture: solution.architecture().to_string(),
            author: solution.author().to_string(),
            toolset: solution.toolset(),
            cppdialect: solution.cpp_dialect().clone(),
            projects: solution.projects().iter().map(ProjectRecord::from).collect(),
        }
    }

    /// Reconstruct the solution, re-checking every workspace invariant.
    pub fn into_solution(self) -> Result<Solution, DomainError> {
        let mut solution = Solution::new(
            self.workspace,
            self.architecture,
            self.toolset,
            self.cppdialect,
            self.author,
        )?;

        for record in self.projects {
            solution.add_project(record.into_project()?)?;
        }

        Ok(solution)
    }

    /// Parse `cusp.json` text.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Pretty-printed `cusp.json` text with a trailing newline.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }

    /// JSON tree handed to the build file generator.
    pub fn to_tree(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn from_tree(tree: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(tree)
    }

    pub fn entry_point(&self) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.kind.is_entry_point())
    }
}

mod ordered_projects {
    use super::*;

    pub fn serialize<S: Serializer>(
        projects: &[ProjectRecord],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(projects.iter().map(|p| (p.projectname.as_str(), p)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<ProjectRecord>, D::Error> {
        deserializer.deserialize_any(ProjectsVisitor)
    }

    struct ProjectsVisitor;

    impl<'de> Visitor<'de> for ProjectsVisitor {
        type Value = Vec<ProjectRecord>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object of project records keyed by project name")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut projects = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, record)) = map.next_entry::<String, ProjectRecord>()? {
                if key != record.projectname {
                    return Err(de::Error::custom(format!(
                        "project key '{key}' does not match projectname '{}'",
                        record.projectname
                    )));
                }
                projects.push(record);
            }
            Ok(projects)
        }

        // Sequences of records are accepted on read; writes always use the map form.
        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut projects = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(record) = seq.next_element::<ProjectRecord>()? {
                projects.push(record);
            }
            Ok(projects)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Solution {
        let mut s = Solution::new(
            "Game",
            "x86_64",
            Toolset::Clang,
            CppDialect::new("C++20").unwrap(),
            "ada",
        )
        .unwrap();
        for (name, kind, links) in [
            ("Game", ProjectKind::ConsoleApp, vec!["Zeta", "Alpha"]),
            ("Zeta", ProjectKind::StaticLib, vec!["m", "m"]),
            ("Alpha", ProjectKind::SharedLib, vec![]),
        ] {
            s.add_project(
                Project::new(name, CppDialect::default(), kind, links).unwrap(),
            )
            .unwrap();
        }
        s
    }

    #[test]
    fn serializes_canonical_keys() {
        let tree = Manifest::from_solution(&sample()).to_tree().unwrap();

        assert_eq!(tree["workspace"], "Game");
        assert_eq!(tree["architecture"], "x86_64");
        assert_eq!(tree["author"], "ada");
        assert_eq!(tree["toolset"], "clang");
        assert_eq!(tree["cppdialect"], "C++20");
        assert_eq!(tree["projects"]["Game"]["projectname"], "Game");
        assert_eq!(tree["projects"]["Game"]["kind"], "consoleapp");
        assert_eq!(tree["projects"]["Zeta"]["links"], serde_json::json!(["m", "m"]));
    }

    #[test]
    fn round_trip_preserves_order_and_values() {
        let original = sample();
        let text = Manifest::from_solution(&original).to_json_string().unwrap();
        let restored = Manifest::from_json_str(&text)
            .unwrap()
            .into_solution()
            .unwrap();

        let names: Vec<_> = restored.projects().iter().map(Project::name).collect();
        assert_eq!(names, ["Game", "Zeta", "Alpha"]);
        assert_eq!(restored.projects(), original.projects());
        assert_eq!(restored.name(), original.name());
        assert_eq!(restored.toolset(), original.toolset());
    }

    #[test]
    fn serialization_is_idempotent() {
        let first = Manifest::from_solution(&sample()).to_json_string().unwrap();
        let again = Manifest::from_json_str(&first)
            .unwrap()
            .into_solution()
            .map(|s| Manifest::from_solution(&s).to_json_string().unwrap())
            .unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn rejects_key_name_mismatch() {
        let text = r#"{
            "workspace": "Game", "architecture": "x86", "author": "",
            "toolset": "gcc", "cppdialect": "C++17",
            "projects": { "A": { "projectname": "B", "cppdialect": "C++17", "kind": "staticlib", "links": [] } }
        }"#;
        assert!(Manifest::from_json_str(text).is_err());
    }

    #[test]
    fn rejects_missing_keys() {
        let text = r#"{ "workspace": "Game", "projects": {} }"#;
        assert!(Manifest::from_json_str(text).is_err());
    }

    #[test]
    fn accepts_sequence_of_records() {
        let text = r#"{
            "workspace": "Game", "architecture": "x86", "author": "",
            "toolset": "msc", "cppdialect": "C++17",
            "projects": [ { "projectname": "Game", "cppdialect": "C++17", "kind": "consoleapp", "links": ["d3d11"] } ]
        }"#;
        let manifest = Manifest::from_json_str(text).unwrap();
        assert_eq!(manifest.projects.len(), 1);
        assert_eq!(manifest.entry_point().map(|p| p.projectname.as_str()), Some("Game"));
    }

    #[test]
    fn invariants_rechecked_on_load() {
        let text = r#"{
            "workspace": "Game", "architecture": "x86", "author": "",
            "toolset": "gcc", "cppdialect": "C++17",
            "projects": {
                "A": { "projectname": "A", "cppdialect": "C++17", "kind": "consoleapp", "links": [] },
                "B": { "projectname": "B", "cppdialect": "C++17", "kind": "consoleapp", "links": [] }
            }
        }"#;
        let err = Manifest::from_json_str(text)
            .unwrap()
            .into_solution()
            .unwrap_err();
        assert!(matches!(err, DomainError::MultipleEntryPoints { .. }));
    }
}
