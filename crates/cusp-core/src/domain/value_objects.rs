//! Domain value objects: ProjectKind, Toolset, CppDialect.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. This
//! file defines the types, their canonical string forms (the spelling used in
//! `cusp.json`), and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Teach the premake generator its spelling (`premake_kind`)

use crate::domain::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ── ProjectKind ───────────────────────────────────────────────────────────────

/// The output kind of a project.
///
/// `ConsoleApp` is the entry-point kind: a workspace holds at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    ConsoleApp,
    WindowedApp,
    StaticLib,
    SharedLib,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 4] = [
        Self::ConsoleApp,
        Self::WindowedApp,
        Self::StaticLib,
        Self::SharedLib,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConsoleApp => "consoleapp",
            Self::WindowedApp => "windowedapp",
            Self::StaticLib => "staticlib",
            Self::SharedLib => "sharedlib",
        }
    }

    /// Spelling expected by premake's `kind` directive.
    pub const fn premake_kind(&self) -> &'static str {
        match self {
            Self::ConsoleApp => "ConsoleApp",
            Self::WindowedApp => "WindowedApp",
            Self::StaticLib => "StaticLib",
            Self::SharedLib => "SharedLib",
        }
    }

    /// Whether this kind provides the workspace `main()`.
    pub const fn is_entry_point(&self) -> bool {
        matches!(self, Self::ConsoleApp)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consoleapp" | "console" | "app" => Ok(Self::ConsoleApp),
            "windowedapp" | "windowed" => Ok(Self::WindowedApp),
            "staticlib" | "static" | "lib" => Ok(Self::StaticLib),
            "sharedlib" | "shared" | "dll" => Ok(Self::SharedLib),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}

impl Serialize for ProjectKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProjectKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ── Toolset ───────────────────────────────────────────────────────────────────

/// Compiler toolset the generated build scripts target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toolset {
    Gcc,
    Clang,
    Msc,
}

impl Toolset {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gcc => "gcc",
            Self::Clang => "clang",
            Self::Msc => "msc",
        }
    }

    /// Native build system premake should emit for this toolset.
    pub const fn build_system(&self) -> &'static str {
        match self {
            Self::Msc => "msbuild",
            Self::Gcc | Self::Clang => "make",
        }
    }
}

impl fmt::Display for Toolset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Toolset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gcc" | "g++" => Ok(Self::Gcc),
            "clang" | "clang++" => Ok(Self::Clang),
            "msc" | "msvc" => Ok(Self::Msc),
            other => Err(DomainError::UnknownToolset(other.to_string())),
        }
    }
}

// ── CppDialect ────────────────────────────────────────────────────────────────

/// Language standard tag, e.g. `C++17`.
///
/// Kept free-form (premake accepts a growing list); only emptiness and
/// embedded whitespace or quotes are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CppDialect(String);

impl CppDialect {
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'')
        {
            return Err(DomainError::InvalidDialect(raw));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CppDialect {
    fn default() -> Self {
        Self("C++17".into())
    }
}

impl fmt::Display for CppDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CppDialect {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CppDialect {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CppDialect> for String {
    fn from(value: CppDialect) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("ConsoleApp".parse::<ProjectKind>().unwrap(), ProjectKind::ConsoleApp);
        assert_eq!("STATICLIB".parse::<ProjectKind>().unwrap(), ProjectKind::StaticLib);
        assert_eq!("dll".parse::<ProjectKind>().unwrap(), ProjectKind::SharedLib);
        assert!("utility".parse::<ProjectKind>().is_err());
    }

    #[test]
    fn only_consoleapp_is_entry_point() {
        let entry_points: Vec<_> = ProjectKind::ALL
            .iter()
            .filter(|k| k.is_entry_point())
            .collect();
        assert_eq!(entry_points, vec![&ProjectKind::ConsoleApp]);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&ProjectKind::WindowedApp).unwrap();
        assert_eq!(json, "\"windowedapp\"");
        let back: ProjectKind = serde_json::from_str("\"SharedLib\"").unwrap();
        assert_eq!(back, ProjectKind::SharedLib);
    }

    #[test]
    fn toolset_maps_to_build_system() {
        assert_eq!(Toolset::Msc.build_system(), "msbuild");
        assert_eq!(Toolset::Gcc.build_system(), "make");
        assert_eq!("MSVC".parse::<Toolset>().unwrap(), Toolset::Msc);
        assert!("tcc".parse::<Toolset>().is_err());
    }

    #[test]
    fn dialect_rejects_blank_and_whitespace() {
        assert!(CppDialect::new("").is_err());
        assert!(CppDialect::new("C++ 17").is_err());
        assert_eq!(CppDialect::new(" c++20 ").unwrap().as_str(), "c++20");
    }
}
