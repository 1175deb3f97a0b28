//! premake5 build script generator.

use std::fmt;
use std::path::Path;

use cusp_core::{
    application::{ApplicationError, ports::BuildFileGenerator, ports::Filesystem},
    domain::{INCLUDE_DIR, Manifest, ProjectRecord, SRC_DIR},
    error::CuspResult,
};
use tracing::{debug, instrument};

/// Name of the generated script at the workspace root.
pub const PREMAKE_FILE_NAME: &str = "premake5.lua";

const INDENT: &str = "    ";

/// Writes `premake5.lua` from the workspace tree.
pub struct PremakeGenerator {
    filesystem: Box<dyn Filesystem>,
}

impl PremakeGenerator {
    /// Create a generator writing through the given filesystem.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Render the script without writing it.
    pub fn render(manifest: &Manifest) -> String {
        PremakeScript(manifest).to_string()
    }
}

impl BuildFileGenerator for PremakeGenerator {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn generate(&self, root: &Path, tree: &serde_json::Value) -> CuspResult<()> {
        let manifest = Manifest::from_tree(tree).map_err(|e| ApplicationError::GenerationFailed {
            reason: format!("invalid workspace tree: {e}"),
        })?;

        let script = Self::render(&manifest);
        let path = root.join(PREMAKE_FILE_NAME);
        self.filesystem
            .write_file(&path, &script)
            .map_err(|e| ApplicationError::GenerationFailed {
                reason: e.to_string(),
            })?;

        debug!(
            path = %path.display(),
            projects = manifest.projects.len(),
            "premake5.lua written"
        );
        Ok(())
    }
}

struct PremakeScript<'a>(&'a Manifest);

impl fmt::Display for PremakeScript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0;

        writeln!(f, "-- This File Was Generated By Cusp")?;
        writeln!(f, "-- Author: {}", Comment(&m.author))?;
        writeln!(f)?;
        writeln!(f, "workspace {}", Lua(&m.workspace))?;
        writeln!(f, "{INDENT}architecture {}", Lua(&m.architecture))?;
        writeln!(f, "{INDENT}configurations {{ \"Debug\", \"Release\" }}")?;
        writeln!(f, "{INDENT}toolset {}", Lua(m.toolset.as_str()))?;
        if let Some(entry) = m.entry_point() {
            writeln!(f, "{INDENT}startproject {}", Lua(&entry.projectname))?;
        }

        for project in &m.projects {
            writeln!(f)?;
            write_project(f, m, project)?;
        }

        Ok(())
    }
}

fn write_project(f: &mut fmt::Formatter<'_>, m: &Manifest, p: &ProjectRecord) -> fmt::Result {
    writeln!(f, "project {}", Lua(&p.projectname))?;
    writeln!(f, "{INDENT}location {}", Lua(&p.projectname))?;
    writeln!(f, "{INDENT}kind {}", Lua(p.kind.premake_kind()))?;
    writeln!(f, "{INDENT}language \"C++\"")?;
    writeln!(f, "{INDENT}cppdialect {}", Lua(p.cppdialect.as_str()))?;
    writeln!(f, "{INDENT}targetdir \"%{{prj.location}}/bin/%{{cfg.buildcfg}}\"")?;
    writeln!(f, "{INDENT}objdir \"%{{prj.location}}/bin-init/%{{cfg.buildcfg}}\"")?;

    writeln!(f)?;
    let globs = [
        format!("%{{prj.location}}/{INCLUDE_DIR}/**.h"),
        format!("%{{prj.location}}/{INCLUDE_DIR}/**.hpp"),
        format!("%{{prj.location}}/{SRC_DIR}/**.c"),
        format!("%{{prj.location}}/{SRC_DIR}/**.cpp"),
    ];
    write_block(f, "files", globs.iter().map(String::as_str))?;

    writeln!(f)?;
    let mut includes = vec![format!("%{{prj.location}}/{INCLUDE_DIR}")];
    includes.extend(
        p.links
            .iter()
            .filter(|link| m.projects.iter().any(|other| &other.projectname == *link))
            .map(|link| format!("%{{wks.location}}/{link}/{INCLUDE_DIR}")),
    );
    write_block(f, "includedirs", includes.iter().map(String::as_str))?;

    if !p.links.is_empty() {
        writeln!(f)?;
        write_block(f, "links", p.links.iter().map(String::as_str))?;
    }

    writeln!(f)?;
    writeln!(f, "{INDENT}filter \"configurations:Debug\"")?;
    writeln!(f, "{INDENT}{INDENT}defines {{ \"DEBUG\" }}")?;
    writeln!(f, "{INDENT}{INDENT}symbols \"On\"")?;
    writeln!(f)?;
    writeln!(f, "{INDENT}filter \"configurations:Release\"")?;
    writeln!(f, "{INDENT}{INDENT}defines {{ \"NDEBUG\" }}")?;
    writeln!(f, "{INDENT}{INDENT}optimize \"On\"")?;
    writeln!(f)?;
    writeln!(f, "{INDENT}filter {{}}")
}

fn write_block<'a>(
    f: &mut fmt::Formatter<'_>,
    directive: &str,
    items: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    writeln!(f, "{INDENT}{directive}")?;
    writeln!(f, "{INDENT}{{")?;
    for item in items {
        writeln!(f, "{INDENT}{INDENT}{},", Lua(item))?;
    }
    writeln!(f, "{INDENT}}}")
}

/// A double-quoted Lua string literal.
struct Lua<'a>(&'a str);

impl fmt::Display for Lua<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c.is_control() => {
                    let mut buf = [0; 4];
                    for byte in c.encode_utf8(&mut buf).bytes() {
                        write!(f, "\\{byte:03}")?;
                    }
                }
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")
    }
}

/// Text for a single `--` comment line; control characters become spaces.
struct Comment<'a>(&'a str);

impl fmt::Display for Comment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            write!(f, "{}", if c.is_control() { ' ' } else { c })?;
        }
        Ok(())
    }
}
