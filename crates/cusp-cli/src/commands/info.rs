//! `cusp info`: summarize the workspace.

use serde_json::json;
use tracing::instrument;

use cusp_core::{application::ProjectSummary, domain::Solution};

use crate::{
    cli::{GlobalArgs, OutputFormat},
    commands::workspace_service,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let root = global.workspace_root();
    let service = workspace_service();
    let solution = service.load(&root)?;
    let summary = service.summarize(&root, &solution)?;

    if output.format() == OutputFormat::Json {
        let text = serde_json::to_string_pretty(&to_json(&solution, &summary))
            .map_err(std::io::Error::from)?;
        output.raw(&text)?;
        return Ok(());
    }

    output.header(&format!("Workspace '{}'", solution.name()))?;
    output.field("Root", &root.display().to_string())?;
    output.field("Architecture", solution.architecture())?;
    output.field("Toolset", solution.toolset().as_str())?;
    output.field("Build system", solution.build_system())?;
    output.field("Dialect", solution.cpp_dialect().as_str())?;
    output.field("Author", solution.author())?;
    output.field(
        "Entry point",
        solution.entry_point().map_or("(none)", |p| p.name()),
    )?;

    output.print("")?;
    output.header("Projects")?;
    for project in &summary {
        output.print(&format!(
            "  {:<16} {:<12} {:<8} {} header(s), {} source(s)",
            project.name,
            project.kind.as_str(),
            project.cpp_dialect,
            project.headers,
            project.sources
        ))?;
        if !project.links.is_empty() {
            output.field("links", &project.links.join(", "))?;
        }
    }

    Ok(())
}

fn to_json(solution: &Solution, summary: &[ProjectSummary]) -> serde_json::Value {
    json!({
        "workspace": solution.name(),
        "architecture": solution.architecture(),
        "toolset": solution.toolset().as_str(),
        "build_system": solution.build_system(),
        "cppdialect": solution.cpp_dialect().as_str(),
        "author": solution.author(),
        "entry_point": solution.entry_point().map(|p| p.name()),
        "projects": summary.iter().map(|p| json!({
            "name": p.name,
            "kind": p.kind.as_str(),
            "cppdialect": p.cpp_dialect,
            "links": p.links,
            "headers": p.headers,
            "sources": p.sources,
        })).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cusp_core::domain::{CppDialect, Project, ProjectKind, Toolset};

    #[test]
    fn json_summary_lists_projects_in_order() {
        let mut solution =
            Solution::new("Game", "x86_64", Toolset::Msc, CppDialect::default(), "ada").unwrap();
        solution
            .add_project(
                Project::new("Game", CppDialect::default(), ProjectKind::ConsoleApp, ["Lib"])
                    .unwrap(),
            )
            .unwrap();
        let summary = vec![ProjectSummary {
            name: "Game".into(),
            kind: ProjectKind::ConsoleApp,
            cpp_dialect: "C++17".into(),
            links: vec!["Lib".into()],
            headers: 2,
            sources: 3,
        }];

        let value = to_json(&solution, &summary);

        assert_eq!(value["build_system"], "msbuild");
        assert_eq!(value["entry_point"], "Game");
        assert_eq!(value["projects"][0]["kind"], "consoleapp");
        assert_eq!(value["projects"][0]["sources"], 3);
    }
}
