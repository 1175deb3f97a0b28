//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use cusp_core::domain::{CppDialect, ProjectKind, Toolset};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cusp",
    bin_name = "cusp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "C/C++ workspace scaffolding on top of premake",
    long_about = "Cusp creates and maintains multi-project C/C++ workspaces: \
                  directory layout, a canonical cusp.json, and a generated premake5.lua.",
    after_help = "EXAMPLES:\n\
        \x20 cusp new Game --toolset clang --git\n\
        \x20 cusp -C Game add-project Engine --kind staticlib --links m,pthread\n\
        \x20 cusp -C Game add-class Engine Renderer\n\
        \x20 cusp completions bash > /usr/share/bash-completion/completions/cusp",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new workspace with its first project.
    #[command(
        visible_alias = "n",
        about = "Create a new workspace",
        after_help = "EXAMPLES:\n\
            \x20 cusp new Game\n\
            \x20 cusp new Tools --project Core --kind staticlib --toolset msc\n\
            \x20 cusp new Game --dry-run"
    )]
    New(NewArgs),

    /// Add a project to the current workspace.
    #[command(
        visible_alias = "ap",
        about = "Add a project to the workspace",
        after_help = "EXAMPLES:\n\
            \x20 cusp add-project Engine --kind staticlib\n\
            \x20 cusp add-project Net --kind sharedlib --links ssl,crypto --dialect C++20"
    )]
    AddProject(AddProjectArgs),

    /// Add a class (header + source) to a project.
    #[command(about = "Add a class to a project")]
    AddClass(AddClassArgs),

    /// Add a header to a project's include directory.
    #[command(about = "Add a header to a project")]
    AddHeader(AddFileArgs),

    /// Add a source file to a project's src directory.
    #[command(about = "Add a source file to a project")]
    AddSource(AddFileArgs),

    /// Regenerate build files from cusp.json.
    #[command(visible_alias = "gen", about = "Regenerate premake5.lua")]
    Generate,

    /// Show the workspace summary.
    #[command(about = "Show workspace information")]
    Info,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cusp completions bash > ~/.local/share/bash-completion/completions/cusp\n\
            \x20 cusp completions zsh  > ~/.zfunc/_cusp\n\
            \x20 cusp completions fish > ~/.config/fish/completions/cusp.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Cusp configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 cusp config get defaults.toolset\n\
            \x20 cusp config list\n\
            \x20 cusp config init"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `cusp new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Workspace name; also the directory created under `--output`.
    #[arg(value_name = "WORKSPACE", help = "Workspace name")]
    pub name: String,

    /// Name of the first project (defaults to the workspace name).
    #[arg(short = 'p', long = "project", value_name = "NAME")]
    pub project: Option<String>,

    /// Target architecture, e.g. x86_64.
    #[arg(short = 'a', long = "arch", value_name = "ARCH")]
    pub architecture: Option<String>,

    /// Compiler toolset.
    #[arg(
        short = 't',
        long = "toolset",
        value_name = "TOOLSET",
        value_parser = Toolset::from_str,
        help = "Compiler toolset (gcc, clang, msc)"
    )]
    pub toolset: Option<Toolset>,

    #[command(flatten)]
    pub project_opts: ProjectOpts,

    /// Author recorded in cusp.json.
    #[arg(long = "author", value_name = "NAME")]
    pub author: Option<String>,

    /// Initialise a git repository.
    #[arg(long = "git", conflicts_with = "no_git")]
    pub git: bool,

    /// Skip git initialisation even if enabled in config.
    #[arg(long = "no-git")]
    pub no_git: bool,

    /// Parent directory of the new workspace.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Per-project options shared by `new` and `add-project`.
#[derive(Debug, Args)]
pub struct ProjectOpts {
    /// Project kind.
    #[arg(
        short = 'k',
        long = "kind",
        value_name = "KIND",
        value_parser = ProjectKind::from_str,
        help = "Project kind (consoleapp, windowedapp, staticlib, sharedlib)"
    )]
    pub kind: Option<ProjectKind>,

    /// Libraries to link, comma separated.
    #[arg(
        short = 'l',
        long = "links",
        value_name = "LIB",
        value_delimiter = ','
    )]
    pub links: Vec<String>,

    /// C++ language standard.
    #[arg(
        short = 'd',
        long = "dialect",
        value_name = "DIALECT",
        value_parser = CppDialect::from_str,
        help = "C++ dialect, e.g. C++17"
    )]
    pub dialect: Option<CppDialect>,
}

// ── add-project ───────────────────────────────────────────────────────────────

/// Arguments for `cusp add-project`.
#[derive(Debug, Args)]
pub struct AddProjectArgs {
    /// New project name.
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub project_opts: ProjectOpts,
}

// ── file generators ───────────────────────────────────────────────────────────

/// Arguments for `cusp add-class`.
#[derive(Debug, Args)]
pub struct AddClassArgs {
    /// Project receiving the class.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Class name; creates `<CLASS>.h` and `<CLASS>.cpp`.
    #[arg(value_name = "CLASS")]
    pub class: String,
}

/// Arguments for `cusp add-header` and `cusp add-source`.
#[derive(Debug, Args)]
pub struct AddFileArgs {
    /// Project receiving the file.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// File name, including extension.
    #[arg(value_name = "FILE")]
    pub file: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cusp completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `cusp config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.toolset`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write a configuration file holding the defaults.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "cusp", "new", "Game", "--toolset", "clang", "--kind", "staticlib", "--links",
            "m,pthread",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name, "Game");
        assert_eq!(args.toolset, Some(Toolset::Clang));
        assert_eq!(args.project_opts.kind, Some(ProjectKind::StaticLib));
        assert_eq!(args.project_opts.links, ["m", "pthread"]);
    }

    #[test]
    fn kind_aliases_are_accepted() {
        let cli = Cli::parse_from(["cusp", "add-project", "Lib", "-k", "lib"]);
        let Commands::AddProject(args) = cli.command else {
            panic!("expected AddProject command");
        };
        assert_eq!(args.project_opts.kind, Some(ProjectKind::StaticLib));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = Cli::try_parse_from(["cusp", "add-project", "Lib", "--kind", "utility"]);
        assert!(result.is_err());
    }

    #[test]
    fn workspace_flag_is_global() {
        let cli = Cli::parse_from(["cusp", "info", "-C", "ws"]);
        assert_eq!(cli.global.workspace_root(), PathBuf::from("ws"));
    }

    #[test]
    fn no_color_flag_takes_no_value() {
        let cli = Cli::parse_from(["cusp", "--no-color", "info"]);
        assert!(cli.global.no_color);
    }

    #[test]
    fn git_flags_conflict() {
        let result = Cli::try_parse_from(["cusp", "new", "Game", "--git", "--no-git"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["cusp", "--quiet", "--verbose", "info"]);
        assert!(result.is_err());
    }
}
