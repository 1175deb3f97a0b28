//! Workspace Service - main application orchestrator.
//!
//! This service owns the workspace lifecycle:
//! 1. Build or load the in-memory `Solution`
//! 2. Materialize the directory layout (with rollback on failure)
//! 3. Persist `cusp.json` as a full snapshot
//! 4. Regenerate build files from the persisted tree
//! 5. Optionally bootstrap version control
//!
//! After any mutating call returns `Ok`, `cusp.json` and the generated build
//! files describe exactly the in-memory solution.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{BuildFileGenerator, Filesystem, VcsBootstrapper, VcsOutcome},
    },
    domain::{
        CONFIG_FILE_NAME, CppDialect, HEADER_PRELUDE, INCLUDE_DIR, Manifest, Project,
        ProjectKind, SRC_DIR, ScaffoldPlan, Solution, Toolset, validate_file_name,
        validate_name,
    },
    error::{Context, CuspResult},
};

/// Everything needed to create a fresh workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitRequest {
    pub workspace: String,
    pub project: String,
    pub architecture: String,
    pub toolset: Toolset,
    pub cpp_dialect: CppDialect,
    pub kind: ProjectKind,
    pub links: Vec<String>,
    pub author: String,
    pub init_git: bool,
}

/// A project to append to an existing workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub kind: ProjectKind,
    pub links: Vec<String>,
    pub cpp_dialect: CppDialect,
}

/// Result of a successful `init`.
#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub root: PathBuf,
    pub solution: Solution,
    pub vcs: VcsOutcome,
}

/// Result of `add_class`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassOutcome {
    Created { header: PathBuf, source: PathBuf },
    /// The project directory does not exist; nothing was written.
    ProjectNotFound { project: String },
}

impl ClassOutcome {
    /// Whether the caller should surface a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::ProjectNotFound { .. })
    }
}

/// Per-project overview used by `cusp info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub name: String,
    pub kind: ProjectKind,
    pub cpp_dialect: String,
    pub links: Vec<String>,
    pub headers: usize,
    pub sources: usize,
}

/// Path of the canonical config file for a workspace root.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Main workspace service.
pub struct WorkspaceService {
    filesystem: Box<dyn Filesystem>,
    generator: Box<dyn BuildFileGenerator>,
    vcs: Box<dyn VcsBootstrapper>,
}

impl WorkspaceService {
    /// Create a new workspace service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use cusp_core::application::WorkspaceService;
    ///
    /// let service = WorkspaceService::new(
    ///     filesystem, // impl Filesystem
    ///     generator,  // impl BuildFileGenerator
    ///     vcs,        // impl VcsBootstrapper
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        generator: Box<dyn BuildFileGenerator>,
        vcs: Box<dyn VcsBootstrapper>,
    ) -> Self {
        Self {
            filesystem,
            generator,
            vcs,
        }
    }

    /// `true` when no workspace has been initialized at `root` yet.
    pub fn check_init_preconditions(&self, root: &Path) -> bool {
        !self.filesystem.exists(&config_path(root))
    }

    /// Create a new workspace under `parent`.
    ///
    /// The workspace root is `<parent>/<workspace>`.
    #[instrument(
        skip_all,
        fields(
            workspace = %request.workspace,
            project = %request.project,
            parent = %parent.display()
        )
    )]
    pub fn init(&self, parent: &Path, request: InitRequest) -> CuspResult<InitOutcome> {
        let root = parent.join(&request.workspace);
        if !self.check_init_preconditions(&root) {
            return Err(ApplicationError::AlreadyInitialized { path: root }.into());
        }

        // 1. Build the model through the same constructors live mutation uses
        let mut solution = Solution::new(
            request.workspace,
            request.architecture,
            request.toolset,
            request.cpp_dialect.clone(),
            request.author,
        )?
        .with_git(request.init_git);

        let first = Project::new(
            request.project,
            request.cpp_dialect,
            request.kind,
            request.links,
        )?;
        let plan = ScaffoldPlan::for_workspace(&root, first.name());
        solution.add_project(first)?;

        // 2. Directories
        let created = self.materialize(&plan)?;

        // 3. cusp.json
        let manifest = Manifest::from_solution(&solution);
        if let Err(e) = self.write_config(&root, &manifest) {
            warn!("Config write failed, attempting rollback");
            self.rollback(&created);
            return Err(e);
        }

        // 4. Build files
        self.generate(&root, &manifest)?;

        // 5. VCS
        let vcs = self.vcs.maybe_init(&root, solution.init_git())?;
        if vcs.is_warning() {
            warn!(root = %root.display(), outcome = ?vcs, "Repository setup skipped");
        }

        info!(root = %root.display(), "Workspace initialized");
        Ok(InitOutcome {
            root,
            solution,
            vcs,
        })
    }

    /// Load the workspace described by `<root>/cusp.json`.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn load(&self, root: &Path) -> CuspResult<Solution> {
        let path = config_path(root);
        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::ConfigNotFound { path }.into());
        }

        let text = self.filesystem.read_to_string(&path)?;
        let manifest = Manifest::from_json_str(&text).map_err(|e| malformed(&path, e))?;
        let solution = manifest.into_solution().map_err(|e| malformed(&path, e))?;

        debug!(projects = solution.projects().len(), "Workspace loaded");
        Ok(solution)
    }

    /// Persist the full solution and regenerate build files.
    #[instrument(skip_all, fields(workspace = %solution.name()))]
    pub fn save(&self, root: &Path, solution: &Solution) -> CuspResult<()> {
        let manifest = Manifest::from_solution(solution);
        self.write_config(root, &manifest)?;
        self.generate(root, &manifest)
    }

    /// Re-run build file generation without touching the model or config.
    #[instrument(skip_all, fields(workspace = %solution.name()))]
    pub fn regenerate(&self, root: &Path, solution: &Solution) -> CuspResult<()> {
        self.generate(root, &Manifest::from_solution(solution))
    }

    /// Append a project to the workspace.
    ///
    /// Rejected additions (second entry point, duplicate name, invalid input)
    /// leave the model, the directory tree and `cusp.json` untouched. If an
    /// on-disk step fails, the project is removed from the model again and
    /// the directories created by this call are rolled back.
    #[instrument(skip_all, fields(workspace = %solution.name(), project = %new.name))]
    pub fn add_project(
        &self,
        root: &Path,
        solution: &mut Solution,
        new: NewProject,
    ) -> CuspResult<()> {
        let project = Project::new(new.name, new.cpp_dialect, new.kind, new.links)?;
        let name = project.name().to_string();
        solution.add_project(project)?;

        let plan = ScaffoldPlan::for_project(root, &name);
        let created = match self.materialize(&plan) {
            Ok(created) => created,
            Err(e) => {
                solution.remove_project(&name);
                return Err(e);
            }
        };

        let manifest = Manifest::from_solution(solution);
        if let Err(e) = self.write_config(root, &manifest) {
            warn!("Config write failed, attempting rollback");
            self.rollback(&created);
            solution.remove_project(&name);
            return Err(e);
        }

        self.generate(root, &manifest)?;

        info!(projects = solution.projects().len(), "Project added");
        Ok(())
    }

    /// Write `<root>/<project>/include/<header>` containing an include guard.
    ///
    /// An existing file is overwritten.
    #[instrument(skip(self, root))]
    pub fn add_header(&self, root: &Path, project: &str, header: &str) -> CuspResult<PathBuf> {
        validate_name(project)?;
        validate_file_name(header)?;

        let path = root.join(project).join(INCLUDE_DIR).join(header);
        self.filesystem.write_file(&path, HEADER_PRELUDE)?;
        debug!(path = %path.display(), "Header written");
        Ok(path)
    }

    /// Write an empty `<root>/<project>/src/<file>`.
    ///
    /// An existing file is truncated.
    #[instrument(skip(self, root))]
    pub fn add_source_file(&self, root: &Path, project: &str, file: &str) -> CuspResult<PathBuf> {
        validate_name(project)?;
        validate_file_name(file)?;

        let path = root.join(project).join(SRC_DIR).join(file);
        self.filesystem.write_file(&path, "")?;
        debug!(path = %path.display(), "Source file written");
        Ok(path)
    }

    /// Create `<class>.h` and `<class>.cpp` in an existing project.
    ///
    /// A missing project directory is not an error: the outcome reports it
    /// and nothing is written.
    #[instrument(skip(self, root))]
    pub fn add_class(&self, root: &Path, project: &str, class: &str) -> CuspResult<ClassOutcome> {
        validate_name(project)?;
        validate_file_name(class)?;

        if !self.filesystem.is_dir(&root.join(project)) {
            warn!("Project not found");
            return Ok(ClassOutcome::ProjectNotFound {
                project: project.to_string(),
            });
        }

        let header = self.add_header(root, project, &format!("{class}.h"))?;
        let source = self.add_source_file(root, project, &format!("{class}.cpp"))?;
        Ok(ClassOutcome::Created { header, source })
    }

    /// Header and source counts per project, in workspace order.
    pub fn summarize(&self, root: &Path, solution: &Solution) -> CuspResult<Vec<ProjectSummary>> {
        solution
            .projects()
            .iter()
            .map(|project| {
                let dir = root.join(project.name());
                Ok(ProjectSummary {
                    name: project.name().to_string(),
                    kind: project.kind(),
                    cpp_dialect: project.cpp_dialect().to_string(),
                    links: project.links().to_vec(),
                    headers: self.count_files(&dir.join(INCLUDE_DIR))?,
                    sources: self.count_files(&dir.join(SRC_DIR))?,
                })
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_config(&self, root: &Path, manifest: &Manifest) -> CuspResult<()> {
        let text = manifest
            .to_json_string()
            .context("Failed to serialize cusp.json")?;
        let path = config_path(root);
        self.filesystem.write_file(&path, &text)?;
        debug!(path = %path.display(), "cusp.json written");
        Ok(())
    }

    fn generate(&self, root: &Path, manifest: &Manifest) -> CuspResult<()> {
        let tree = manifest
            .to_tree()
            .context("Failed to build the generator tree")?;
        self.generator.generate(root, &tree)?;
        debug!("Build files generated");
        Ok(())
    }

    /// Create every entry of the plan, returning the directories that did
    /// not exist before. On failure, those directories are removed again.
    fn materialize(&self, plan: &ScaffoldPlan) -> CuspResult<Vec<PathBuf>> {
        plan.validate()?;

        let mut created = Vec::new();
        match self.materialize_into(plan, &mut created) {
            Ok(()) => Ok(created),
            Err(e) => {
                warn!("Scaffolding failed, attempting rollback");
                self.rollback(&created);
                Err(e)
            }
        }
    }

    fn materialize_into(&self, plan: &ScaffoldPlan, created: &mut Vec<PathBuf>) -> CuspResult<()> {
        for path in plan.paths() {
            self.ensure_dir(&path, created)?;
        }

        Ok(())
    }

    fn ensure_dir(&self, path: &Path, created: &mut Vec<PathBuf>) -> CuspResult<()> {
        if self.filesystem.exists(path) {
            return Ok(());
        }
        self.filesystem.create_dir_all(path)?;
        created.push(path.to_path_buf());
        Ok(())
    }

    /// Best-effort rollback, deepest directory first.
    fn rollback(&self, created: &[PathBuf]) {
        for path in created.iter().rev() {
            if let Err(e) = self.filesystem.remove_dir_all(path) {
                warn!(
                    error = %e,
                    path = %path.display(),
                    "Rollback failed"
                );
            }
        }
        if !created.is_empty() {
            info!(directories = created.len(), "Rollback finished");
        }
    }

    fn count_files(&self, dir: &Path) -> CuspResult<usize> {
        if !self.filesystem.is_dir(dir) {
            return Ok(0);
        }
        Ok(self.filesystem.list_files(dir)?.len())
    }
}

fn malformed(path: &Path, reason: impl std::fmt::Display) -> crate::error::CuspError {
    ApplicationError::ConfigMalformed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockBuildFileGenerator, MockFilesystem, MockVcsBootstrapper};
    use crate::domain::DomainError;
    use crate::error::CuspError;
    use mockall::{Sequence, predicate::eq};

    fn denied(path: &Path) -> CuspError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "permission denied".into(),
        }
        .into()
    }

    fn service(
        fs: MockFilesystem,
        generator: MockBuildFileGenerator,
        vcs: MockVcsBootstrapper,
    ) -> WorkspaceService {
        WorkspaceService::new(Box::new(fs), Box::new(generator), Box::new(vcs))
    }

    fn request(init_git: bool) -> InitRequest {
        InitRequest {
            workspace: "Game".into(),
            project: "Game".into(),
            architecture: "x86_64".into(),
            toolset: Toolset::Gcc,
            cpp_dialect: CppDialect::default(),
            kind: ProjectKind::ConsoleApp,
            links: vec![],
            author: "ada".into(),
            init_git,
        }
    }

    fn game_solution() -> Solution {
        let mut s = Solution::new("Game", "x86_64", Toolset::Gcc, CppDialect::default(), "ada")
            .unwrap();
        s.add_project(
            Project::new(
                "Game",
                CppDialect::default(),
                ProjectKind::ConsoleApp,
                Vec::<String>::new(),
            )
            .unwrap(),
        )
        .unwrap();
        s
    }

    fn lib() -> NewProject {
        NewProject {
            name: "Lib".into(),
            kind: ProjectKind::StaticLib,
            links: vec!["m".into()],
            cpp_dialect: CppDialect::new("c++17").unwrap(),
        }
    }

    // ========================================================================
    // init
    // ========================================================================

    #[test]
    fn init_creates_tree_then_config_then_generates_then_bootstraps() {
        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();
        let mut generator = MockBuildFileGenerator::new();
        let mut vcs = MockVcsBootstrapper::new();

        fs.expect_exists().returning(|_| false);
        for dir in ["out/Game", "out/Game/Game", "out/Game/Game/include", "out/Game/Game/src"] {
            fs.expect_create_dir_all()
                .with(eq(PathBuf::from(dir)))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("out/Game/cusp.json") && content.contains("\"workspace\": \"Game\"")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        generator
            .expect_generate()
            .withf(|root, tree| {
                root == Path::new("out/Game") && tree["projects"]["Game"]["kind"] == "consoleapp"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        vcs.expect_maybe_init()
            .with(eq(PathBuf::from("out/Game")), eq(true))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(VcsOutcome::Initialized));

        let outcome = service(fs, generator, vcs)
            .init(Path::new("out"), request(true))
            .unwrap();

        assert_eq!(outcome.root, PathBuf::from("out/Game"));
        assert_eq!(outcome.vcs, VcsOutcome::Initialized);
        assert_eq!(outcome.solution.projects().len(), 1);
        assert_eq!(outcome.solution.projects()[0].name(), "Game");
    }

    #[test]
    fn init_refuses_initialized_workspace() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(PathBuf::from("out/Game/cusp.json")))
            .returning(|_| true);
        fs.expect_create_dir_all().times(0);

        let err = service(fs, MockBuildFileGenerator::new(), MockVcsBootstrapper::new())
            .init(Path::new("out"), request(false))
            .unwrap_err();

        assert!(matches!(
            err,
            CuspError::Application(ApplicationError::AlreadyInitialized { .. })
        ));
    }

    #[test]
    fn init_rolls_back_when_config_write_fails() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().times(4).returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| Err(denied(path)));
        let mut removed = Sequence::new();
        for dir in ["out/Game/Game/src", "out/Game/Game/include", "out/Game/Game", "out/Game"] {
            fs.expect_remove_dir_all()
                .with(eq(PathBuf::from(dir)))
                .times(1)
                .in_sequence(&mut removed)
                .returning(|_| Ok(()));
        }
        let mut generator = MockBuildFileGenerator::new();
        generator.expect_generate().times(0);

        let result = service(fs, generator, MockVcsBootstrapper::new())
            .init(Path::new("out"), request(false));

        assert!(matches!(
            result,
            Err(CuspError::Application(ApplicationError::FilesystemError { .. }))
        ));
    }

    #[test]
    fn init_reports_missing_vcs_tool_as_warning_outcome() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        let mut generator = MockBuildFileGenerator::new();
        generator.expect_generate().returning(|_, _| Ok(()));
        let mut vcs = MockVcsBootstrapper::new();
        vcs.expect_maybe_init()
            .returning(|_, _| Ok(VcsOutcome::ToolUnavailable));

        let outcome = service(fs, generator, vcs)
            .init(Path::new("."), request(true))
            .unwrap();

        assert!(outcome.vcs.is_warning());
    }

    #[test]
    fn init_keeps_workspace_when_repository_command_fails() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_remove_dir_all().times(0);
        let mut generator = MockBuildFileGenerator::new();
        generator.expect_generate().times(1).returning(|_, _| Ok(()));
        let mut vcs = MockVcsBootstrapper::new();
        vcs.expect_maybe_init().returning(|_, _| {
            Ok(VcsOutcome::Failed {
                command: "git init".into(),
                status: Some(128),
                stderr: "fatal: cannot mkdir .git".into(),
            })
        });

        let outcome = service(fs, generator, vcs)
            .init(Path::new("."), request(true))
            .unwrap();

        assert!(outcome.vcs.is_warning());
        assert_eq!(outcome.solution.projects().len(), 1);
    }

    // ========================================================================
    // add_project
    // ========================================================================

    #[test]
    fn add_project_rewrites_full_config() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p == Path::new("ws"));
        fs.expect_create_dir_all().times(3).returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("ws/cusp.json")
                    && content.contains("\"Game\"")
                    && content.contains("\"Lib\"")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let mut generator = MockBuildFileGenerator::new();
        generator
            .expect_generate()
            .withf(|_, tree| tree["projects"].as_object().map(|o| o.len()) == Some(2))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut solution = game_solution();
        service(fs, generator, MockVcsBootstrapper::new())
            .add_project(Path::new("ws"), &mut solution, lib())
            .unwrap();

        assert_eq!(solution.projects().len(), 2);
        assert_eq!(solution.projects()[1].links(), ["m"]);
    }

    #[test]
    fn add_project_rejects_second_entry_point_without_side_effects() {
        // No expectations: any filesystem or generator call panics.
        let fs = MockFilesystem::new();
        let generator = MockBuildFileGenerator::new();

        let mut solution = game_solution();
        let before = solution.clone();
        let err = service(fs, generator, MockVcsBootstrapper::new())
            .add_project(
                Path::new("ws"),
                &mut solution,
                NewProject {
                    name: "Game2".into(),
                    kind: ProjectKind::ConsoleApp,
                    links: vec![],
                    cpp_dialect: CppDialect::new("c++17").unwrap(),
                },
            )
            .unwrap_err();

        assert!(matches!(
            err,
            CuspError::Domain(DomainError::MultipleEntryPoints { .. })
        ));
        assert_eq!(solution, before);
    }

    #[test]
    fn add_project_rolls_back_partial_directories() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p == Path::new("ws"));
        fs.expect_create_dir_all().returning(|p| {
            if p.ends_with("src") {
                Err(denied(p))
            } else {
                Ok(())
            }
        });
        let mut seq = Sequence::new();
        for dir in ["ws/Lib/include", "ws/Lib"] {
            fs.expect_remove_dir_all()
                .with(eq(PathBuf::from(dir)))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }
        fs.expect_write_file().times(0);

        let mut solution = game_solution();
        let before = solution.clone();
        let result = service(fs, MockBuildFileGenerator::new(), MockVcsBootstrapper::new())
            .add_project(Path::new("ws"), &mut solution, lib());

        assert!(result.is_err());
        assert_eq!(solution, before);
    }

    #[test]
    fn add_project_restores_model_when_config_write_fails() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p == Path::new("ws"));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| Err(denied(p)));
        fs.expect_remove_dir_all().times(3).returning(|_| Ok(()));

        let mut solution = game_solution();
        let before = solution.clone();
        let result = service(fs, MockBuildFileGenerator::new(), MockVcsBootstrapper::new())
            .add_project(Path::new("ws"), &mut solution, lib());

        assert!(result.is_err());
        assert_eq!(solution, before);
    }

    // ========================================================================
    // load
    // ========================================================================

    #[test]
    fn load_without_config_is_not_found() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);

        let err = service(fs, MockBuildFileGenerator::new(), MockVcsBootstrapper::new())
            .load(Path::new("ws"))
            .unwrap_err();

        assert!(matches!(
            err,
            CuspError::Application(ApplicationError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn load_with_broken_json_is_malformed() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok("{ \"workspace\": ".into()));

        let err = service(fs, MockBuildFileGenerator::new(), MockVcsBootstrapper::new())
            .load(Path::new("ws"))
            .unwrap_err();

        assert!(matches!(
            err,
            CuspError::Application(ApplicationError::ConfigMalformed { .. })
        ));
    }

    #[test]
    fn load_round_trips_saved_config() {
        let written = Manifest::from_solution(&game_solution())
            .to_json_string()
            .unwrap();
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(move |_| Ok(written.clone()));

        let solution = service(fs, MockBuildFileGenerator::new(), MockVcsBootstrapper::new())
            .load(Path::new("ws"))
            .unwrap();

        assert_eq!(solution, game_solution());
    }

    // ========================================================================
    // files
    // ========================================================================

    #[test]
    fn add_class_on_missing_project_is_a_warning() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| false);
        fs.expect_write_file().times(0);

        let outcome = service(fs, MockBuildFileGenerator::new(), MockVcsBootstrapper::new())
            .add_class(Path::new("ws"), "Ghost", "Player")
            .unwrap();

        assert!(outcome.is_warning());
    }

    #[test]
    fn add_class_writes_header_and_source() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_write_file()
            .with(eq(PathBuf::from("ws/Game/include/Player.h")), eq(HEADER_PRELUDE))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .with(eq(PathBuf::from("ws/Game/src/Player.cpp")), eq(""))
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = service(fs, MockBuildFileGenerator::new(), MockVcsBootstrapper::new())
            .add_class(Path::new("ws"), "Game", "Player")
            .unwrap();

        assert_eq!(
            outcome,
            ClassOutcome::Created {
                header: PathBuf::from("ws/Game/include/Player.h"),
                source: PathBuf::from("ws/Game/src/Player.cpp"),
            }
        );
    }

    #[test]
    fn add_header_rejects_traversal() {
        let err = service(
            MockFilesystem::new(),
            MockBuildFileGenerator::new(),
            MockVcsBootstrapper::new(),
        )
        .add_header(Path::new("ws"), "Game", "../../evil.h")
        .unwrap_err();

        assert!(matches!(
            err,
            CuspError::Domain(DomainError::InvalidFileName { .. })
        ));
    }
}
