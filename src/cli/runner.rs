use crate::{
    cli::Args,
    config::Config,
    error::{Error, Result},
    executor::{CommandExecutor, ProcessExecutor},
    ioutils::{check_target, ensure_dir, write_file},
    manifest::{await_manifest, patch_manifest},
    plan::{Plan, Stage},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    template::operation::Step,
};
use serde_json::json;
use std::path::{Path, PathBuf};

const NEXT_STEPS: &str = "cd {{ project_name }} && npm run dev";

/// Main CLI runner that drives a scaffold run from argument check to the last file write
pub struct Runner<E: CommandExecutor> {
    config: Config,
    base_dir: PathBuf,
    executor: E,
    renderer: MiniJinjaRenderer,
}

impl<E: CommandExecutor> Runner<E> {
    /// Creates a runner that creates projects under `base_dir`.
    pub fn new(config: Config, base_dir: impl Into<PathBuf>, executor: E) -> Self {
        Self { config, base_dir: base_dir.into(), executor, renderer: MiniJinjaRenderer::new() }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Executes the complete scaffold workflow.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Root of the generated project
    pub fn run(&mut self, project_name: Option<&str>) -> Result<PathBuf> {
        self.config.presentation.welcome();

        let project_name = Self::parse_project_name(project_name)?;
        let project_root = check_target(self.base_dir.join(project_name))?;

        let plan = Plan::for_project(&self.base_dir, project_name, &self.renderer)?;

        if self.config.dry_run {
            self.print_plan(&plan);
            return Ok(project_root);
        }

        self.execute_plan(&plan)?;

        let hint = self.next_steps(project_name)?;
        self.config.presentation.success("Project setup completed!");
        self.config.presentation.note(hint);
        log::info!("Project generated in {}", project_root.display());

        Ok(project_root)
    }

    /// A missing, empty or blank name cannot be used as a directory.
    fn parse_project_name(project_name: Option<&str>) -> Result<&str> {
        match project_name {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(Error::MissingArgument),
        }
    }

    /// Hint printed after the completion message.
    fn next_steps(&self, project_name: &str) -> Result<String> {
        let hint = self.renderer.render(NEXT_STEPS, &json!({ "project_name": project_name }))?;
        Ok(format!("Next: {hint}"))
    }

    fn print_plan(&self, plan: &Plan) {
        let mut current = None;
        for planned in plan.steps() {
            if current != Some(planned.stage) {
                self.config.presentation.stage(planned.stage);
                current = Some(planned.stage);
            }
            self.config.presentation.note(planned.step.describe(true));
        }
    }

    /// Runs every step in order, stopping at the first failure.
    fn execute_plan(&mut self, plan: &Plan) -> Result<()> {
        let mut current: Option<Stage> = None;
        for planned in plan.steps() {
            if current != Some(planned.stage) {
                self.config.presentation.stage(planned.stage);
                current = Some(planned.stage);
            }
            log::info!("{}", planned.step.describe(false));
            self.execute_step(&planned.step).map_err(|e| e.in_stage(planned.stage))?;
        }
        Ok(())
    }

    fn execute_step(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Run(command) => {
                if !command.working_dir.is_dir() {
                    return Err(Error::WorkingDirectoryMissing {
                        command: command.to_string(),
                        working_dir: command.working_dir.clone(),
                    });
                }
                self.executor.execute(command)
            }
            Step::MakeDir(target) => ensure_dir(target),
            Step::WriteFile { target, content } => write_file(content, target),
            Step::AwaitManifest(target) => await_manifest(target, &self.config.manifest_wait),
            Step::PatchManifest { target, patch } => patch_manifest(target, patch),
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: &Args) -> Result<PathBuf> {
    let base_dir = std::env::current_dir()?;
    run_in(args, &base_dir)
}

/// Runs the real workflow with projects created under `base_dir`.
pub fn run_in(args: &Args, base_dir: &Path) -> Result<PathBuf> {
    let mut runner = Runner::new(args.config(), base_dir, ProcessExecutor);
    runner.run(args.project_name.as_deref())
}
