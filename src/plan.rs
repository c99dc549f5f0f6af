//! The fixed, ordered scaffold plan.
//!
//! Every side effect of a run is one [`Step`] in this list, tagged with the
//! [`Stage`] it belongs to. The runner only iterates it.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::constants::{
    APP_DIR, ATOMIC_TIERS, COMPONENTS_DIR, FEATURES_DIR, MANIFEST_FILE, NPM, NPX,
    VITE_TEMPLATE,
};
use crate::error::Result;
use crate::executor::CommandSpec;
use crate::manifest::ManifestPatch;
use crate::renderer::TemplateRenderer;
use crate::template::operation::Step;
use crate::template::registry::{TemplateFile, SOURCE_TEMPLATES, STATIC_CONFIG};

/// Phases of a scaffold run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Bootstrap,
    InstallDependencies,
    WriteStaticConfig,
    PatchManifest,
    ScaffoldDirectories,
    WriteTemplates,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Bootstrap => "Bootstrap",
            Stage::InstallDependencies => "Install dependencies",
            Stage::WriteStaticConfig => "Write static config",
            Stage::PatchManifest => "Patch manifest",
            Stage::ScaffoldDirectories => "Scaffold directories",
            Stage::WriteTemplates => "Write templates",
        };
        write!(f, "{s}")
    }
}

/// Bootstrap command; the only arguments carrying the project name.
const BOOTSTRAP: &[&str] =
    &["init", "vite@latest", "{{ project_name }}", "--", "--template", VITE_TEMPLATE];

/// Installation and tooling setup, run inside the new project in this order.
const INSTALL: &[(&str, &[&str])] = &[
    ("git", &["init"]),
    (NPM, &["install", "react-router-dom", "@reduxjs/toolkit"]),
    (NPM, &["install", "tailwindcss", "postcss", "autoprefixer"]),
    (NPX, &["tailwindcss", "init", "-p"]),
    (
        NPM,
        &[
            "install",
            "eslint",
            "prettier",
            "eslint-plugin-prettier",
            "eslint-config-prettier",
            "eslint-plugin-react",
            "eslint-plugin-react-hooks",
            "@typescript-eslint/eslint-plugin",
            "@typescript-eslint/parser",
        ],
    ),
    (NPM, &["install", "husky", "lint-staged"]),
    (NPM, &["install", "@heroicons/react", "@headlessui/react"]),
    (
        NPM,
        &[
            "install",
            "--save-dev",
            "jest",
            "@testing-library/react",
            "@types/testing-library__react",
        ],
    ),
];

/// Materialize the git hook from the patched manifest.
const HOOKS: &[(&str, &[&str])] = &[
    (NPX, &["husky", "install"]),
    (NPX, &["husky", "add", ".husky/pre-commit", "npm run lint-staged"]),
];

/// A step together with the stage it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedStep {
    pub stage: Stage,
    pub step: Step,
}

/// Ordered list of everything a run does after the target check.
#[derive(Debug, Clone)]
pub struct Plan {
    project_root: PathBuf,
    steps: Vec<PlannedStep>,
}

impl Plan {
    /// Builds the plan for `project_name` created under `base_dir`.
    pub fn for_project(
        base_dir: &Path,
        project_name: &str,
        renderer: &dyn TemplateRenderer,
    ) -> Result<Self> {
        let project_root = base_dir.join(project_name);
        let context = json!({ "project_name": project_name });
        let mut plan = Self { project_root: project_root.clone(), steps: Vec::new() };

        let bootstrap_args = BOOTSTRAP
            .iter()
            .map(|arg| renderer.render(arg, &context))
            .collect::<Result<Vec<_>>>()?;
        plan.push(Stage::Bootstrap, Step::Run(CommandSpec::new(NPM, bootstrap_args, base_dir)));

        for (program, args) in INSTALL {
            plan.run(Stage::InstallDependencies, program, args);
        }

        for file in &STATIC_CONFIG {
            plan.write(Stage::WriteStaticConfig, file);
        }

        let manifest = project_root.join(MANIFEST_FILE);
        plan.push(Stage::PatchManifest, Step::AwaitManifest(manifest.clone()));
        plan.push(
            Stage::PatchManifest,
            Step::PatchManifest { target: manifest, patch: ManifestPatch::default() },
        );
        for (program, args) in HOOKS {
            plan.run(Stage::PatchManifest, program, args);
        }

        let components = project_root.join(COMPONENTS_DIR);
        for tier in ATOMIC_TIERS {
            plan.push(Stage::ScaffoldDirectories, Step::MakeDir(components.join(tier)));
        }
        plan.push(Stage::ScaffoldDirectories, Step::MakeDir(project_root.join(FEATURES_DIR)));
        plan.push(Stage::ScaffoldDirectories, Step::MakeDir(project_root.join(APP_DIR)));

        for file in &SOURCE_TEMPLATES {
            plan.write(Stage::WriteTemplates, file);
        }

        Ok(plan)
    }

    fn push(&mut self, stage: Stage, step: Step) {
        self.steps.push(PlannedStep { stage, step });
    }

    fn run(&mut self, stage: Stage, program: &str, args: &[&str]) {
        let command = CommandSpec::new(program, args.iter().copied(), &self.project_root);
        self.push(stage, Step::Run(command));
    }

    fn write(&mut self, stage: Stage, file: &TemplateFile) {
        let target = self.project_root.join(file.path);
        self.push(stage, Step::WriteFile { target, content: file.content });
    }

    pub fn steps(&self) -> &[PlannedStep] {
        &self.steps
    }

    /// Every command the plan runs, in order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.steps.iter().filter_map(|planned| match &planned.step {
            Step::Run(command) => Some(command),
            _ => None,
        })
    }
}
