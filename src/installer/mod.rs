//! Install and update orchestration for Meanie modules
//!
//! This module drives the end-to-end pipeline for one or many modules:
//!
//! 1. Skip modules the project already has (install mode, unforced)
//! 2. Fetch the package via the package manager
//! 3. Load its manifest and check CLI compatibility
//! 4. Install missing dependencies first
//! 5. Deploy files into the project
//! 6. Record the module in the meaniefile
//!
//! The queue is processed strictly in order, one module at a time. One
//! module's failure never blocks the siblings queued after it; failures are
//! attributed per module in the batch report.

pub mod deps;
pub mod files;

use std::collections::VecDeque;

use console::Style;
use semver::{Version, VersionReq};

use crate::error::{MeanieError, Result};
use crate::manifest::ModuleManifest;
use crate::module::ModuleId;
use crate::progress::ProgressDisplay;
use crate::project::Project;
use crate::registry::PackageManager;

/// Modules that bootstrap a project; updating them needs --force
pub const CORE_MODULES: &[&str] = &["core"];

/// How a batch entered the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// User-requested install
    Install,

    /// User-requested update; short-circuits when already up to date
    Update,

    /// Dependency of another module; queued because the installed version
    /// is absent or out of range, so the already-installed skip does not
    /// apply
    Dependency,
}

/// Result of processing one module
#[derive(Debug)]
pub enum Outcome {
    /// Files deployed and module recorded
    Installed(Version),

    /// Update-mode install of a newer version
    Updated(Version),

    /// Install-mode skip: the project already has the module
    AlreadyInstalled,

    /// Update-mode skip: installed version is >= latest published
    UpToDate(Version),

    /// Update-mode skip: core module without --force
    Protected,

    /// Pipeline failed for this module
    Failed(MeanieError),
}

/// One processed module with its outcome
#[derive(Debug)]
pub struct ModuleOutcome {
    pub module: ModuleId,
    pub outcome: Outcome,
}

/// Aggregated per-module results of a batch
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ModuleOutcome>,
}

impl BatchReport {
    /// Number of modules that failed
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, Outcome::Failed(_)))
            .count()
    }

    /// True when no module failed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Short names of failed modules
    pub fn failed_modules(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, Outcome::Failed(_)))
            .map(|o| o.module.name())
            .collect()
    }
}

/// Install/update orchestrator
pub struct Installer<'a> {
    project: &'a Project,
    registry: &'a dyn PackageManager,
    force: bool,
    cli_version: Version,
}

impl<'a> Installer<'a> {
    /// Create an orchestrator bound to a project and package manager
    pub fn new(project: &'a Project, registry: &'a dyn PackageManager, force: bool) -> Self {
        let cli_version = Version::parse(env!("CARGO_PKG_VERSION"))
            .unwrap_or_else(|_| Version::new(0, 0, 0));

        Self {
            project,
            registry,
            force,
            cli_version,
        }
    }

    /// Process a batch of modules in order
    ///
    /// Requires an existing project config; fails with `NoProject` before
    /// any network or filesystem action otherwise.
    pub fn run(&self, modules: Vec<ModuleId>, mode: Mode) -> Result<BatchReport> {
        if !Project::exists(&self.project.root) {
            return Err(MeanieError::NoProject);
        }

        let mut queue: VecDeque<ModuleId> = modules.into();
        let total = queue.len();
        let progress = (mode != Mode::Dependency && total > 1)
            .then(|| ProgressDisplay::new(total as u64));

        let mut report = BatchReport::default();
        let mut position = 0;

        while let Some(module) = queue.pop_front() {
            position += 1;
            if let Some(ref pb) = progress {
                pb.update_module(module.name(), position, total);
            }

            self.announce(&module, mode);
            let outcome = match self.process(&module, mode) {
                Ok(outcome) => outcome,
                Err(error) => Outcome::Failed(error),
            };
            self.report_outcome(&module, &outcome, mode);

            report.outcomes.push(ModuleOutcome { module, outcome });
            if let Some(ref pb) = progress {
                pb.inc();
            }
        }

        if let Some(pb) = progress {
            pb.finish();
        }

        Ok(report)
    }

    /// Run the full pipeline for a single module
    fn process(&self, module: &ModuleId, mode: Mode) -> Result<Outcome> {
        if mode == Mode::Install
            && !self.force
            && self.project.has_module(module.name(), None)?.is_some()
        {
            return Ok(Outcome::AlreadyInstalled);
        }

        if mode == Mode::Update {
            if CORE_MODULES.contains(&module.name()) && !self.force {
                return Ok(Outcome::Protected);
            }

            let installed = self
                .project
                .has_module(module.name(), None)?
                .unwrap_or_else(|| Version::new(0, 0, 0));
            let latest = self.registry.latest_version(module.package_name())?;
            if installed >= latest {
                return Ok(Outcome::UpToDate(installed));
            }
        }

        let fetched = self.registry.fetch(module.package_name())?;

        let resolved =
            ModuleManifest::resolve(&fetched.path, module.package_name(), &self.project.root)?;

        self.check_cli_version(module, &resolved.manifest)?;

        self.ensure_dependencies(module, &resolved)?;

        files::deploy(&resolved.source, &resolved.destination)?;

        // Files are in place; bookkeeping failure downgrades to a warning
        if let Err(error) = self.project.add_module(module.name(), &fetched.version) {
            println!(
                "{}",
                Style::new()
                    .yellow()
                    .apply_to(format!("Could not update meaniefile: {}", error))
            );
        }

        self.show_notes(&resolved.manifest);

        Ok(match mode {
            Mode::Update => Outcome::Updated(fetched.version),
            Mode::Install | Mode::Dependency => Outcome::Installed(fetched.version),
        })
    }

    /// Validate the manifest's CLI version range against the running tool
    fn check_cli_version(&self, module: &ModuleId, manifest: &ModuleManifest) -> Result<()> {
        let Some(ref range) = manifest.cli_version else {
            return Ok(());
        };

        let req = VersionReq::parse(range).map_err(|e| MeanieError::ManifestInvalid {
            path: module.package_name().to_string(),
            reason: format!("invalid cliVersion range '{}': {}", range, e),
        })?;

        if req.matches(&self.cli_version) {
            return Ok(());
        }

        if self.force {
            println!(
                "{}",
                Style::new().yellow().apply_to(format!(
                    "Module {} requires CLI version {}, installing anyway with --force",
                    module, range
                ))
            );
            return Ok(());
        }

        Err(MeanieError::IncompatibleToolVersion {
            module: module.name().to_string(),
            required: range.clone(),
            current: self.cli_version.to_string(),
        })
    }

    /// Install the subset of dependencies the project is missing
    ///
    /// Dependencies are a hard precondition: a failure here aborts the
    /// dependent module's installation.
    fn ensure_dependencies(
        &self,
        module: &ModuleId,
        resolved: &crate::manifest::ResolvedManifest,
    ) -> Result<()> {
        let missing = deps::missing_dependencies(self.project, &resolved.manifest.dependencies)?;
        if missing.is_empty() {
            return Ok(());
        }

        let report = self.run(missing, Mode::Dependency)?;
        if let Some(failed) = report.failed_modules().first() {
            return Err(MeanieError::DependencyInstall {
                module: module.name().to_string(),
                dependency: format!("meanie-{}", failed),
            });
        }

        Ok(())
    }

    /// Log the start of one module's pipeline
    fn announce(&self, module: &ModuleId, mode: Mode) {
        let verb = match mode {
            Mode::Update => "updating",
            Mode::Install | Mode::Dependency => "installing",
        };
        println!(
            "{} is {} module {}",
            Style::new().magenta().apply_to("Meanie"),
            verb,
            Style::new().magenta().apply_to(module)
        );
    }

    /// Emit the per-module success/failure diagnostic
    fn report_outcome(&self, module: &ModuleId, outcome: &Outcome, mode: Mode) {
        let green = Style::new().green();
        let magenta = Style::new().magenta();
        let red = Style::new().red();
        let yellow = Style::new().yellow();

        match outcome {
            Outcome::Installed(version) => println!(
                "{} {} {} {} {}",
                green.apply_to("Module"),
                magenta.apply_to(module),
                green.apply_to("version"),
                magenta.apply_to(version),
                green.apply_to("installed successfully")
            ),
            Outcome::Updated(version) => println!(
                "{} {} {} {} {}",
                green.apply_to("Module"),
                magenta.apply_to(module),
                green.apply_to("version"),
                magenta.apply_to(version),
                green.apply_to("updated successfully")
            ),
            Outcome::AlreadyInstalled => println!(
                "Module {} is already installed, run `meanie update {}` to update it",
                magenta.apply_to(module),
                module
            ),
            Outcome::UpToDate(version) => println!(
                "{} {} {} {} {}",
                green.apply_to("Module"),
                magenta.apply_to(module),
                green.apply_to("version"),
                magenta.apply_to(version),
                green.apply_to("already up to date")
            ),
            Outcome::Protected => println!(
                "{}",
                yellow.apply_to(format!(
                    "Module {} is a core module, use --force to update it",
                    module
                ))
            ),
            Outcome::Failed(error) => {
                let verb = match mode {
                    Mode::Update => "update",
                    Mode::Install | Mode::Dependency => "install",
                };
                eprintln!(
                    "{} {} {}\n  {}",
                    red.apply_to("Module"),
                    magenta.apply_to(module),
                    red.apply_to(format!("failed to {}:", verb)),
                    error
                );
            }
        }
    }

    /// Print the manifest's usage notes after a successful install
    fn show_notes(&self, manifest: &ModuleManifest) {
        let grey = Style::new().dim();
        let cyan = Style::new().cyan();

        if let Some(ref instructions) = manifest.instructions {
            println!(
                "{} {}",
                grey.apply_to("Usage instructions:"),
                cyan.apply_to(instructions)
            );
        }
        if let Some(ref post_install) = manifest.post_install {
            println!("{}", grey.apply_to(post_install));
        }
    }
}
