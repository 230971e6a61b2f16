//! Update command implementation
//!
//! Updates named modules, or every installed module when none are named.
//! The meaniefile is the source of truth for what is installed; names that
//! are not in it are filtered out with a warning.

use std::path::PathBuf;

use console::Style;

use crate::cli::UpdateArgs;
use crate::error::{MeanieError, Result};
use crate::installer::{Installer, Mode};
use crate::module::ModuleId;
use crate::project::Project;
use crate::registry::PackageManager;

/// Run update command
pub fn run(
    project: Option<PathBuf>,
    args: UpdateArgs,
    force: bool,
    registry: &dyn PackageManager,
) -> Result<()> {
    let start_dir = super::resolve_start_dir(project)?;
    let project = Project::discover(&start_dir)?;

    let modules = modules_to_update(&project, &args.modules)?;

    let installer = Installer::new(&project, registry, force);
    let report = installer.run(modules, Mode::Update)?;

    if !report.is_success() {
        return Err(MeanieError::BatchFailed {
            failed: report.failed(),
            operation: "update".to_string(),
        });
    }

    Ok(())
}

/// Resolve the update set from the arguments and the meaniefile
fn modules_to_update(project: &Project, requested: &[String]) -> Result<Vec<ModuleId>> {
    let config = project.read_config()?;

    if config.modules.is_empty() {
        return Err(MeanieError::NoModulesInstalled);
    }

    if requested.is_empty() {
        let installed: Vec<String> = config.modules.keys().cloned().collect();
        return ModuleId::parse_all(&installed);
    }

    let mut modules = Vec::new();
    for input in requested {
        let module = ModuleId::parse(input)?;
        if config.modules.contains_key(module.name()) {
            modules.push(module);
        } else {
            println!(
                "{}",
                Style::new()
                    .yellow()
                    .apply_to(format!("Module {} is not installed, skipping", module))
            );
        }
    }

    if modules.is_empty() {
        return Err(MeanieError::ModuleNotInstalled {
            name: requested.join(", "),
        });
    }

    Ok(modules)
}
