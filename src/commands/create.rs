//! Create command implementation
//!
//! Scaffolds a new Meanie project: writes a fresh meaniefile, then installs
//! the core module set. Core module failure aborts project creation; a
//! half-initialized project is worse than none.

use std::fs;
use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::CreateArgs;
use crate::error::{MeanieError, Result};
use crate::installer::{CORE_MODULES, Installer, Mode};
use crate::module::ModuleId;
use crate::project::Project;
use crate::registry::PackageManager;

/// Run create command
pub fn run(
    project: Option<PathBuf>,
    args: CreateArgs,
    force: bool,
    registry: &dyn PackageManager,
) -> Result<()> {
    let target = match args.directory {
        Some(dir) => dir,
        None => super::resolve_start_dir(project)?,
    };

    println!(
        "{} is creating a new project in {}",
        Style::new().magenta().apply_to("Meanie"),
        Style::new().magenta().apply_to(target.display())
    );

    check_destination(&target, force)?;

    fs::create_dir_all(&target).map_err(|e| MeanieError::ProjectCreateFailed {
        reason: format!("failed to create {}: {}", target.display(), e),
    })?;

    let name = project_name(&target);
    let project = Project::at(&target);

    println!(
        "{} is creating a meaniefile",
        Style::new().magenta().apply_to("Meanie")
    );
    project.create_config(&name)?;
    println!("{}", Style::new().green().apply_to("Created meaniefile"));

    let core = ModuleId::parse_all(
        &CORE_MODULES
            .iter()
            .map(|m| (*m).to_string())
            .collect::<Vec<_>>(),
    )?;

    let installer = Installer::new(&project, registry, force);
    let report = installer.run(core, Mode::Install)?;
    if !report.is_success() {
        return Err(MeanieError::ProjectCreateFailed {
            reason: format!(
                "core module(s) failed to install: {}",
                report.failed_modules().join(", ")
            ),
        });
    }

    println!(
        "{}",
        Style::new()
            .green()
            .apply_to("Meanie project created successfully")
    );
    println!(
        "{}",
        Style::new()
            .dim()
            .apply_to("Run `npm install` to install all the dependencies")
    );

    Ok(())
}

/// Refuse a non-empty destination
///
/// A directory whose only entry is a meaniefile counts as empty, so a
/// partially-created project can be retried.
fn check_destination(target: &Path, force: bool) -> Result<()> {
    if !target.exists() {
        return Ok(());
    }

    let entries: Vec<_> = fs::read_dir(target)
        .map_err(|e| MeanieError::ProjectCreateFailed {
            reason: format!("failed to read {}: {}", target.display(), e),
        })?
        .filter_map(|e| e.ok())
        .collect();

    let only_meaniefile = entries.len() == 1
        && entries[0]
            .file_name()
            .to_str()
            .map(|n| n.contains("meaniefile"))
            .unwrap_or(false);

    if entries.is_empty() || only_meaniefile {
        return Ok(());
    }

    if force {
        println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to("Destination directory is not empty, creating project anyway")
        );
        return Ok(());
    }

    Err(MeanieError::DirectoryNotEmpty {
        path: target.display().to_string(),
    })
}

/// Derive the project name from the target directory
fn project_name(target: &Path) -> String {
    target
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("meanie-project")
        .to_string()
}
