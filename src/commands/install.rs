//! Install command implementation
//!
//! Thin wrapper over the installer: discover the project, normalize the
//! module identifiers, and run the batch. Each module's outcome is reported
//! by the installer; any failure makes the whole invocation exit non-zero.

use std::path::PathBuf;

use crate::cli::InstallArgs;
use crate::error::{MeanieError, Result};
use crate::installer::{Installer, Mode};
use crate::module::ModuleId;
use crate::project::Project;
use crate::registry::PackageManager;

/// Run install command
pub fn run(
    project: Option<PathBuf>,
    args: InstallArgs,
    force: bool,
    registry: &dyn PackageManager,
) -> Result<()> {
    let start_dir = super::resolve_start_dir(project)?;
    let project = Project::discover(&start_dir)?;

    let modules = ModuleId::parse_all(&args.modules)?;

    let installer = Installer::new(&project, registry, force);
    let report = installer.run(modules, Mode::Install)?;

    if !report.is_success() {
        return Err(MeanieError::BatchFailed {
            failed: report.failed(),
            operation: "install".to_string(),
        });
    }

    Ok(())
}
