//! Dependency resolution between modules
//!
//! A fetched module's manifest declares the modules it depends on, with
//! required semver ranges. Dependencies already present in the project at a
//! satisfying version are skipped; the rest are queued for installation
//! before the dependent module's own files land.

use std::collections::BTreeMap;

use console::Style;
use semver::VersionReq;

use crate::error::{MeanieError, Result};
use crate::module::{ModuleId, PACKAGE_PREFIX};
use crate::project::Project;

/// Compute the dependencies absent from the project or out of range
///
/// Only `meanie-*` dependencies participate; anything else in the map is a
/// plain package-manager dependency the module resolves on its own.
pub fn missing_dependencies(
    project: &Project,
    dependencies: &BTreeMap<String, String>,
) -> Result<Vec<ModuleId>> {
    let mut queue = Vec::new();

    for (package_name, required_range) in dependencies {
        if !package_name.starts_with(PACKAGE_PREFIX) {
            continue;
        }

        let module = ModuleId::parse(package_name)?;
        let range =
            VersionReq::parse(required_range).map_err(|e| MeanieError::ManifestInvalid {
                path: package_name.clone(),
                reason: format!("invalid dependency range '{}': {}", required_range, e),
            })?;

        if project.has_module(module.name(), Some(&range))?.is_some() {
            continue;
        }

        println!(
            "Module requires {} version {}",
            Style::new().magenta().apply_to(&module),
            Style::new().magenta().apply_to(required_range)
        );
        queue.push(module);
    }

    Ok(queue)
}
