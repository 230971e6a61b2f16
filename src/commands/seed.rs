//! Seed command implementation
//!
//! Seeds a new module template by shallow-cloning the published seed
//! repository into the current directory. The clone lands in a scratch
//! directory first and is copied in non-destructively, so repository
//! metadata never ships and existing files are never overwritten.

use std::env;
use std::path::PathBuf;

use console::Style;

use crate::cli::SeedArgs;
use crate::error::{MeanieError, Result};
use crate::git;
use crate::installer::files;

/// Base URL for published seed repositories
pub const REPO_BASE: &str = "https://github.com/meanie/";

/// Environment variable overriding the seed repository base (test seam)
pub const REPO_BASE_ENV: &str = "MEANIE_REPO_BASE";

/// Suffix identifying seed repositories
const SEED_SUFFIX: &str = "-seed";

/// Run seed command
pub fn run(project: Option<PathBuf>, args: SeedArgs, force: bool) -> Result<()> {
    let target = super::resolve_start_dir(project)?;

    let mut name = args.name;
    if !name.ends_with(SEED_SUFFIX) {
        name.push_str(SEED_SUFFIX);
    }

    println!(
        "{} is seeding {} in {}",
        Style::new().magenta().apply_to("Meanie"),
        Style::new().magenta().apply_to(&name),
        Style::new().magenta().apply_to(target.display())
    );

    check_dir_empty(&target, force)?;

    let base = env::var(REPO_BASE_ENV).unwrap_or_else(|_| REPO_BASE.to_string());
    let url = format!("{}{}.git", base, name);

    let scratch = tempfile::tempdir().map_err(|e| MeanieError::IoError {
        message: format!("Failed to create scratch directory: {}", e),
    })?;
    let clone_dir = scratch.path().join("seed");

    git::clone_shallow(&url, &clone_dir)?;
    files::deploy(&clone_dir, &target)?;

    println!(
        "{} {} {}",
        Style::new().green().apply_to("Module"),
        Style::new().magenta().apply_to(&name),
        Style::new().green().apply_to("seeded successfully")
    );

    Ok(())
}

/// Require an empty target directory unless forced
fn check_dir_empty(target: &std::path::Path, force: bool) -> Result<()> {
    if !target.exists() {
        return Ok(());
    }

    let has_entries = std::fs::read_dir(target)
        .map_err(|e| MeanieError::IoError {
            message: format!("Failed to read {}: {}", target.display(), e),
        })?
        .next()
        .is_some();

    if !has_entries {
        return Ok(());
    }

    if force {
        println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to("Directory is not empty, but force seeding anyway")
        );
        return Ok(());
    }

    Err(MeanieError::DirectoryNotEmpty {
        path: target.display().to_string(),
    })
}
