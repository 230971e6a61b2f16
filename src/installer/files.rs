//! File deployment for installed modules
//!
//! Copies a fetched module's files into the project. The copy is
//! non-destructive: existing destination files are never overwritten and
//! nothing at the destination is deleted first. Partial copies are not
//! rolled back on failure.

use std::fs;
use std::path::{Component, Path};

use walkdir::WalkDir;

use crate::error::{MeanieError, Result};

/// First path segments excluded from deployment
const IGNORED_DIRS: &[&str] = &["node_modules", ".git", ".svn", ".hg"];

/// Summary of one deployment
#[derive(Debug, Default)]
pub struct DeployReport {
    /// Files copied to the destination
    pub copied: usize,

    /// Files skipped because the destination already had them
    pub skipped: usize,
}

/// Ensure parent directory exists for a path
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| MeanieError::FileCopy {
            src_path: String::new(),
            destination: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

/// True when a relative path's first segment is on the ignore list
fn is_ignored(relative: &Path) -> bool {
    match relative.components().next() {
        Some(Component::Normal(first)) => first
            .to_str()
            .map(|s| IGNORED_DIRS.contains(&s))
            .unwrap_or(false),
        _ => false,
    }
}

/// Recursively copy module files from source to destination
///
/// Missing source directories deploy nothing; a module may legitimately
/// ship metadata only.
pub fn deploy(source: &Path, destination: &Path) -> Result<DeployReport> {
    let mut report = DeployReport::default();

    if !source.is_dir() {
        return Ok(report);
    }

    for entry in WalkDir::new(source)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        if is_ignored(relative) {
            continue;
        }

        let target = destination.join(relative);
        if target.exists() {
            report.skipped += 1;
            continue;
        }

        ensure_parent_dir(&target)?;
        fs::copy(entry.path(), &target).map_err(|e| MeanieError::FileCopy {
            src_path: entry.path().display().to_string(),
            destination: target.display().to_string(),
            reason: e.to_string(),
        })?;
        report.copied += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_deploy_copies_tree() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        write(source.path(), "client/app/app.js", "app");
        write(source.path(), "server/routes.js", "routes");

        let report = deploy(source.path(), dest.path()).unwrap();
        assert_eq!(report.copied, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(
            fs::read_to_string(dest.path().join("client/app/app.js")).unwrap(),
            "app"
        );
        assert_eq!(
            fs::read_to_string(dest.path().join("server/routes.js")).unwrap(),
            "routes"
        );
    }

    #[test]
    fn test_deploy_never_overwrites() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        write(source.path(), "config.js", "from module");
        write(dest.path(), "config.js", "hand-edited");

        let report = deploy(source.path(), dest.path()).unwrap();
        assert_eq!(report.copied, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            fs::read_to_string(dest.path().join("config.js")).unwrap(),
            "hand-edited"
        );
    }

    #[test]
    fn test_deploy_ignores_node_modules_and_vcs_dirs() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        write(source.path(), "node_modules/dep/index.js", "dep");
        write(source.path(), ".git/HEAD", "ref");
        write(source.path(), "app.js", "app");

        let report = deploy(source.path(), dest.path()).unwrap();
        assert_eq!(report.copied, 1);
        assert!(!dest.path().join("node_modules").exists());
        assert!(!dest.path().join(".git").exists());
        assert!(dest.path().join("app.js").exists());
    }

    #[test]
    fn test_deploy_missing_source_is_empty() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        let report = deploy(&source.path().join("src"), dest.path()).unwrap();
        assert_eq!(report.copied, 0);
    }

    #[test]
    fn test_deploy_nested_ignore_only_matches_first_segment() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        // The ignore rule applies to the first segment only
        write(source.path(), "docs/node_modules.md", "doc");

        let report = deploy(source.path(), dest.path()).unwrap();
        assert_eq!(report.copied, 1);
        assert!(dest.path().join("docs/node_modules.md").exists());
    }
}
