//! Package manager client for fetching published modules
//!
//! Modules are published as npm packages. The production client shells out
//! to the `npm` binary; the seam is a trait so the orchestrator never
//! depends on npm directly. Query and install failures surface verbatim,
//! no retries.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use semver::Version;

use crate::error::{MeanieError, Result};

/// Environment variable overriding the npm binary (test seam)
pub const NPM_BIN_ENV: &str = "MEANIE_NPM";

/// Environment variable overriding the cache/staging base directory
pub const CACHE_DIR_ENV: &str = "MEANIE_CACHE_DIR";

/// Ephemeral result of one package-manager install operation
#[derive(Debug, Clone)]
pub struct FetchedPackage {
    /// Resolved version of the fetched package
    pub version: Version,

    /// Filesystem location npm installed the package into
    pub path: PathBuf,
}

/// Package manager operations the installer depends on
pub trait PackageManager {
    /// Latest published version of a package
    fn latest_version(&self, package: &str) -> Result<Version>;

    /// Fetch a package into a staging location
    fn fetch(&self, package: &str) -> Result<FetchedPackage>;
}

/// npm-backed package manager client
pub struct NpmClient {
    bin: String,
    staging_base: PathBuf,
}

impl NpmClient {
    /// Client using `npm` from PATH (or the `MEANIE_NPM` override) and a
    /// staging area under the user cache dir (or `MEANIE_CACHE_DIR`)
    pub fn new() -> Self {
        let bin = env::var(NPM_BIN_ENV).unwrap_or_else(|_| "npm".to_string());

        let staging_base = env::var(CACHE_DIR_ENV).map(PathBuf::from).unwrap_or_else(|_| {
            dirs::cache_dir()
                .unwrap_or_else(env::temp_dir)
                .join("meanie")
        });

        Self { bin, staging_base }
    }

    fn run(&self, package: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.bin).args(args).output().map_err(|e| {
            MeanieError::PackageManager {
                package: package.to_string(),
                reason: format!("failed to run {}: {}", self.bin, e),
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MeanieError::PackageManager {
                package: package.to_string(),
                reason: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for NpmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageManager for NpmClient {
    fn latest_version(&self, package: &str) -> Result<Version> {
        let stdout = self.run(package, &["view", package, "version", "--json"])?;

        parse_view_version(&stdout).ok_or_else(|| MeanieError::PackageManager {
            package: package.to_string(),
            reason: format!("unexpected `view` output: {}", stdout.trim()),
        })
    }

    fn fetch(&self, package: &str) -> Result<FetchedPackage> {
        let staging = self.staging_base.join("staging").join(package);
        fs::create_dir_all(&staging).map_err(|e| MeanieError::PackageManager {
            package: package.to_string(),
            reason: format!("failed to create staging dir: {}", e),
        })?;

        let prefix = staging.display().to_string();
        self.run(
            package,
            &[
                "install",
                package,
                "--prefix",
                &prefix,
                "--no-save",
                "--no-audit",
                "--no-fund",
                "--loglevel=error",
            ],
        )?;

        let path = staging.join("node_modules").join(package);
        let version = installed_version(&path).map_err(|e| MeanieError::PackageManager {
            package: package.to_string(),
            reason: format!("installed package is unreadable: {}", e),
        })?;

        Ok(FetchedPackage { version, path })
    }
}

/// Parse `npm view <pkg> version --json` output
///
/// npm prints either a JSON string or, for some registries, an array of
/// version strings with the latest last.
fn parse_view_version(stdout: &str) -> Option<Version> {
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).ok()?;

    let raw = match &value {
        serde_json::Value::String(s) => s.as_str(),
        serde_json::Value::Array(items) => items.last()?.as_str()?,
        _ => return None,
    };

    Version::parse(raw).ok()
}

/// Read the resolved version from the fetched package's package.json
fn installed_version(package_path: &Path) -> std::result::Result<Version, String> {
    let path = package_path.join("package.json");
    let content = fs::read_to_string(&path).map_err(|e| e.to_string())?;
    let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| e.to_string())?;

    let raw = value
        .get("version")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "package.json has no version field".to_string())?;

    Version::parse(raw).map_err(|e| e.to_string())
}
