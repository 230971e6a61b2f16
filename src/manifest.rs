//! Module manifest (meanie.json) data structures
//!
//! Every published module ships a `meanie.json` next to its `package.json`
//! describing CLI compatibility, placement, and module dependencies.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{MeanieError, Result};

/// Manifest filename at the fetched package root
pub const MANIFEST_FILE: &str = "meanie.json";

/// Subfolder holding module sources for non-vendor packages
const SOURCE_DIR: &str = "src";

/// Vendor packages land under this path inside the project
const VENDOR_DIR: &str = "client/vendor";

/// Deployment strategy for a module's files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PackageType {
    /// Server and client sources, merged into the project root
    #[default]
    #[serde(rename = "full-stack")]
    FullStack,

    /// Client-only sources, merged into the project root
    #[serde(rename = "front-end")]
    FrontEnd,

    /// Third-party drop-in, placed under client/vendor/<package-name>
    #[serde(rename = "vendor")]
    Vendor,
}

/// Module manifest from meanie.json
///
/// Read-only after fetch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleManifest {
    /// Semver range the running CLI version must satisfy
    #[serde(default)]
    pub cli_version: Option<String>,

    /// Deployment strategy
    #[serde(default)]
    pub package_type: PackageType,

    /// Relative destination override inside the project
    #[serde(default)]
    pub destination: Option<String>,

    /// Dependent module package name -> required semver range
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    /// Usage note shown after install
    #[serde(default)]
    pub instructions: Option<String>,

    /// Free-text note shown after install
    #[serde(default)]
    pub post_install: Option<String>,
}

/// A manifest with its placement resolved against a package and project
#[derive(Debug, Clone)]
pub struct ResolvedManifest {
    /// Parsed manifest fields
    pub manifest: ModuleManifest,

    /// Directory to copy module files from
    pub source: PathBuf,

    /// Directory to copy module files into
    pub destination: PathBuf,
}

impl ModuleManifest {
    /// Load and parse the manifest co-located with a fetched package
    pub fn load(package_root: &Path) -> Result<Self> {
        let path = package_root.join(MANIFEST_FILE);

        if !path.is_file() {
            return Err(MeanieError::ManifestMissing {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| MeanieError::ManifestInvalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| MeanieError::ManifestInvalid {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        if !value.is_object() {
            return Err(MeanieError::ManifestInvalid {
                path: path.display().to_string(),
                reason: "manifest is not a JSON object".to_string(),
            });
        }

        serde_json::from_value(value).map_err(|e| MeanieError::ManifestInvalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load the manifest and resolve source/destination placement
    ///
    /// Source is the package's `src/` subfolder, or the package root for
    /// vendor packages. Destination is the project directory, joined with
    /// the manifest's override when present, or with the vendor subpath
    /// for vendor packages.
    pub fn resolve(
        package_root: &Path,
        package_name: &str,
        project_root: &Path,
    ) -> Result<ResolvedManifest> {
        let manifest = Self::load(package_root)?;

        let source = match manifest.package_type {
            PackageType::Vendor => package_root.to_path_buf(),
            PackageType::FullStack | PackageType::FrontEnd => package_root.join(SOURCE_DIR),
        };

        let destination = match (&manifest.destination, manifest.package_type) {
            (Some(rel), _) => project_root.join(rel),
            (None, PackageType::Vendor) => project_root.join(VENDOR_DIR).join(package_name),
            (None, _) => project_root.to_path_buf(),
        };

        Ok(ResolvedManifest {
            manifest,
            source,
            destination,
        })
    }
}
