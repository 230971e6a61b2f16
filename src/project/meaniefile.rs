//! Meaniefile read/write operations
//!
//! The meaniefile records which modules (and versions) are installed in a
//! project. Every mutation is a full read-modify-write cycle so the on-disk
//! file is authoritative between calls; nothing is cached in memory.

use std::collections::BTreeMap;
use std::fs;

use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use super::Project;
use crate::error::{MeanieError, Result};

/// Persisted project config ("meaniefile")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaniefile {
    /// Project name
    pub name: String,

    /// CLI version the project was created with
    pub cli_version: String,

    /// Installed modules: short name -> installed version
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

impl Meaniefile {
    /// Fresh config for a new project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cli_version: env!("CARGO_PKG_VERSION").to_string(),
            modules: BTreeMap::new(),
        }
    }
}

impl Project {
    /// Create a new meaniefile for this project
    pub fn create_config(&self, name: &str) -> Result<()> {
        self.write_config(&Meaniefile::new(name))
    }

    /// Read and parse the meaniefile
    pub fn read_config(&self) -> Result<Meaniefile> {
        let path = self.config_path();

        let content = fs::read_to_string(&path).map_err(|e| MeanieError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| MeanieError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Serialize the config back to disk
    pub fn write_config(&self, config: &Meaniefile) -> Result<()> {
        let path = self.config_path();

        let mut content =
            serde_json::to_string_pretty(config).map_err(|e| MeanieError::ConfigWrite {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        content.push('\n');

        fs::write(&path, content).map_err(|e| MeanieError::ConfigWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Stored version for a module, if installed
    ///
    /// When a range is given, the stored version is only returned if it
    /// parses and satisfies the range. A config without the module is not
    /// an error.
    pub fn has_module(&self, name: &str, range: Option<&VersionReq>) -> Result<Option<Version>> {
        let config = self.read_config()?;

        let Some(stored) = config.modules.get(name) else {
            return Ok(None);
        };

        let Ok(version) = Version::parse(stored) else {
            return Ok(None);
        };

        match range {
            Some(req) if !req.matches(&version) => Ok(None),
            _ => Ok(Some(version)),
        }
    }

    /// Idempotent upsert of a module entry; written to disk immediately
    pub fn add_module(&self, name: &str, version: &Version) -> Result<()> {
        let mut config = self.read_config()?;
        config.modules.insert(name.to_string(), version.to_string());
        self.write_config(&config)
    }

    /// Remove a module entry if present; written to disk immediately
    pub fn remove_module(&self, name: &str) -> Result<()> {
        let mut config = self.read_config()?;
        if config.modules.remove(name).is_none() {
            return Ok(());
        }
        self.write_config(&config)
    }
}
