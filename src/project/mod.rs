//! Project handling for Meanie
//!
//! A Meanie project is any directory holding a meaniefile. Discovery walks
//! upward from a starting directory so commands work from anywhere inside
//! the project tree.
//!
//! ## Project structure
//!
//! ```text
//! my-project/
//! ├── meaniefile.json   # Installed modules bookkeeping
//! ├── client/           # Front-end sources (modules merge in here)
//! └── server/           # Back-end sources
//! ```

mod meaniefile;

pub use meaniefile::Meaniefile;

use std::path::{Path, PathBuf};

use crate::error::{MeanieError, Result};

/// Project config filename
pub const CONFIG_FILE: &str = "meaniefile.json";

/// Represents a Meanie project
#[derive(Debug, Clone)]
pub struct Project {
    /// Root directory of the project (where the meaniefile is located)
    pub root: PathBuf,
}

impl Project {
    /// Detect if a project exists at the given path
    pub fn exists(root: &Path) -> bool {
        root.join(CONFIG_FILE).is_file()
    }

    /// Find a project by searching upward from the given path
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if Self::exists(&current) {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Open the project containing the given path
    pub fn discover(start: &Path) -> Result<Self> {
        let root = Self::find_from(start).ok_or(MeanieError::NoProject)?;
        Ok(Self { root })
    }

    /// Refer to a project at an exact root, whether or not it exists yet
    pub fn at(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Path to this project's meaniefile
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}
