//! Command implementations
//!
//! Each command is a thin wrapper: resolve the project, hand the work to
//! the appropriate component, and translate the result into user-facing
//! diagnostics and an exit status.

pub mod completions;
pub mod create;
pub mod install;
pub mod seed;
pub mod update;
pub mod version;

use std::path::PathBuf;

use crate::error::{MeanieError, Result};

/// Resolve the starting directory from the CLI override or the cwd
fn resolve_start_dir(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| MeanieError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}
