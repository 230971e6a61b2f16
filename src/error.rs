//! Error types and handling for Meanie
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Meanie operations
#[derive(Error, Diagnostic, Debug)]
pub enum MeanieError {
    // Project errors
    #[error("No Meanie project detected in the current or parent directories")]
    #[diagnostic(
        code(meanie::project::not_found),
        help("To create a new project in the current directory, run `meanie create` first")
    )]
    NoProject,

    #[error("Destination directory is not empty: {path}")]
    #[diagnostic(
        code(meanie::project::dir_not_empty),
        help("Use --force to proceed anyway")
    )]
    DirectoryNotEmpty { path: String },

    #[error("Failed to create project: {reason}")]
    #[diagnostic(code(meanie::project::create_failed))]
    ProjectCreateFailed { reason: String },

    // Module identifier errors
    #[error("Invalid module name: {name}")]
    #[diagnostic(
        code(meanie::module::invalid_name),
        help("Module names are simple identifiers such as `core` or `meanie-core`")
    )]
    InvalidModuleName { name: String },

    #[error("Module '{name}' is not installed")]
    #[diagnostic(code(meanie::module::not_installed))]
    ModuleNotInstalled { name: String },

    #[error("There are no Meanie modules installed")]
    #[diagnostic(code(meanie::module::none_installed))]
    NoModulesInstalled,

    // Package manager errors
    #[error("Package manager operation failed for '{package}': {reason}")]
    #[diagnostic(
        code(meanie::pm::operation_failed),
        help("Check that the package name is correct and npm can reach the registry")
    )]
    PackageManager { package: String, reason: String },

    // Manifest errors
    #[error("Module manifest not found: {path}")]
    #[diagnostic(
        code(meanie::manifest::missing),
        help("Every Meanie module ships a meanie.json next to its package.json")
    )]
    ManifestMissing { path: String },

    #[error("Failed to parse module manifest: {path}")]
    #[diagnostic(code(meanie::manifest::invalid))]
    ManifestInvalid { path: String, reason: String },

    #[error("Module '{module}' requires CLI version {required}, but this is {current}")]
    #[diagnostic(
        code(meanie::manifest::incompatible_cli),
        help("Upgrade the Meanie CLI, or use --force to install anyway")
    )]
    IncompatibleToolVersion {
        module: String,
        required: String,
        current: String,
    },

    // Dependency errors
    #[error("Failed to install dependency '{dependency}' of module '{module}'")]
    #[diagnostic(code(meanie::deps::install_failed))]
    DependencyInstall { module: String, dependency: String },

    // File deployment errors
    #[error("Failed to copy '{src_path}' to '{destination}': {reason}")]
    #[diagnostic(code(meanie::fs::copy_failed))]
    FileCopy {
        src_path: String,
        destination: String,
        reason: String,
    },

    // Config (meaniefile) errors
    #[error("Failed to read meaniefile: {path}")]
    #[diagnostic(
        code(meanie::config::read_failed),
        help("The meaniefile may be missing or corrupt")
    )]
    ConfigRead { path: String, reason: String },

    #[error("Failed to write meaniefile: {path}")]
    #[diagnostic(code(meanie::config::write_failed))]
    ConfigWrite { path: String, reason: String },

    // Git errors (seed)
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(meanie::git::clone_failed),
        help("Check that the seed name is correct and you have network access")
    )]
    CloneFailed { url: String, reason: String },

    // Batch outcome
    #[error("{failed} module(s) failed to {operation}")]
    #[diagnostic(code(meanie::batch::failed))]
    BatchFailed { failed: usize, operation: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(meanie::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for MeanieError {
    fn from(err: std::io::Error) -> Self {
        MeanieError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MeanieError {
    fn from(err: serde_json::Error) -> Self {
        MeanieError::ConfigRead {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<git2::Error> for MeanieError {
    fn from(err: git2::Error) -> Self {
        MeanieError::CloneFailed {
            url: "unknown".to_string(),
            reason: err.message().to_string(),
        }
    }
}

impl From<semver::Error> for MeanieError {
    fn from(err: semver::Error) -> Self {
        MeanieError::ConfigRead {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MeanieError>;
