//! Git operations for seeding module templates
//!
//! Seeding clones a published seed repository into a directory. Clones are
//! shallow (depth 1): the history is irrelevant, only the tree is copied.
//! Authentication is delegated to git's native credential system.

use std::path::Path;

use git2::{Cred, CredentialType, FetchOptions, RemoteCallbacks, build::RepoBuilder};

use crate::error::{MeanieError, Result};

/// Shallow-clone a remote repository into the given directory
pub fn clone_shallow(url: &str, destination: &Path) -> Result<()> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, allowed_types| {
        if allowed_types.contains(CredentialType::SSH_KEY) {
            let username = username_from_url.unwrap_or("git");
            return Cred::ssh_key_from_agent(username);
        }
        Cred::default()
    });

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);
    // The local transport does not implement shallow fetches
    if !url.starts_with("file://") {
        fetch_options.depth(1);
    }

    RepoBuilder::new()
        .fetch_options(fetch_options)
        .clone(url, destination)
        .map_err(|e| MeanieError::CloneFailed {
            url: url.to_string(),
            reason: interpret_git_error(&e),
        })?;

    Ok(())
}

/// Interpret a git2 error and provide a more user-friendly message
fn interpret_git_error(err: &git2::Error) -> String {
    let message = err.message().to_lowercase();

    if message.contains("not found") || message.contains("404") {
        "Repository not found".to_string()
    } else if message.contains("authentication") || message.contains("credentials") {
        "Authentication failed".to_string()
    } else if message.contains("connection")
        || message.contains("network")
        || message.contains("timeout")
        || message.contains("timed out")
    {
        "Network error".to_string()
    } else {
        err.message().to_string()
    }
}
