//! Version command implementation

use std::path::PathBuf;

use console::Style;

use crate::error::Result;
use crate::project::Project;

/// Run version command
pub fn run(project: Option<PathBuf>) -> Result<()> {
    println!(
        "{} CLI version {}",
        Style::new().magenta().apply_to("Meanie"),
        Style::new().magenta().apply_to(env!("CARGO_PKG_VERSION"))
    );

    // Inside a project, also report the version it was created with
    if let Ok(start_dir) = super::resolve_start_dir(project) {
        if let Ok(project) = Project::discover(&start_dir) {
            if let Ok(config) = project.read_config() {
                println!(
                    "{} project {} created with CLI version {}",
                    Style::new().magenta().apply_to("Meanie"),
                    Style::new().magenta().apply_to(&config.name),
                    Style::new().magenta().apply_to(&config.cli_version)
                );
            }
        }
    }

    Ok(())
}
