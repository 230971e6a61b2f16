//! Meanie - project scaffolding and module manager
//!
//! A command line tool for creating Meanie project skeletons, installing
//! and updating published modules into them, and seeding new module
//! templates. Installed modules are tracked in the project's meaniefile.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod git;
mod installer;
mod manifest;
mod module;
mod progress;
mod project;
mod registry;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Single package-manager client for the whole invocation, passed by
    // reference into whichever command needs it
    let registry = registry::NpmClient::new();

    let result = match cli.command {
        Commands::Create(args) => commands::create::run(cli.project, args, cli.force, &registry),
        Commands::Install(args) => commands::install::run(cli.project, args, cli.force, &registry),
        Commands::Update(args) => commands::update::run(cli.project, args, cli.force, &registry),
        Commands::Seed(args) => commands::seed::run(cli.project, args, cli.force),
        Commands::Version => commands::version::run(cli.project),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
