//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Meanie - project scaffolding and module manager
#[derive(Parser, Debug)]
#[command(
    name = "meanie",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Project scaffolding and module manager for Meanie projects",
    long_about = "Meanie creates new project skeletons, installs and updates published \
                  modules into them, and seeds new module templates. Installed modules \
                  are tracked in the project's meaniefile.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  meanie create my-project\n    \
                  meanie install users mail\n    \
                  meanie update\n    \
                  meanie seed my-module\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/meanie/meanie"
)]
pub struct Cli {
    /// Project directory (defaults to discovery from the current directory)
    #[arg(long, short = 'p', global = true)]
    pub project: Option<PathBuf>,

    /// Bypass safety checks (non-empty directories, version compatibility,
    /// core module protection)
    #[arg(long, short = 'f', global = true)]
    pub force: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new Meanie project
    Create(CreateArgs),

    /// Install modules into the project
    Install(InstallArgs),

    /// Update installed modules
    Update(UpdateArgs),

    /// Seed a new module template
    Seed(SeedArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create a project in a new directory:\n    meanie create my-project\n\n\
                  Create a project in the current directory:\n    meanie create\n\n\
                  Create over a non-empty directory:\n    meanie create my-project --force")]
pub struct CreateArgs {
    /// Target directory (defaults to the current directory)
    pub directory: Option<PathBuf>,
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install a module:\n    meanie install users\n\n\
                  Install several modules in order:\n    meanie install users mail cron\n\n\
                  Reinstall an installed module:\n    meanie install users --force")]
pub struct InstallArgs {
    /// Modules to install, in order
    #[arg(required = true)]
    pub modules: Vec<String>,
}

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update all installed modules:\n    meanie update\n\n\
                  Update specific modules:\n    meanie update users mail\n\n\
                  Update a core module:\n    meanie update core --force")]
pub struct UpdateArgs {
    /// Modules to update (defaults to all installed modules)
    pub modules: Vec<String>,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Seed a module template in the current directory:\n    meanie seed my-module\n\n\
                  Seed into a non-empty directory:\n    meanie seed my-module --force")]
pub struct SeedArgs {
    /// Module name to seed (`-seed` is appended when missing)
    pub name: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    meanie completions --shell bash > ~/.bash_completion.d/meanie\n\n\
                  Generate zsh completions:\n    meanie completions --shell zsh > ~/.zfunc/_meanie\n\n\
                  Generate fish completions:\n    meanie completions --shell fish > ~/.config/fish/completions/meanie.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
