//! CLI argument parsing for screate.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// spacey-create (screate) - template scaffolding for spacey projects
#[derive(Parser, Debug)]
#[command(name = "screate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Package manager used to install init script dependencies
    #[arg(long, global = true, env = "SCREATE_PACKAGE_MANAGER")]
    pub package_manager: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the template's spacey.init script in an existing project
    Init(InitArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct InitArgs {
    /// Project directory (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Keep the spacey.init directory after a successful run
    #[arg(long = "no-delete")]
    pub no_delete: bool,

    /// Show output from the init script's dependency install
    #[arg(long)]
    pub install_output: bool,
}
