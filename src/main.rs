//! spacey-create (screate) - template scaffolding for spacey projects
//!
//! This is the main entry point for the screate binary.

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spacey_create::cli::{Cli, Commands};
use spacey_create::commands;
use spacey_create::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Print banner for verbose mode
    if cli.verbose {
        print_banner();
    }

    // Execute the command
    match &cli.command {
        Some(Commands::Init(args)) => commands::init::run(args, &cli).await,
        None => {
            println!("{}", "Usage: screate <command> [options]".yellow());
            println!();
            println!("Run {} for more information", "screate --help".cyan());
            Ok(())
        }
    }
}

fn print_banner() {
    println!(
        r#"
{}
 ___  ___ _ __ ___  __ _| |_ ___
/ __|/ __| '__/ _ \/ _` | __/ _ \
\__ \ (__| | |  __/ (_| | ||  __/
|___/\___|_|  \___|\__,_|\__\___|

{} {} - Template scaffolding for spacey projects
"#,
        "".bright_cyan(),
        "spacey-create".bright_cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
