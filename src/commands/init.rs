//! Init command implementation.

use std::path::PathBuf;

use crate::cli::{Cli, InitArgs};
use crate::config::Config;
use crate::error::Result;
use crate::exec::ProcessRunner;
use crate::host::{DEFAULT_RUNTIME, RuntimeHost};
use crate::init::{InitFlags, InitRunner};
use crate::pm::PackageManager;
use crate::reporter::ConsoleReporter;

/// Run the init command.
pub async fn run(args: &InitArgs, cli: &Cli) -> Result<()> {
    let config = Config::load()?;

    let project_dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    // CLI/env override wins over config, then user-agent detection.
    let package_manager = cli
        .package_manager
        .as_deref()
        .or(config.package_manager.as_deref())
        .and_then(|name| name.parse::<PackageManager>().ok())
        .unwrap_or_else(PackageManager::detect);

    let runtime = config
        .runtime
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RUNTIME));

    let flags = InitFlags {
        delete_script: !args.no_delete,
        show_install_output: args.install_output || cli.verbose,
    };

    let exec = ProcessRunner;
    let host = RuntimeHost::new(runtime, &exec);
    let reporter = ConsoleReporter;

    InitRunner::new(&exec, &host, &reporter, package_manager).run(&project_dir, &flags)
}
