//! The template init runner.
//!
//! One-shot lifecycle of a template's spacey.init script: install the
//! script's own dependencies if it ships any, invoke its exported init
//! function with the project context, then delete the script directory.
//! The directory is only removed after a successful invocation so a failed
//! run can be retried.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{CreateError, Result};
use crate::exec::{CommandRunner, CommandSpec, OutputMode};
use crate::host::{InitContext, ScriptHost};
use crate::loader::{self, INIT_DIR, InitScript};
use crate::pm::PackageManager;
use crate::reporter::Reporter;

/// Caller-supplied knobs for the init step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitFlags {
    /// Delete the spacey.init directory after a successful run
    pub delete_script: bool,
    /// Stream output from the dependency install
    pub show_install_output: bool,
}

impl Default for InitFlags {
    fn default() -> Self {
        InitFlags {
            delete_script: true,
            show_install_output: false,
        }
    }
}

/// Fixed line reported when the script's own dependency install fails.
pub const INSTALL_FAILED_MESSAGE: &str =
    "Failed to install dependencies for template init script.";

/// Orchestrates the init step for one project directory.
pub struct InitRunner<'a> {
    exec: &'a dyn CommandRunner,
    host: &'a dyn ScriptHost,
    reporter: &'a dyn Reporter,
    package_manager: PackageManager,
}

impl<'a> InitRunner<'a> {
    pub fn new(
        exec: &'a dyn CommandRunner,
        host: &'a dyn ScriptHost,
        reporter: &'a dyn Reporter,
        package_manager: PackageManager,
    ) -> Self {
        InitRunner {
            exec,
            host,
            reporter,
            package_manager,
        }
    }

    /// Run the project's spacey.init script, if it has one.
    pub fn run(&self, project_dir: &Path, flags: &InitFlags) -> Result<()> {
        let Some(script) = loader::locate(project_dir) else {
            debug!("no {INIT_DIR} script in {}", project_dir.display());
            return Ok(());
        };

        if script.package_json().is_some() {
            self.install_script_deps(&script, flags)?;
        }

        debug!("running template's {INIT_DIR} script");

        let context = InitContext {
            package_manager: self.package_manager.to_string(),
            root_directory: project_dir.to_path_buf(),
        };

        if let Err(err) = self.host.invoke(&script, &context) {
            // The missing-export diagnostic stands on its own; everything
            // else gets the failure banner. The script stays on disk either
            // way so the user can fix it and retry.
            if matches!(err, CreateError::MissingInitExport) {
                return Err(err);
            }
            return Err(CreateError::init_failed(err.to_string()));
        }

        if flags.delete_script {
            fs::remove_dir_all(&script.dir)?;
        }

        debug!("template's {INIT_DIR} script complete");
        Ok(())
    }

    fn install_script_deps(&self, script: &InitScript, flags: &InitFlags) -> Result<()> {
        debug!(
            "installing {INIT_DIR} dependencies with {}",
            self.package_manager
        );

        let spec = CommandSpec::new(self.package_manager.command())
            .args(self.package_manager.install_args().iter().copied())
            .cwd(&script.dir)
            .output(if flags.show_install_output {
                OutputMode::Inherit
            } else {
                OutputMode::Ignore
            });

        match self.exec.run(&spec) {
            Ok(0) => Ok(()),
            Ok(code) => {
                self.reporter.error(INSTALL_FAILED_MESSAGE);
                Err(CreateError::InstallFailed { code })
            }
            Err(err) => {
                self.reporter.error(INSTALL_FAILED_MESSAGE);
                Err(err)
            }
        }
    }
}
