//! Invoking an init script through the JavaScript runtime.

use serde::Serialize;
use std::path::PathBuf;

use crate::error::{CreateError, Result};
use crate::exec::{CommandRunner, CommandSpec, OutputMode};
use crate::loader::{DRIVER, EXIT_NO_INIT_EXPORT, InitScript};

/// Context handed to the template's init function.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InitContext {
    pub package_manager: String,
    pub root_directory: PathBuf,
}

/// Executes a located init script.
pub trait ScriptHost {
    fn invoke(&self, script: &InitScript, context: &InitContext) -> Result<()>;
}

/// Default binary used to execute init scripts.
pub const DEFAULT_RUNTIME: &str = "node";

/// Environment variable carrying the entry module path to the driver.
pub const ENV_INIT_ENTRY: &str = "SPACEY_INIT_ENTRY";

/// Environment variable carrying the serialized [`InitContext`].
pub const ENV_INIT_CONTEXT: &str = "SPACEY_INIT_CONTEXT";

/// Runs init scripts through a node-compatible runtime as a child process.
///
/// The entry path and context travel via the environment; the script's own
/// stdout/stderr are inherited so templates can print instructions.
pub struct RuntimeHost<'a> {
    runtime: PathBuf,
    exec: &'a dyn CommandRunner,
}

impl<'a> RuntimeHost<'a> {
    pub fn new(runtime: impl Into<PathBuf>, exec: &'a dyn CommandRunner) -> Self {
        RuntimeHost {
            runtime: runtime.into(),
            exec,
        }
    }

    fn spec(&self, script: &InitScript, context: &InitContext) -> Result<CommandSpec> {
        let entry = std::path::absolute(&script.entry)?;
        let spec = CommandSpec::new(self.runtime.display().to_string())
            .arg("--input-type=module")
            .arg("-e")
            .arg(DRIVER)
            .cwd(&context.root_directory)
            .env(ENV_INIT_ENTRY, entry.display().to_string())
            .env(ENV_INIT_CONTEXT, serde_json::to_string(context)?)
            .output(OutputMode::Inherit);
        Ok(spec)
    }
}

impl ScriptHost for RuntimeHost<'_> {
    fn invoke(&self, script: &InitScript, context: &InitContext) -> Result<()> {
        match self.exec.run(&self.spec(script, context)?)? {
            0 => Ok(()),
            EXIT_NO_INIT_EXPORT => Err(CreateError::MissingInitExport),
            code => Err(CreateError::Other(format!(
                "init script exited with status {code}"
            ))),
        }
    }
}
