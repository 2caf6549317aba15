//! Locating a template's spacey.init script.
//!
//! The script is a plain directory inside the freshly created project. Its
//! entry module is loaded and invoked by a [`crate::host::ScriptHost`]; this
//! module only answers "is there a script, and where".

use std::path::{Path, PathBuf};

/// Directory templates use for their one-shot init script.
pub const INIT_DIR: &str = "spacey.init";

/// Entry file the init script must provide.
pub const INIT_ENTRY: &str = "index.js";

/// A located init script inside a freshly created project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitScript {
    /// The spacey.init directory itself
    pub dir: PathBuf,
    /// The entry module inside it
    pub entry: PathBuf,
}

impl InitScript {
    /// Path to the script's own package.json, if it ships one.
    pub fn package_json(&self) -> Option<PathBuf> {
        let path = self.dir.join("package.json");
        path.is_file().then_some(path)
    }
}

/// Find `<project_dir>/spacey.init/index.js`. A missing entry means the
/// template has no init step and the caller should no-op.
pub fn locate(project_dir: &Path) -> Option<InitScript> {
    let dir = project_dir.join(INIT_DIR);
    let entry = dir.join(INIT_ENTRY);
    entry.is_file().then_some(InitScript { dir, entry })
}

/// Exit code the driver reserves for an entry module with no callable
/// export, so the parent can raise the instructional error instead of the
/// generic failure banner.
pub const EXIT_NO_INIT_EXPORT: i32 = 2;

/// Driver program handed to the runtime with `-e`.
///
/// Imports the entry as a module and resolves the init callable: the module
/// itself when the script does `module.exports = fn`, otherwise its default
/// export. The entry path and context JSON arrive via the environment
/// (see `crate::host::{ENV_INIT_ENTRY, ENV_INIT_CONTEXT}`).
pub const DRIVER: &str = r#"
import { pathToFileURL } from "node:url";
const entry = process.env.SPACEY_INIT_ENTRY;
const context = JSON.parse(process.env.SPACEY_INIT_CONTEXT);
const mod = await import(pathToFileURL(entry).href);
const init =
  typeof mod === "function" ? mod
  : typeof mod.default === "function" ? mod.default
  : undefined;
if (init === undefined) {
  process.exit(2);
}
await init(context);
"#;
