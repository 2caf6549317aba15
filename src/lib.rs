//! spacey-create - template scaffolding for spacey projects.
//!
//! After a template has been downloaded into a fresh project directory, the
//! template may ship a one-shot `spacey.init` script to customize the new
//! project (rename files, install extra packages, print instructions). This
//! crate locates that script, installs its own dependencies if it has any,
//! invokes its exported init function, and deletes the script directory on
//! success.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod host;
pub mod init;
pub mod loader;
pub mod pm;
pub mod reporter;
