//! Package manager selection for init script dependencies.
//!
//! The init runner only needs a name to spawn `<pm> install` with; full
//! workspace/package-manager detection lives elsewhere in the toolchain.

use std::fmt;
use std::str::FromStr;

/// npm-compatible package managers the init runner knows how to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Executable name for spawning.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Arguments for installing a directory's dependencies.
    pub fn install_args(&self) -> &'static [&'static str] {
        &["install"]
    }

    /// Detect the package manager that spawned us, falling back to npm.
    ///
    /// npm-compatible managers set `npm_config_user_agent` (e.g.
    /// `yarn/1.22.19 npm/? node/v18.16.0 darwin x64`) on child processes.
    pub fn detect() -> Self {
        Self::from_user_agent(std::env::var("npm_config_user_agent").ok().as_deref())
    }

    /// Parse a `npm_config_user_agent` value.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        let Some(ua) = user_agent else {
            return PackageManager::Npm;
        };
        ua.split('/')
            .next()
            .and_then(|name| name.parse().ok())
            .unwrap_or(PackageManager::Npm)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for PackageManager {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            "bun" => Ok(PackageManager::Bun),
            _ => Err(()),
        }
    }
}
