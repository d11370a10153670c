//! Interpreter metadata consumed from the discovery collaborator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::error::CoreError;

/// Interpreter version as reported by discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionInfo {
    /// Create a version from its components
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Major and minor digits without the separating dot
    ///
    /// This is the form used in bundled stdlib archive names such as
    /// `python34.zip`.
    pub fn nodot(&self) -> String {
        format!("{}{}", self.major, self.minor)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// One interpreter installation, as reported by the discovery collaborator
///
/// Constructed once per resolution request and immutable for its duration.
/// Resolvers treat it as an opaque record: every decision is a pure function
/// of these fields and of filesystem state observed at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterInfo {
    /// Implementation tag (e.g. `IronPython`)
    pub implementation: String,
    /// Interpreter version
    pub version: VersionInfo,
    /// Primary launcher binary of the installation
    pub system_executable: PathBuf,
    /// Root of the standard library
    pub system_stdlib: PathBuf,
    /// Installation prefix
    pub system_prefix: PathBuf,
    /// Module search path, in order
    pub path: Vec<PathBuf>,
}

impl InterpreterInfo {
    /// Parse a discovery record from its JSON hand-off format
    pub fn from_json(record: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(record)?)
    }

    /// Basename of the system executable
    pub fn executable_name(&self) -> String {
        self.system_executable
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Whether this installation is managed by the platform application store
    ///
    /// Store installs live under a `WindowsApps` path component; their
    /// executables are reparse points that cannot be referenced from outside
    /// the store sandbox.
    pub fn is_store_install(&self) -> bool {
        self.system_executable
            .components()
            .any(|component| component.as_os_str() == "WindowsApps")
    }
}
