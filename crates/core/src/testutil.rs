//! Test utilities for ferropy-core
//!
//! Helpers for describing throwaway interpreter installations in tests. They
//! only build metadata records and plain files; nothing here touches the
//! resolvers themselves.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::interpreter::{InterpreterInfo, VersionInfo};

/// Interpreter record for an embeddable-style Windows installation
///
/// Mirrors the layout of an embeddable distribution: launcher at the prefix
/// root, stdlib under `Lib`, and the bundled archive advertised on the
/// search path ahead of it.
pub fn embed_interpreter(prefix: &Path, exe_name: &str, version: VersionInfo) -> InterpreterInfo {
    InterpreterInfo {
        implementation: "IronPython".to_string(),
        version,
        system_executable: prefix.join(exe_name),
        system_stdlib: prefix.join("Lib"),
        system_prefix: prefix.to_path_buf(),
        path: vec![
            prefix.join(format!("python{}.zip", version.nodot())),
            prefix.join("Lib"),
            prefix.join("DLLs"),
        ],
    }
}

/// Interpreter record for a POSIX installation rooted at `prefix`
pub fn posix_interpreter(prefix: &Path, exe_name: &str, version: VersionInfo) -> InterpreterInfo {
    InterpreterInfo {
        implementation: "IronPython".to_string(),
        version,
        system_executable: prefix.join("bin").join(exe_name),
        system_stdlib: prefix.join("lib").join(stdlib_dir(version)),
        system_prefix: prefix.to_path_buf(),
        path: vec![prefix.join("lib").join(stdlib_dir(version))],
    }
}

fn stdlib_dir(version: VersionInfo) -> String {
    format!("ironpython{}.{}", version.major, version.minor)
}

/// Create an empty file at `root/rel`, creating parent directories
///
/// `rel` uses `/` separators regardless of platform.
pub fn touch(root: &Path, rel: &str) -> io::Result<PathBuf> {
    let path = rel.split('/').fold(root.to_path_buf(), |p, seg| p.join(seg));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, b"")?;
    Ok(path)
}
