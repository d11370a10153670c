//! IronPython 3 on Windows: shim detection and auxiliary runtime files

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::interpreter::InterpreterInfo;
use crate::refs::{RefMust, RefWhen, ReferenceSource};

use super::windows::IronPythonWindows;
use super::{IRONPYTHON, SourceResolver};

/// File extensions treated as native runtime libraries
const NATIVE_SUFFIXES: [&str; 2] = ["dll", "pyd"];

/// IronPython 3 on Windows
///
/// Installations from 3.4 onwards ship a venv launcher shim inside the
/// standard library. The shim locates the rest of the runtime on its own, so
/// when it is present only executables are referenced; otherwise the native
/// `.dll`/`.pyd` libraries and the bundled stdlib archive are resolved
/// alongside them.
#[derive(Debug, Default)]
pub struct IronPython3Windows;

impl IronPython3Windows {
    /// Probe for the venv launcher shim shipped with the standard library
    pub fn shim(interpreter: &InterpreterInfo) -> Option<PathBuf> {
        let shim = interpreter
            .system_stdlib
            .join("venv")
            .join("scripts")
            .join("nt")
            .join("ipy3.exe");
        if shim.exists() { Some(shim) } else { None }
    }

    /// Whether this installation provides a usable launcher shim
    ///
    /// A read-only existence probe; older minor versions never shipped the
    /// shim and are not probed at all.
    pub fn has_shim(interpreter: &InterpreterInfo) -> bool {
        interpreter.version.minor >= IRONPYTHON.shim_minor && Self::shim(interpreter).is_some()
    }

    /// Canonical host launcher: the shim when present, the system executable
    /// otherwise
    fn host_executable(interpreter: &InterpreterInfo) -> PathBuf {
        if interpreter.version.minor >= IRONPYTHON.shim_minor {
            if let Some(shim) = Self::shim(interpreter) {
                return shim;
            }
        }
        interpreter.system_executable.clone()
    }

    /// Native `.dll`/`.pyd` files next to the launcher and under `DLLs`
    fn native_libraries(interpreter: &InterpreterInfo) -> Vec<ReferenceSource> {
        let mut folders: Vec<PathBuf> = Vec::new();
        if let Some(parent) = interpreter.system_executable.parent() {
            folders.push(parent.to_path_buf());
        }

        // May be missing on some hosts; skipped silently
        let dll_folder = interpreter.system_prefix.join("DLLs");
        if dll_folder.is_dir() {
            folders.push(dll_folder);
        }

        let mut refs = Vec::new();
        for folder in folders {
            let entries = match fs::read_dir(&folder) {
                Ok(entries) => entries,
                Err(_) => continue,
            };

            let mut files: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| is_native_library(path))
                .collect();
            files.sort();
            debug!(folder = %folder.display(), count = files.len(), "scanned native libraries");

            for file in files {
                let name = match file.file_name() {
                    Some(name) => name.to_string_lossy().into_owned(),
                    None => continue,
                };
                refs.push(ReferenceSource::new(
                    file,
                    name,
                    RefMust::NotApplicable,
                    RefWhen::Always,
                ));
            }
        }
        refs
    }

    /// Bundled stdlib archive advertised on the interpreter search path
    ///
    /// The archive must both appear on the search path and exist on disk: a
    /// stale search-path entry and an unadvertised on-disk archive are both
    /// skipped. The first entry satisfying both wins.
    fn stdlib_archive(interpreter: &InterpreterInfo) -> Option<ReferenceSource> {
        let archive_name = format!("python{}.zip", interpreter.version.nodot());
        let archive = interpreter
            .path
            .iter()
            .filter(|entry| entry.file_name() == Some(OsStr::new(&archive_name)))
            .find(|entry| entry.exists())?;

        debug!(archive = %archive.display(), "resolved bundled stdlib archive");
        Some(ReferenceSource::new(
            archive.clone(),
            archive_name,
            RefMust::NotApplicable,
            RefWhen::Always,
        ))
    }
}

impl SourceResolver for IronPython3Windows {
    fn sources(&self, interpreter: &InterpreterInfo) -> Vec<ReferenceSource> {
        let host = Self::host_executable(interpreter);
        let mut refs = IronPythonWindows::executables(&host);

        if Self::has_shim(interpreter) {
            // The shim resolves the runtime itself; copying libraries or the
            // archive next to it would only go stale
            debug!(shim = %host.display(), "venv shim present, skipping runtime files");
        } else {
            refs.extend(Self::native_libraries(interpreter));
            refs.extend(Self::stdlib_archive(interpreter));
        }
        refs
    }
}

fn is_native_library(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|extension| NATIVE_SUFFIXES.contains(&extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::VersionInfo;
    use crate::testutil::{embed_interpreter, touch};
    use tempfile::TempDir;

    fn interpreter_in(dir: &TempDir) -> InterpreterInfo {
        embed_interpreter(dir.path(), "ipy.exe", VersionInfo::new(3, 4, 1))
    }

    #[test]
    fn test_shim_requires_minimum_minor_version() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Lib/venv/scripts/nt/ipy3.exe").unwrap();

        let mut info = interpreter_in(&dir);
        assert!(IronPython3Windows::has_shim(&info));

        info.version = VersionInfo::new(3, 3, 0);
        assert!(!IronPython3Windows::has_shim(&info));
    }

    #[test]
    fn test_missing_shim_file_means_no_shim() {
        let dir = TempDir::new().unwrap();
        let info = interpreter_in(&dir);
        assert!(!IronPython3Windows::has_shim(&info));
    }

    #[test]
    fn test_native_libraries_are_sorted_per_folder() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "zlib.dll").unwrap();
        touch(dir.path(), "_bz2.pyd").unwrap();
        touch(dir.path(), "README.txt").unwrap();

        let info = interpreter_in(&dir);
        let libraries = IronPython3Windows::native_libraries(&info);

        let names: Vec<&str> = libraries
            .iter()
            .map(|reference| reference.names[0].as_str())
            .collect();
        assert_eq!(names, vec!["_bz2.pyd", "zlib.dll"]);
    }

    #[test]
    fn test_dlls_folder_is_scanned_when_present() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "DLLs/_sqlite3.pyd").unwrap();

        let info = interpreter_in(&dir);
        let libraries = IronPython3Windows::native_libraries(&info);
        assert_eq!(libraries.len(), 1);
        assert_eq!(libraries[0].names, vec!["_sqlite3.pyd"]);
    }

    #[test]
    fn test_missing_dlls_folder_is_skipped() {
        let dir = TempDir::new().unwrap();
        let info = interpreter_in(&dir);
        assert!(IronPython3Windows::native_libraries(&info).is_empty());
    }

    #[test]
    fn test_stdlib_archive_requires_listing_and_file() {
        let dir = TempDir::new().unwrap();
        let info = interpreter_in(&dir);

        // Advertised on the search path but absent from disk
        assert!(IronPython3Windows::stdlib_archive(&info).is_none());

        // Present on disk as well
        touch(dir.path(), "python34.zip").unwrap();
        let archive = IronPython3Windows::stdlib_archive(&info).unwrap();
        assert_eq!(archive.names, vec!["python34.zip"]);
    }

    #[test]
    fn test_stdlib_archive_ignores_other_versions() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "python27.zip").unwrap();

        let info = interpreter_in(&dir);
        assert!(IronPython3Windows::stdlib_archive(&info).is_none());
    }
}
