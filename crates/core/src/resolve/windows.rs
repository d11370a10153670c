//! Executable naming for IronPython on Windows

use std::path::{Path, PathBuf};

use tracing::debug;

use ferropy_platform::{Capabilities, Os};

use crate::interpreter::InterpreterInfo;
use crate::refs::{RefMust, RefWhen, ReferenceSource};

use super::{IRONPYTHON, SourceResolver};

/// IronPython on Windows: every launcher is a hard copy
///
/// Symlinked launcher executables do not behave reliably on Windows, so the
/// copy requirement here is unconditional and independent of the legacy-2.x
/// rule that applies on POSIX.
#[derive(Debug, Default)]
pub struct IronPythonWindows;

impl IronPythonWindows {
    /// Executable descriptors for the given host launcher
    ///
    /// Yields the host under the variant short name, the host under its own
    /// basename when that differs (a non-default install such as
    /// `ipy555.exe`), and the sibling windowed launcher under its fixed name.
    pub(crate) fn executables(host: &Path) -> Vec<ReferenceSource> {
        let caps = Capabilities::for_os(Os::Windows);
        let mut names = vec![caps.executable_name(IRONPYTHON.exe_stem)];
        if let Some(basename) = host.file_name() {
            let basename = basename.to_string_lossy().into_owned();
            if !names.contains(&basename) {
                names.push(basename);
            }
        }

        let mut refs: Vec<ReferenceSource> = names
            .into_iter()
            .map(|name| {
                ReferenceSource::new(
                    host.to_path_buf(),
                    name,
                    RefMust::MustCopy,
                    RefWhen::Always,
                )
            })
            .collect();

        // The windowed (no-console) launcher sits beside the host executable
        let windowed_name = caps.executable_name(IRONPYTHON.windowed_stem);
        let windowed: PathBuf = host.with_file_name(&windowed_name);
        refs.push(ReferenceSource::new(
            windowed,
            windowed_name,
            RefMust::MustCopy,
            RefWhen::Always,
        ));

        debug!(host = %host.display(), count = refs.len(), "resolved windows launchers");
        refs
    }
}

impl SourceResolver for IronPythonWindows {
    fn sources(&self, interpreter: &InterpreterInfo) -> Vec<ReferenceSource> {
        Self::executables(&interpreter.system_executable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::VersionInfo;
    use crate::testutil::embed_interpreter;
    use std::path::Path;

    #[test]
    fn test_default_host_yields_two_copies() {
        let info = embed_interpreter(Path::new("/ipy3"), "ipy.exe", VersionInfo::new(3, 4, 1));
        let sources = IronPythonWindows.sources(&info);

        // Short name and host basename coincide, so only the launcher and
        // its windowed sibling remain
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].names, vec!["ipy.exe"]);
        assert_eq!(sources[1].names, vec!["ipyw.exe"]);
        assert!(sources.iter().all(|s| s.must == RefMust::MustCopy));
    }

    #[test]
    fn test_renamed_host_is_copied_under_both_names() {
        let info = embed_interpreter(Path::new("/ipy3"), "ipy555.exe", VersionInfo::new(3, 4, 1));
        let sources = IronPythonWindows.sources(&info);

        assert_eq!(sources.len(), 3);
        assert_eq!(sources[0].names, vec!["ipy.exe"]);
        assert_eq!(sources[1].names, vec!["ipy555.exe"]);
        assert_eq!(sources[0].source, sources[1].source);
        assert_eq!(sources[2].names, vec!["ipyw.exe"]);
    }

    #[test]
    fn test_windowed_launcher_is_a_sibling() {
        let info = embed_interpreter(Path::new("/ipy3"), "ipy.exe", VersionInfo::new(3, 4, 1));
        let sources = IronPythonWindows.sources(&info);

        let windowed = sources.last().unwrap();
        assert_eq!(windowed.source, Path::new("/ipy3/ipyw.exe"));
    }
}
