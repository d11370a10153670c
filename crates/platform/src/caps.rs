//! Launcher capabilities per platform family

use crate::platform::Os;

/// What a host OS supports when materializing launcher executables
///
/// Capabilities are fixed per platform family; resolvers and the downstream
/// copy/link executor consult them instead of probing the OS themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    os: Os,
    symlinks: bool,
    executable_suffix: &'static str,
}

impl Capabilities {
    /// Capabilities of the given operating system
    pub const fn for_os(os: Os) -> Self {
        match os {
            // Symlinked launcher executables do not behave reliably on
            // Windows, so the family is treated as copy-only
            Os::Windows => Self {
                os,
                symlinks: false,
                executable_suffix: ".exe",
            },
            Os::Linux | Os::Darwin => Self {
                os,
                symlinks: true,
                executable_suffix: "",
            },
        }
    }

    /// Capabilities of the platform this binary was compiled for
    pub const fn current() -> Self {
        Self::for_os(Os::current())
    }

    /// Operating system these capabilities describe
    pub const fn os(&self) -> Os {
        self.os
    }

    /// Whether launchers may be provided as symlinks
    pub const fn supports_symlink(&self) -> bool {
        self.symlinks
    }

    /// Suffix appended to executable file names (`.exe` on Windows)
    pub const fn executable_suffix(&self) -> &'static str {
        self.executable_suffix
    }

    /// Full executable file name for a launcher stem
    pub fn executable_name(&self, stem: &str) -> String {
        format!("{}{}", stem, self.executable_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_is_copy_only() {
        let caps = Capabilities::for_os(Os::Windows);
        assert!(!caps.supports_symlink());
        assert_eq!(caps.executable_name("ipy"), "ipy.exe");
    }

    #[test]
    fn test_posix_supports_symlinks() {
        for os in [Os::Linux, Os::Darwin] {
            let caps = Capabilities::for_os(os);
            assert!(caps.supports_symlink());
            assert_eq!(caps.executable_name("ipy"), "ipy");
        }
    }

    #[test]
    fn test_current_reports_build_target() {
        assert_eq!(Capabilities::current().os(), Os::current());
    }
}
