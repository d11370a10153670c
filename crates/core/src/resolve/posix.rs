//! Executable naming for IronPython on POSIX platforms

use tracing::debug;

use crate::interpreter::InterpreterInfo;
use crate::refs::{RefMust, RefWhen, ReferenceSource};

use super::{IRONPYTHON, SourceResolver};

/// IronPython on POSIX platforms: one launcher file under several names
///
/// The host launcher is referenced once, with every name the environment
/// must answer to: the bare stem, versioned stems, and whatever the host
/// executable itself is called.
#[derive(Debug, Default)]
pub struct IronPythonPosix;

impl IronPythonPosix {
    /// Destination names for the host launcher, in order
    fn launcher_names(interpreter: &InterpreterInfo) -> [String; 4] {
        let version = interpreter.version;
        [
            IRONPYTHON.exe_stem.to_string(),
            format!("{}{}", IRONPYTHON.exe_stem, version.major),
            format!("{}{}.{}", IRONPYTHON.exe_stem, version.major, version.minor),
            interpreter.executable_name(),
        ]
    }
}

impl SourceResolver for IronPythonPosix {
    fn sources(&self, interpreter: &InterpreterInfo) -> Vec<ReferenceSource> {
        // The 2.x runtime does not start reliably through a symlinked
        // launcher, so legacy interpreters are always copied
        let must = if interpreter.version.major == 2 {
            RefMust::MustCopy
        } else {
            RefMust::NotApplicable
        };

        let launcher = ReferenceSource::with_names(
            interpreter.system_executable.clone(),
            Self::launcher_names(interpreter),
            must,
            RefWhen::Always,
        );
        debug!(
            launcher = %launcher.source.display(),
            names = ?launcher.names,
            "resolved posix launcher"
        );
        vec![launcher]
    }
}
