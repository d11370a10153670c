//! Dispatch of interpreter installations to their source resolver

use tracing::debug;

use ferropy_platform::Os;

use crate::error::CoreError;
use crate::interpreter::InterpreterInfo;
use crate::resolve::{IronPython3Windows, IronPythonPosix, IronPythonWindows, SourceResolver};

/// Runtime variants with registered resolvers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    IronPython,
}

impl Variant {
    /// Variant answering to a discovery implementation tag
    pub fn from_implementation(tag: &str) -> Option<Self> {
        match tag {
            "IronPython" => Some(Variant::IronPython),
            _ => None,
        }
    }
}

static IRONPYTHON_POSIX: IronPythonPosix = IronPythonPosix;
static IRONPYTHON_WINDOWS: IronPythonWindows = IronPythonWindows;
static IRONPYTHON3_WINDOWS: IronPython3Windows = IronPython3Windows;

/// Resolver registered for a (variant, platform) pair
fn lookup(variant: Variant, os: Os, major: u32) -> &'static dyn SourceResolver {
    match (variant, os) {
        (Variant::IronPython, Os::Windows) if major >= 3 => &IRONPYTHON3_WINDOWS,
        (Variant::IronPython, Os::Windows) => &IRONPYTHON_WINDOWS,
        (Variant::IronPython, Os::Linux | Os::Darwin) => &IRONPYTHON_POSIX,
    }
}

/// Select the resolver for an interpreter on the given platform
///
/// Refuses interpreters no resolver is registered for, and store-distributed
/// installs on Windows: their launchers cannot be referenced from outside
/// the store sandbox.
pub fn resolver_for(
    interpreter: &InterpreterInfo,
    os: Os,
) -> Result<&'static dyn SourceResolver, CoreError> {
    let variant = Variant::from_implementation(&interpreter.implementation).ok_or_else(|| {
        CoreError::UnsupportedInterpreter {
            implementation: interpreter.implementation.clone(),
            version: interpreter.version.to_string(),
        }
    })?;

    if os == Os::Windows && interpreter.version.major >= 3 && interpreter.is_store_install() {
        return Err(CoreError::StoreDistributed(
            interpreter.system_executable.clone(),
        ));
    }

    debug!(%os, implementation = %interpreter.implementation, version = %interpreter.version, "selected resolver");
    Ok(lookup(variant, os, interpreter.version.major))
}
