//! Startup requirement checks
//!
//! yakctl needs `qdbus` to talk to Yakuake and Yakuake itself installed.

use crate::error::RequirementError;
use crate::gateway::{methods, Gateway, QdbusGateway};

/// The terminal emulator itself must be installed
pub const YAKUAKE_PROGRAM: &str = "yakuake";

/// Verify all `programs` are installed
pub fn check_programs(programs: &[&str]) -> Result<(), RequirementError> {
    for &program in programs {
        let path = which::which(program)
            .map_err(|_| RequirementError::DependencyMissing(program.to_string()))?;
        tracing::debug!("Found required program '{}' at {}", program, path.display());
    }
    Ok(())
}

/// Verify the environment and ping the running Yakuake instance.
///
/// The ping is best-effort: a Yakuake that is installed but not yet
/// running only produces a warning.
pub fn check_requirements(gateway: &QdbusGateway) -> Result<(), RequirementError> {
    check_programs(&[gateway.program(), YAKUAKE_PROGRAM])?;
    if gateway
        .call_void(methods::PATH_SESSIONS, methods::PING, &[])
        .is_some()
    {
        tracing::warn!("Yakuake did not answer the ping, is it running?");
    }
    Ok(())
}
