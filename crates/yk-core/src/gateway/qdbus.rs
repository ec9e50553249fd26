//! Gateway implementation backed by the `qdbus` command-line tool

use std::process::Command;

use super::methods::{self, DBUS_SERVICE};
use super::Gateway;
use crate::error::GatewayError;

/// Issues each call as one `qdbus org.kde.yakuake ...` process
#[derive(Debug, Clone)]
pub struct QdbusGateway {
    program: String,
    service: String,
}

impl QdbusGateway {
    /// Gateway using a custom `qdbus` executable (e.g. `qdbus6`)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            service: DBUS_SERVICE.to_string(),
        }
    }

    /// Get the executable name
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Gateway for QdbusGateway {
    fn call(&self, path: &str, method: &str, args: &[&str]) -> Result<String, GatewayError> {
        tracing::debug!("{} {} {} {} {:?}", self.program, self.service, path, method, args);

        let output = Command::new(&self.program)
            .arg(&self.service)
            .arg(path)
            .arg(method)
            .args(args)
            .output()
            .map_err(|source| GatewayError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GatewayError::Failed {
                method: methods::short_name(method).to_string(),
                status: output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let reply = String::from_utf8_lossy(&output.stdout)
            .trim_matches(|c| c == '\n' || c == '\r')
            .to_string();
        tracing::trace!("{} -> '{}'", methods::short_name(method), reply);
        Ok(reply)
    }
}
