//! Remote command gateway
//!
//! Every interaction with Yakuake goes through a [`Gateway`]: a method name
//! plus string arguments turned into exactly one blocking remote call.
//! The production implementation shells out to `qdbus`; tests use a
//! scripted double.

pub mod methods;
mod qdbus;
#[cfg(any(test, feature = "testing"))]
mod scripted;

pub use qdbus::QdbusGateway;
#[cfg(any(test, feature = "testing"))]
pub use scripted::{RecordedCall, ScriptedGateway};

use crate::error::GatewayError;

/// Synchronous access to the remote Yakuake interface
pub trait Gateway {
    /// Issue one call and return its reply with surrounding newlines trimmed
    fn call(&self, path: &str, method: &str, args: &[&str]) -> Result<String, GatewayError>;

    /// Like [`Gateway::call`], but an empty reply is an error
    fn call_required(
        &self,
        path: &str,
        method: &str,
        args: &[&str],
    ) -> Result<String, GatewayError> {
        let reply = self.call(path, method, args)?;
        if reply.trim().is_empty() {
            return Err(GatewayError::EmptyReply(methods::short_name(method).to_string()));
        }
        Ok(reply)
    }

    /// Best-effort call whose reply is discarded.
    ///
    /// A failure is handed back for reporting; it never aborts the calling
    /// operation.
    fn call_void(&self, path: &str, method: &str, args: &[&str]) -> Option<GatewayError> {
        match self.call(path, method, args) {
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("{} failed: {}", methods::short_name(method), e);
                Some(e)
            }
        }
    }
}

impl<G: Gateway + ?Sized> Gateway for &G {
    fn call(&self, path: &str, method: &str, args: &[&str]) -> Result<String, GatewayError> {
        (**self).call(path, method, args)
    }
}
