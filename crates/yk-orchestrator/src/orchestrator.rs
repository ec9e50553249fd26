//! Session orchestrator
//!
//! Sequences gateway calls for the high-level operations. The operations
//! themselves live in their own modules:
//! - [`replay`](crate::replay): open a profile
//! - [`clear`](crate::clear): close terminals, active session last
//! - [`exec`](crate::exec): run a command in many terminals
//! - [`status`](crate::status): list sessions and terminals

use std::fmt::Display;
use std::time::Duration;

use yk_core::error::GatewayError;
use yk_core::Gateway;

use crate::yakuake::Yakuake;

/// Pause between unlocking a session and closing its terminal, giving
/// Yakuake time to apply the new closable state.
pub const SETTLE_DELAY: Duration = Duration::from_millis(10);

/// Drives a Yakuake instance through a gateway
#[derive(Debug)]
pub struct SessionOrchestrator<G> {
    pub(crate) yakuake: Yakuake<G>,
    pub(crate) settle_delay: Duration,
}

impl<G: Gateway> SessionOrchestrator<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            yakuake: Yakuake::new(gateway),
            settle_delay: SETTLE_DELAY,
        }
    }

    /// Override the unlock-to-close pause
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

/// Keep a failed best-effort call as a warning
pub(crate) fn note(warnings: &mut Vec<String>, context: impl Display, failure: Option<GatewayError>) {
    if let Some(e) = failure {
        warnings.push(format!("{}: {}", context, e));
    }
}
