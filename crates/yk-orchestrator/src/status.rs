//! Status listing

use yk_core::error::YkError;
use yk_core::Gateway;

use crate::orchestrator::SessionOrchestrator;
use crate::report::{SessionStatus, StatusReport};

impl<G: Gateway> SessionOrchestrator<G> {
    /// Collect every session with its title and terminals.
    ///
    /// Read-only; the first failing call aborts the whole listing.
    pub fn status(&self) -> Result<StatusReport, YkError> {
        let mut report = StatusReport::default();
        for id in self.yakuake.session_ids()? {
            let title = self.yakuake.tab_title(&id)?;
            let terminals = self.yakuake.terminal_ids_for_session(&id)?;
            report.sessions.push(SessionStatus {
                id,
                title,
                terminals,
            });
        }
        Ok(report)
    }
}
