//! Direct command execution

use yk_core::error::YkError;
use yk_core::{Gateway, TerminalId};

use crate::orchestrator::SessionOrchestrator;
use crate::report::ExecReport;

impl<G: Gateway> SessionOrchestrator<G> {
    /// Run `command` in the given terminals, or in every open terminal
    /// when `terminals` is empty
    pub fn execute(&self, command: &str, terminals: &[TerminalId]) -> Result<ExecReport, YkError> {
        let terminals = if terminals.is_empty() {
            self.yakuake.terminal_ids()?
        } else {
            terminals.to_vec()
        };

        let mut report = ExecReport::default();
        for terminal in &terminals {
            self.run(terminal, command, &mut report.warnings);
        }
        report.terminals = terminals;
        Ok(report)
    }
}
