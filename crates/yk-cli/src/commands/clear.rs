//! Clear command implementation

use anyhow::Result;

use yk_core::Gateway;
use yk_orchestrator::{ClearReport, SessionOrchestrator, TerminalAction};

use crate::output::{print_error, print_info, print_success, print_warning, print_warnings};

/// Execute the clear command
pub fn clear_command<G: Gateway>(orchestrator: &SessionOrchestrator<G>, force: bool) -> Result<()> {
    let report = match orchestrator.clear_all(force) {
        Ok(r) => r,
        Err(e) => {
            print_error(&format!("Failed to clear sessions: {}", e));
            return Err(e.into());
        }
    };

    print_clear_report(&report);
    Ok(())
}

/// Render the outcome of a clearing pass
pub fn print_clear_report(report: &ClearReport) {
    match report.candidates {
        0 => print_info("Found NO open terminal"),
        1 => print_info("Found one open terminal that will be tried to close"),
        n => print_info(&format!(
            "Found {} open terminals that will be tried to close",
            n
        )),
    }

    if report.forced {
        print_warning("Closing of tabs will be forced!");
    }

    for outcome in &report.outcomes {
        let session = outcome
            .session
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "?".to_string());
        match &outcome.action {
            TerminalAction::Closed => print_info(&format!(
                "Closing terminal #{} with session #{} and title '{}'",
                outcome.terminal, session, outcome.title
            )),
            TerminalAction::Protected => print_warning(&format!(
                "Terminal #{} ('{}') is protected and not closable. Do it manually!",
                outcome.terminal, outcome.title
            )),
            TerminalAction::Failed(reason) => print_warning(&format!(
                "Terminal with terminalId #{} can't be removed! {}",
                outcome.terminal, reason
            )),
        }
    }

    print_warnings(&report.warnings);

    if report.succeeded() {
        print_success("All sessions cleared!");
    }
}
