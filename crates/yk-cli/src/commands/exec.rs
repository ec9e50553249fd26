//! Exec command implementation

use anyhow::Result;

use yk_core::{Gateway, TerminalId};
use yk_orchestrator::SessionOrchestrator;

use crate::output::{print_error, print_info, print_warnings};

/// Normalise the `--terminal` values: trimmed, blanks dropped
pub fn parse_terminal_ids(raw: &[String]) -> Vec<TerminalId> {
    raw.iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(TerminalId::from)
        .collect()
}

/// Execute a command in all or the given terminals
pub fn exec_command<G: Gateway>(
    orchestrator: &SessionOrchestrator<G>,
    command: &str,
    terminals: &[TerminalId],
) -> Result<()> {
    if terminals.is_empty() {
        print_info(&format!("Execute '{}' in all terminals", command));
    } else {
        let ids: Vec<&str> = terminals.iter().map(|t| t.as_str()).collect();
        print_info(&format!(
            "Execute '{}' in terminals: {}",
            command,
            ids.join(",")
        ));
    }

    let report = match orchestrator.execute(command, terminals) {
        Ok(r) => r,
        Err(e) => {
            print_error(&format!("Problem fetching terminal ids of yakuake: {}", e));
            return Err(e.into());
        }
    };

    for terminal in &report.terminals {
        print_info(&format!(
            "Execute command '{}' in terminal #{}",
            command, terminal
        ));
    }
    print_warnings(&report.warnings);

    Ok(())
}
