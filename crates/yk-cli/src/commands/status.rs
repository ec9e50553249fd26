//! Status command implementation

use anyhow::Result;

use yk_core::Gateway;
use yk_orchestrator::SessionOrchestrator;

use crate::output::{format_status, print_error};

/// Execute the status command
pub fn status_command<G: Gateway>(orchestrator: &SessionOrchestrator<G>, json: bool) -> Result<()> {
    let status = match orchestrator.status() {
        Ok(s) => s,
        Err(e) => {
            print_error(&format!("Failed to get yakuake status: {}", e));
            print_error("Is yakuake running?");
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", format_status(&status).trim_end());
    }

    Ok(())
}
