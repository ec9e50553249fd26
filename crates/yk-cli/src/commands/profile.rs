//! Profile command implementations

use anyhow::Result;

use yk_core::config::{profile_to_yaml, ConfigFile};
use yk_core::Gateway;
use yk_orchestrator::SessionOrchestrator;

use crate::commands::print_clear_report;
use crate::output::{format_profiles, print_error, print_success, print_warning, print_warnings};

/// List the defined profiles
pub fn profile_list(config: &ConfigFile) -> Result<()> {
    if config.profiles.is_empty() {
        print_warning("No profiles defined!");
        return Ok(());
    }

    println!("{}", format_profiles(&config.profiles));
    Ok(())
}

/// Print one profile as YAML
pub fn profile_show(config: &ConfigFile, id: i64) -> Result<()> {
    let profile = match config.profile(id) {
        Ok(p) => p,
        Err(e) => {
            print_error(&e.to_string());
            return Err(e.into());
        }
    };

    println!("{}", profile_to_yaml(profile)?);
    Ok(())
}

/// Open a profile in the running Yakuake
pub fn profile_open<G: Gateway>(
    orchestrator: &SessionOrchestrator<G>,
    config: &ConfigFile,
    id: i64,
    verbose: bool,
) -> Result<()> {
    if verbose {
        if let Ok(profile) = config.profile(id) {
            println!("{}", profile_to_yaml(profile)?);
        }
    }

    let report = match orchestrator.open_profile(config, id) {
        Ok(r) => r,
        Err(e) => {
            print_error(&format!("Failed to open profile #{}: {}", id, e));
            return Err(e.into());
        }
    };

    for tab in &report.tabs {
        print_success(&format!(
            "Created new session #{} ('{}')",
            tab.session, tab.name
        ));
    }
    print_warnings(&report.warnings);

    if let Some(clear) = &report.clear {
        print_clear_report(clear);
    }

    Ok(())
}
