//! Output formatting utilities for the CLI
//!
//! This module provides functions for formatting profiles and Yakuake
//! status as human-readable terminal output, and colored status messages.

use tabled::{settings::Style, Table, Tabled};

use yk_core::config::Profile;
use yk_orchestrator::StatusReport;

/// Format the defined profiles as an ASCII table
///
/// Profiles are numbered from 1, matching the ids accepted by
/// `profile show` and `profile open`.
pub fn format_profiles(profiles: &[Profile]) -> String {
    #[derive(Tabled)]
    struct ProfileRow {
        #[tabled(rename = "#")]
        id: usize,
        #[tabled(rename = "NAME")]
        name: String,
        #[tabled(rename = "TABS")]
        tabs: usize,
        #[tabled(rename = "CLEAR")]
        clear: String,
    }

    let rows: Vec<ProfileRow> = profiles
        .iter()
        .enumerate()
        .map(|(i, p)| ProfileRow {
            id: i + 1,
            name: p.name.clone(),
            tabs: p.tabs.len(),
            clear: match (p.clear_all, p.force_clear) {
                (false, _) => "-".to_string(),
                (true, false) => "yes".to_string(),
                (true, true) => "forced".to_string(),
            },
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format sessions and their terminals as a tree
///
/// ```text
/// - session #0, tab title: Shell
///     |- Terminal #0
/// ```
pub fn format_status(status: &StatusReport) -> String {
    if status.sessions.is_empty() {
        return "No open sessions".to_string();
    }

    let mut output = String::new();
    for session in &status.sessions {
        output.push_str(&format!(
            "- session #{}, tab title: {}\n",
            session.id, session.title
        ));
        for terminal in &session.terminals {
            output.push_str(&format!("\t|- Terminal #{}\n", terminal));
        }
    }
    output
}

/// Print a success message in green with a checkmark prefix
///
/// Outputs to stdout with green coloring for positive feedback to the user.
pub fn print_success(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stdout = std::io::stdout();
    let _ = crossterm::execute!(
        stdout,
        SetForegroundColor(Color::Green),
        Print("✓ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print an error message in red with an X prefix
///
/// Outputs to stderr with red coloring for error feedback to the user.
pub fn print_error(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stderr = std::io::stderr();
    let _ = crossterm::execute!(
        stderr,
        SetForegroundColor(Color::Red),
        Print("✗ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print a warning message in yellow with a warning symbol prefix
pub fn print_warning(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stderr = std::io::stderr();
    let _ = crossterm::execute!(
        stderr,
        SetForegroundColor(Color::Yellow),
        Print("⚠ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print an informational message in cyan with an info symbol prefix
pub fn print_info(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stdout = std::io::stdout();
    let _ = crossterm::execute!(
        stdout,
        SetForegroundColor(Color::Cyan),
        Print("ℹ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print every collected warning
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        print_warning(warning);
    }
}
