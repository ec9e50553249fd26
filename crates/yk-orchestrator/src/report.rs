//! Results handed back to the CLI for rendering

use serde::Serialize;
use yk_core::{SessionId, TerminalId};

/// A tab opened while replaying a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedTab {
    pub name: String,
    pub session: SessionId,
    pub terminals: Vec<TerminalId>,
}

/// Outcome of replaying a profile
#[derive(Debug, Default)]
pub struct ReplayReport {
    /// Tabs in the order they were opened
    pub tabs: Vec<OpenedTab>,
    /// Whether the window had to be toggled visible
    pub window_toggled: bool,
    /// Best-effort calls that failed
    pub warnings: Vec<String>,
    /// Present when the profile asked for clearing
    pub clear: Option<ClearReport>,
}

/// What happened to one terminal during clearing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalAction {
    /// Terminal was removed
    Closed,
    /// Session is not closable and clearing was not forced
    Protected,
    /// Removal was attempted or prepared and failed
    Failed(String),
}

/// Per-terminal clearing result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalOutcome {
    pub terminal: TerminalId,
    /// Owning session at the time of the partition
    pub session: Option<SessionId>,
    /// Tab title before closing
    pub title: String,
    pub action: TerminalAction,
}

/// Outcome of a clearing pass
#[derive(Debug, Default)]
pub struct ClearReport {
    /// Number of candidate terminals handed in
    pub candidates: usize,
    pub forced: bool,
    /// Outcomes in processing order
    pub outcomes: Vec<TerminalOutcome>,
    pub warnings: Vec<String>,
}

impl ClearReport {
    pub fn closed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.action == TerminalAction::Closed)
            .count()
    }

    /// At least one terminal was actually closed
    pub fn succeeded(&self) -> bool {
        self.closed_count() > 0
    }
}

/// Outcome of fanning a command out to terminals
#[derive(Debug, Default)]
pub struct ExecReport {
    pub terminals: Vec<TerminalId>,
    pub warnings: Vec<String>,
}

/// One session in the status listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub id: SessionId,
    pub title: String,
    pub terminals: Vec<TerminalId>,
}

/// Snapshot of all sessions and terminals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub sessions: Vec<SessionStatus>,
}
