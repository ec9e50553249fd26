//! yk-orchestrator: Session orchestration for yakctl
//!
//! Replays profiles, clears sessions, fans commands out to terminals and
//! lists status by sequencing calls through a [`yk_core::Gateway`].
//! All operations are synchronous and return structured reports; printing
//! is left to the caller.

pub mod clear;
pub mod exec;
pub mod orchestrator;
pub mod replay;
pub mod report;
pub mod status;
pub mod yakuake;

pub use clear::{ClearOptions, Postpone};
pub use orchestrator::{SessionOrchestrator, SETTLE_DELAY};
pub use report::{
    ClearReport, ExecReport, OpenedTab, ReplayReport, SessionStatus, StatusReport,
    TerminalAction, TerminalOutcome,
};
pub use yakuake::Yakuake;
