//! Session clearing
//!
//! Candidates are split once into the terminals of the postponed session
//! (usually the one yakctl itself runs in) and everything else. The others
//! are closed first so that closing our own terminal, if it happens at all,
//! is the last thing we do.

use std::collections::HashSet;

use yk_core::error::YkError;
use yk_core::{Gateway, SessionId, TerminalId};

use crate::orchestrator::{note, SessionOrchestrator};
use crate::report::{ClearReport, TerminalAction, TerminalOutcome};

/// Which session's terminals are closed last
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Postpone {
    /// Ask Yakuake for the active session when clearing starts
    #[default]
    ActiveSession,
    /// A session id captured earlier
    Session(SessionId),
    /// Nothing is postponed
    Nothing,
}

impl From<Option<SessionId>> for Postpone {
    fn from(session: Option<SessionId>) -> Self {
        session.map(Postpone::Session).unwrap_or(Postpone::Nothing)
    }
}

/// Parameters of a clearing pass
#[derive(Debug, Clone, Default)]
pub struct ClearOptions {
    /// Unlock and close protected sessions too
    pub force: bool,
    pub postpone: Postpone,
}

/// A terminal together with the session it belonged to when partitioned
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Member {
    pub terminal: TerminalId,
    pub session: SessionId,
}

/// Split members into `(immediate, postponed)`, keeping input order
pub(crate) fn partition(
    members: Vec<Member>,
    protected: Option<&SessionId>,
) -> (Vec<Member>, Vec<Member>) {
    members
        .into_iter()
        .partition(|m| Some(&m.session) != protected)
}

impl<G: Gateway> SessionOrchestrator<G> {
    /// Close every open terminal, the active session last
    pub fn clear_all(&self, force: bool) -> Result<ClearReport, YkError> {
        let terminals = self.yakuake.terminal_ids()?;
        self.clear(
            &terminals,
            &ClearOptions {
                force,
                postpone: Postpone::ActiveSession,
            },
        )
    }

    /// Close the given terminals.
    ///
    /// Membership is resolved once up front; the processing loop never
    /// asks again which session a terminal belongs to.
    pub fn clear(
        &self,
        candidates: &[TerminalId],
        options: &ClearOptions,
    ) -> Result<ClearReport, YkError> {
        let protected = match &options.postpone {
            Postpone::ActiveSession => self.yakuake.active_session_id()?,
            Postpone::Session(id) => Some(id.clone()),
            Postpone::Nothing => None,
        };

        let mut report = ClearReport {
            candidates: candidates.len(),
            forced: options.force,
            ..Default::default()
        };

        if options.force {
            tracing::debug!("Closing of tabs will be forced");
        }

        let mut seen = HashSet::new();
        let mut members = Vec::with_capacity(candidates.len());
        for terminal in candidates {
            if !seen.insert(terminal) {
                continue;
            }
            match self.yakuake.session_for_terminal(terminal) {
                Ok(Some(session)) => members.push(Member {
                    terminal: terminal.clone(),
                    session,
                }),
                Ok(None) => report.outcomes.push(TerminalOutcome {
                    terminal: terminal.clone(),
                    session: None,
                    title: String::new(),
                    action: TerminalAction::Failed("terminal belongs to no session".to_string()),
                }),
                Err(e) => report.outcomes.push(TerminalOutcome {
                    terminal: terminal.clone(),
                    session: None,
                    title: String::new(),
                    action: TerminalAction::Failed(e.to_string()),
                }),
            }
        }

        let (immediate, postponed) = partition(members, protected.as_ref());
        tracing::debug!(
            "Clearing {} terminal(s) now, {} postponed",
            immediate.len(),
            postponed.len()
        );

        for member in immediate.into_iter().chain(postponed) {
            let outcome = self.close_member(member, options.force, &mut report.warnings);
            report.outcomes.push(outcome);
        }

        Ok(report)
    }

    fn close_member(&self, member: Member, force: bool, warnings: &mut Vec<String>) -> TerminalOutcome {
        let Member { terminal, session } = member;

        let closable = match self.yakuake.is_session_closable(&session) {
            Ok(closable) => closable,
            Err(e) => {
                warnings.push(format!(
                    "Error fetching closable information of session #{}: {}",
                    session, e
                ));
                false
            }
        };

        let title = match self.yakuake.tab_title(&session) {
            Ok(title) => title,
            Err(e) => {
                warnings.push(format!("Title of session #{}: {}", session, e));
                String::new()
            }
        };

        let outcome = |action| TerminalOutcome {
            terminal: terminal.clone(),
            session: Some(session.clone()),
            title: title.clone(),
            action,
        };

        if !closable && !force {
            tracing::debug!("Terminal #{} ('{}') is protected", terminal, title);
            return outcome(TerminalAction::Protected);
        }

        if force {
            note(
                warnings,
                format!("Unlocking session #{}", session),
                self.yakuake.set_session_closable(&session, true),
            );
            std::thread::sleep(self.settle_delay);
        }

        match self.yakuake.remove_terminal(&terminal) {
            Ok(()) => {
                tracing::debug!(
                    "Closed terminal #{} with session #{} and title '{}'",
                    terminal,
                    session,
                    title
                );
                outcome(TerminalAction::Closed)
            }
            Err(e) => outcome(TerminalAction::Failed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use yk_core::gateway::methods::*;
    use yk_core::gateway::ScriptedGateway;

    fn orchestrator(gateway: &ScriptedGateway) -> SessionOrchestrator<&ScriptedGateway> {
        SessionOrchestrator::new(gateway).with_settle_delay(Duration::ZERO)
    }

    fn ids(raw: &[&str]) -> Vec<TerminalId> {
        raw.iter().map(|id| TerminalId::from(*id)).collect()
    }

    /// Terminals 0..=3; 0 and 2 in session 1, 1 in session 2, 3 in session 3
    fn four_terminals(gateway: &ScriptedGateway) {
        gateway
            .reply(SESSION_ID_FOR_TERMINAL, &["0"], "1")
            .reply(SESSION_ID_FOR_TERMINAL, &["1"], "2")
            .reply(SESSION_ID_FOR_TERMINAL, &["2"], "1")
            .reply(SESSION_ID_FOR_TERMINAL, &["3"], "3")
            .reply(IS_SESSION_CLOSABLE, &[], "true");
    }

    #[test]
    fn test_partition_is_stable() {
        let member = |t: &str, s: &str| Member {
            terminal: t.into(),
            session: s.into(),
        };
        let members = vec![member("0", "1"), member("1", "2"), member("2", "2"), member("3", "3")];

        let (immediate, postponed) = partition(members.clone(), Some(&"2".into()));
        assert_eq!(immediate, vec![member("0", "1"), member("3", "3")]);
        assert_eq!(postponed, vec![member("1", "2"), member("2", "2")]);

        let (immediate, postponed) = partition(members.clone(), None);
        assert_eq!(immediate, members);
        assert!(postponed.is_empty());
    }

    #[test]
    fn test_protected_session_closed_last() {
        let gateway = ScriptedGateway::new();
        four_terminals(&gateway);

        let report = orchestrator(&gateway)
            .clear(
                &ids(&["0", "1", "2", "3"]),
                &ClearOptions {
                    force: false,
                    postpone: Postpone::Session("2".into()),
                },
            )
            .unwrap();

        assert_eq!(
            gateway.calls_to(REMOVE_TERMINAL),
            vec![vec!["0"], vec!["2"], vec!["3"], vec!["1"]]
        );
        assert_eq!(report.closed_count(), 4);
        assert!(report.succeeded());
    }

    #[test]
    fn test_active_session_resolved_when_not_given() {
        let gateway = ScriptedGateway::new();
        four_terminals(&gateway);
        gateway.reply(ACTIVE_SESSION_ID, &[], "1");

        orchestrator(&gateway)
            .clear(&ids(&["0", "1", "2", "3"]), &ClearOptions::default())
            .unwrap();

        assert_eq!(gateway.position(ACTIVE_SESSION_ID, &[]), Some(0));
        assert_eq!(
            gateway.calls_to(REMOVE_TERMINAL),
            vec![vec!["1"], vec!["3"], vec!["0"], vec!["2"]]
        );
    }

    #[test]
    fn test_protected_terminal_skipped_without_force() {
        let gateway = ScriptedGateway::new();
        gateway
            .reply(SESSION_ID_FOR_TERMINAL, &["5"], "9")
            .reply(IS_SESSION_CLOSABLE, &["9"], "false")
            .reply(TAB_TITLE, &["9"], "keep me");

        let report = orchestrator(&gateway)
            .clear(
                &ids(&["5"]),
                &ClearOptions {
                    force: false,
                    postpone: Postpone::Nothing,
                },
            )
            .unwrap();

        assert!(gateway.calls_to(REMOVE_TERMINAL).is_empty());
        assert!(gateway.calls_to(SET_SESSION_CLOSABLE).is_empty());
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].action, TerminalAction::Protected);
        assert_eq!(report.outcomes[0].title, "keep me");
        assert!(!report.succeeded());
    }

    #[test]
    fn test_force_unlocks_before_close() {
        let gateway = ScriptedGateway::new();
        gateway
            .reply(SESSION_ID_FOR_TERMINAL, &["5"], "9")
            .reply(SESSION_ID_FOR_TERMINAL, &["6"], "10")
            .reply(IS_SESSION_CLOSABLE, &[], "false");

        let report = orchestrator(&gateway)
            .clear(
                &ids(&["5", "6"]),
                &ClearOptions {
                    force: true,
                    postpone: Postpone::Nothing,
                },
            )
            .unwrap();

        for (terminal, session) in [("5", "9"), ("6", "10")] {
            let unlock = gateway
                .position(SET_SESSION_CLOSABLE, &[session, "true"])
                .expect("session unlocked");
            let close = gateway
                .position(REMOVE_TERMINAL, &[terminal])
                .expect("terminal closed");
            assert!(unlock < close);
        }
        assert!(report.forced);
        assert_eq!(report.closed_count(), 2);
    }

    #[test]
    fn test_no_terminals_is_not_success() {
        let gateway = ScriptedGateway::new();
        gateway.reply(TERMINAL_ID_LIST, &[], "");

        let report = orchestrator(&gateway).clear_all(false).unwrap();

        assert_eq!(report.candidates, 0);
        assert!(report.outcomes.is_empty());
        assert!(!report.succeeded());
        assert!(gateway.calls_to(REMOVE_TERMINAL).is_empty());
    }

    #[test]
    fn test_duplicate_candidates_processed_once() {
        let gateway = ScriptedGateway::new();
        four_terminals(&gateway);

        let report = orchestrator(&gateway)
            .clear(
                &ids(&["3", "3", "0"]),
                &ClearOptions {
                    force: false,
                    postpone: Postpone::Nothing,
                },
            )
            .unwrap();

        assert_eq!(gateway.calls_to(REMOVE_TERMINAL), vec![vec!["3"], vec!["0"]]);
        assert_eq!(report.outcomes.len(), 2);
    }

    #[test]
    fn test_vanished_terminal_and_failed_removal_reported() {
        let gateway = ScriptedGateway::new();
        gateway
            .reply(SESSION_ID_FOR_TERMINAL, &["1"], "-1")
            .reply(SESSION_ID_FOR_TERMINAL, &["2"], "4")
            .reply(IS_SESSION_CLOSABLE, &[], "true")
            .fail(REMOVE_TERMINAL, &["2"], "busy");

        let report = orchestrator(&gateway)
            .clear(
                &ids(&["1", "2"]),
                &ClearOptions {
                    force: false,
                    postpone: Postpone::Nothing,
                },
            )
            .unwrap();

        assert_eq!(gateway.calls_to(REMOVE_TERMINAL), vec![vec!["2"]]);
        assert!(matches!(report.outcomes[0].action, TerminalAction::Failed(_)));
        assert!(matches!(report.outcomes[1].action, TerminalAction::Failed(_)));
        assert_eq!(report.outcomes[1].session, Some("4".into()));
        assert!(!report.succeeded());
    }
}
