//! Profile replay

use yk_core::config::{ConfigFile, Profile, Tab};
use yk_core::error::{GatewayError, SessionError, YkError};
use yk_core::{Gateway, TerminalId};

use crate::clear::ClearOptions;
use crate::orchestrator::{note, SessionOrchestrator};
use crate::report::{OpenedTab, ReplayReport};

impl<G: Gateway> SessionOrchestrator<G> {
    /// Look up profile `id` and replay it.
    ///
    /// An unknown id fails before any remote call is made.
    pub fn open_profile(&self, config: &ConfigFile, id: i64) -> Result<ReplayReport, YkError> {
        let profile = config.profile(id)?;
        self.replay(profile)
    }

    /// Open all tabs of a profile, then optionally clear what was open before
    pub fn replay(&self, profile: &Profile) -> Result<ReplayReport, YkError> {
        // Snapshot before mutating anything: only these terminals are
        // candidates for the clearing step
        let active_before = self.yakuake.active_session_id()?;
        let terminals_before = self.yakuake.terminal_ids()?;
        tracing::debug!(
            "Profile '{}': active session {:?}, {} terminal(s) open",
            profile.name,
            active_before,
            terminals_before.len()
        );

        let mut report = ReplayReport::default();

        for tab in &profile.tabs {
            let opened = self.open_tab(tab, &mut report.warnings)?;
            tracing::debug!("Created new session #{}", opened.session);
            report.tabs.push(opened);
        }

        report.window_toggled = self.show_window(&mut report.warnings);

        if profile.clear_all {
            let options = ClearOptions {
                force: profile.force_clear,
                postpone: active_before.into(),
            };
            report.clear = Some(self.clear(&terminals_before, &options)?);
        }

        Ok(report)
    }

    fn open_tab(&self, tab: &Tab, warnings: &mut Vec<String>) -> Result<OpenedTab, YkError> {
        let session = self
            .yakuake
            .add_session(tab.split())?
            .ok_or_else(|| SessionError::CreationFailed(tab.name.clone()))?;

        note(
            warnings,
            format!("Setting title of session #{}", session),
            self.yakuake.set_tab_title(&session, &tab.name),
        );

        let terminals = self.yakuake.terminal_ids_for_session(&session)?;
        let expected = tab.split().terminal_count();
        if terminals.len() != expected {
            tracing::warn!(
                "Session #{} has {} terminal(s), layout '{}' expects {}",
                session,
                terminals.len(),
                tab.split(),
                expected
            );
        }

        for command in &tab.commands {
            for terminal in &terminals {
                self.run(terminal, command, warnings);
            }
        }

        // Slots beyond the terminals the layout produced are skipped
        for (terminal, commands) in terminals.iter().zip(tab.slot_commands()) {
            for command in commands {
                self.run(terminal, command, warnings);
            }
        }

        if tab.protected {
            note(
                warnings,
                format!("Protecting session #{}", session),
                self.yakuake.set_session_closable(&session, false),
            );
        }
        if tab.monitor_silence {
            note(
                warnings,
                format!("Monitoring silence of session #{}", session),
                self.yakuake.set_monitor_silence(&session, true),
            );
        }
        if tab.monitor_activity {
            note(
                warnings,
                format!("Monitoring activity of session #{}", session),
                self.yakuake.set_monitor_activity(&session, true),
            );
        }
        if tab.disable_keyboard_input {
            note(
                warnings,
                format!("Disabling input of session #{}", session),
                self.yakuake.set_keyboard_input(&session, false),
            );
        }

        Ok(OpenedTab {
            name: tab.name.clone(),
            session,
            terminals,
        })
    }

    pub(crate) fn run(&self, terminal: &TerminalId, command: &str, warnings: &mut Vec<String>) {
        note(
            warnings,
            format!("Running '{}' in terminal #{}", command, terminal),
            self.yakuake.run_command(terminal, command),
        );
    }

    /// Make sure the window is visible; returns whether it was toggled.
    ///
    /// A failed visibility query counts as shown, an empty or unparsable
    /// reply as hidden.
    fn show_window(&self, warnings: &mut Vec<String>) -> bool {
        let visible = match self.yakuake.is_window_visible() {
            Ok(visible) => visible,
            Err(e @ GatewayError::UnexpectedReply { .. }) => {
                warnings.push(format!("Parsing window state: {}", e));
                false
            }
            Err(e) => {
                warnings.push(format!("Fetching window state: {}", e));
                true
            }
        };
        if visible {
            return false;
        }
        let failure = self.yakuake.toggle_window();
        let toggled = failure.is_none();
        note(warnings, "Showing window", failure);
        toggled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::Duration;
    use yk_core::config::parse_config;
    use yk_core::gateway::methods::*;
    use yk_core::gateway::ScriptedGateway;
    use yk_core::SessionId;

    fn orchestrator(gateway: &ScriptedGateway) -> SessionOrchestrator<&ScriptedGateway> {
        SessionOrchestrator::new(gateway).with_settle_delay(Duration::ZERO)
    }

    fn tab(name: &str, split: &str) -> Tab {
        Tab {
            split_mode: split.to_string(),
            ..Tab::new(name)
        }
    }

    fn profile(tabs: Vec<Tab>) -> Profile {
        Profile {
            name: "test".to_string(),
            tabs,
            ..Default::default()
        }
    }

    fn session_creations(gateway: &ScriptedGateway) -> Vec<String> {
        gateway
            .calls()
            .into_iter()
            .filter(|c| c.method.starts_with("addSession"))
            .map(|c| c.method)
            .collect()
    }

    #[test]
    fn test_one_session_per_tab_in_order() {
        let gateway = ScriptedGateway::new();
        gateway
            .reply(ADD_SESSION, &[], "1")
            .reply(ADD_SESSION_TWO_VERTICAL, &[], "2")
            .reply(ADD_SESSION_QUAD, &[], "3")
            .reply(WIDGET_VISIBLE, &[], "true");

        let report = orchestrator(&gateway)
            .replay(&profile(vec![
                tab("a", ""),
                tab("b", "top-bottom"),
                tab("c", "Quad"),
            ]))
            .unwrap();

        assert_eq!(
            session_creations(&gateway),
            vec!["addSession", "addSessionTwoVertical", "addSessionQuad"]
        );
        let sessions: Vec<SessionId> = report.tabs.iter().map(|t| t.session.clone()).collect();
        assert_eq!(
            sessions,
            vec![SessionId::from("1"), SessionId::from("2"), SessionId::from("3")]
        );
        assert_eq!(
            gateway.calls_to(SET_TAB_TITLE),
            vec![vec!["1", "a"], vec!["2", "b"], vec!["3", "c"]]
        );
        assert!(!report.window_toggled);
        assert!(report.clear.is_none());
    }

    #[test]
    fn test_quad_tab_has_four_terminals() {
        let gateway = ScriptedGateway::new();
        gateway
            .reply(ADD_SESSION_QUAD, &[], "8")
            .reply(TERMINAL_IDS_FOR_SESSION, &["8"], "20,21,22,23");

        let report = orchestrator(&gateway)
            .replay(&profile(vec![tab("grid", "qu")]))
            .unwrap();

        assert_eq!(report.tabs[0].terminals.len(), 4);
    }

    #[test]
    fn test_shared_commands_run_command_major() {
        let gateway = ScriptedGateway::new();
        gateway
            .reply(ADD_SESSION_TWO_HORIZONTAL, &[], "1")
            .reply(TERMINAL_IDS_FOR_SESSION, &["1"], "4,5");

        let mut split = tab("split", "lr");
        split.commands = vec!["A".to_string(), "B".to_string()];
        split.terminal2 = vec!["C".to_string()];
        orchestrator(&gateway).replay(&profile(vec![split])).unwrap();

        assert_eq!(
            gateway.calls_to(RUN_COMMAND_IN_TERMINAL),
            vec![
                vec!["4", "A"],
                vec!["5", "A"],
                vec!["4", "B"],
                vec!["5", "B"],
                vec!["5", "C"],
            ]
        );
    }

    #[test]
    fn test_slot_commands_beyond_terminal_count_skipped() {
        let gateway = ScriptedGateway::new();
        gateway
            .reply(ADD_SESSION, &[], "1")
            .reply(TERMINAL_IDS_FOR_SESSION, &["1"], "4")
            .reply(WIDGET_VISIBLE, &[], "true");

        let mut single = tab("single", "");
        single.terminal1 = vec!["one".to_string()];
        single.terminal2 = vec!["two".to_string()];
        single.terminal4 = vec!["four".to_string()];
        let report = orchestrator(&gateway).replay(&profile(vec![single])).unwrap();

        assert_eq!(gateway.calls_to(RUN_COMMAND_IN_TERMINAL), vec![vec!["4", "one"]]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_empty_session_id_aborts_replay() {
        let gateway = ScriptedGateway::new();
        gateway
            .reply(ADD_SESSION, &[], "1")
            .reply(ADD_SESSION, &[], "");

        let err = orchestrator(&gateway)
            .replay(&profile(vec![tab("a", ""), tab("b", ""), tab("c", "")]))
            .unwrap_err();

        assert!(matches!(
            err,
            YkError::Session(SessionError::CreationFailed(name)) if name == "b"
        ));
        assert_eq!(session_creations(&gateway).len(), 2);
        assert!(gateway.calls_to(TOGGLE_WINDOW_STATE).is_empty());
    }

    #[test]
    fn test_flags_are_best_effort() {
        let gateway = ScriptedGateway::new();
        gateway
            .reply(ADD_SESSION, &[], "1")
            .fail(SET_SESSION_CLOSABLE, &[], "denied")
            .fail(SET_TAB_TITLE, &[], "denied")
            .reply(WIDGET_VISIBLE, &[], "true");

        let mut flagged = tab("flags", "");
        flagged.protected = true;
        flagged.monitor_silence = true;
        flagged.monitor_activity = true;
        flagged.disable_keyboard_input = true;
        let report = orchestrator(&gateway).replay(&profile(vec![flagged])).unwrap();

        assert_eq!(report.warnings.len(), 2);
        assert_eq!(gateway.calls_to(SET_SESSION_CLOSABLE), vec![vec!["1", "false"]]);
        assert_eq!(gateway.calls_to(SET_MONITOR_SILENCE), vec![vec!["1", "true"]]);
        assert_eq!(gateway.calls_to(SET_MONITOR_ACTIVITY), vec![vec!["1", "true"]]);
        assert_eq!(gateway.calls_to(SET_KEYBOARD_INPUT_ENABLED), vec![vec!["1", "false"]]);
    }

    #[test]
    fn test_hidden_window_is_toggled() {
        let gateway = ScriptedGateway::new();
        gateway.reply(WIDGET_VISIBLE, &[], "false");

        let report = orchestrator(&gateway).replay(&profile(vec![])).unwrap();

        assert!(report.window_toggled);
        assert_eq!(gateway.calls_to(TOGGLE_WINDOW_STATE).len(), 1);
    }

    #[test]
    fn test_empty_window_state_counts_as_hidden() {
        let gateway = ScriptedGateway::new();
        gateway.reply(WIDGET_VISIBLE, &[], "");

        let report = orchestrator(&gateway).replay(&profile(vec![])).unwrap();

        assert!(report.window_toggled);
        assert_eq!(gateway.calls_to(TOGGLE_WINDOW_STATE).len(), 1);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_failed_toggle_is_not_reported_as_toggled() {
        let gateway = ScriptedGateway::new();
        gateway
            .reply(WIDGET_VISIBLE, &[], "false")
            .fail(TOGGLE_WINDOW_STATE, &[], "no window");

        let report = orchestrator(&gateway).replay(&profile(vec![])).unwrap();

        assert!(!report.window_toggled);
        assert_eq!(gateway.calls_to(TOGGLE_WINDOW_STATE).len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("Showing window"));
    }

    #[test]
    fn test_unreadable_window_state_counts_as_shown() {
        let gateway = ScriptedGateway::new();
        gateway.fail(WIDGET_VISIBLE, &[], "no reply");

        let report = orchestrator(&gateway).replay(&profile(vec![])).unwrap();

        assert!(!report.window_toggled);
        assert!(gateway.calls_to(TOGGLE_WINDOW_STATE).is_empty());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_clear_only_touches_terminals_open_before() {
        let gateway = ScriptedGateway::new();
        gateway
            .reply(ACTIVE_SESSION_ID, &[], "0")
            .reply(TERMINAL_ID_LIST, &[], "0,1")
            .reply(SESSION_ID_FOR_TERMINAL, &["0"], "0")
            .reply(SESSION_ID_FOR_TERMINAL, &["1"], "1")
            .reply(IS_SESSION_CLOSABLE, &[], "true")
            .reply(ADD_SESSION, &[], "2")
            .reply(TERMINAL_IDS_FOR_SESSION, &["2"], "2")
            .reply(WIDGET_VISIBLE, &[], "true");

        let mut clearing = profile(vec![tab("new", "")]);
        clearing.clear_all = true;
        let report = orchestrator(&gateway).replay(&clearing).unwrap();

        // Terminal 0 sits in the session that was active before the replay
        assert_eq!(gateway.calls_to(REMOVE_TERMINAL), vec![vec!["1"], vec!["0"]]);
        assert_eq!(gateway.calls_to(ACTIVE_SESSION_ID).len(), 1);
        let clear = report.clear.expect("clear report");
        assert_eq!(clear.candidates, 2);
        assert!(!clear.forced);
        assert!(clear.succeeded());
    }

    #[test]
    fn test_unknown_profile_makes_no_calls() {
        let gateway = ScriptedGateway::new();
        let config = parse_config(Path::new("t.yml"), "profiles:\n  - name: only\n").unwrap();

        for id in [0, -1, 2] {
            let err = orchestrator(&gateway).open_profile(&config, id).unwrap_err();
            assert!(matches!(err, YkError::Profile(_)));
        }
        assert!(gateway.calls().is_empty());

        let empty = ConfigFile::default();
        assert!(orchestrator(&gateway).open_profile(&empty, 1).is_err());
        assert!(gateway.calls().is_empty());
    }
}
