//! Typed view of the Yakuake D-Bus interface
//!
//! Wraps a [`Gateway`] and turns textual replies into ids and booleans.
//! Nothing is cached: every method is one fresh remote call, since the user
//! can change tabs at any time.

use yk_core::error::GatewayError;
use yk_core::gateway::methods::*;
use yk_core::types::{non_sentinel, parse_bool, parse_id_list, SplitMode};
use yk_core::{Gateway, SessionId, TerminalId};

/// Remote Yakuake instance reached through a gateway
#[derive(Debug)]
pub struct Yakuake<G> {
    gateway: G,
}

impl<G: Gateway> Yakuake<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Session currently focused in Yakuake, `None` when there is none
    pub fn active_session_id(&self) -> Result<Option<SessionId>, GatewayError> {
        let reply = self.gateway.call(PATH_SESSIONS, ACTIVE_SESSION_ID, &[])?;
        Ok(non_sentinel(&reply).map(SessionId::from))
    }

    /// Ids of all open sessions, in service order
    pub fn session_ids(&self) -> Result<Vec<SessionId>, GatewayError> {
        let reply = self.gateway.call(PATH_SESSIONS, SESSION_ID_LIST, &[])?;
        Ok(parse_id_list(&reply))
    }

    /// Ids of all open terminals across all sessions
    pub fn terminal_ids(&self) -> Result<Vec<TerminalId>, GatewayError> {
        let reply = self.gateway.call(PATH_SESSIONS, TERMINAL_ID_LIST, &[])?;
        Ok(parse_id_list(&reply))
    }

    /// Terminals of one session; slot 0 is the first terminal
    pub fn terminal_ids_for_session(
        &self,
        session: &SessionId,
    ) -> Result<Vec<TerminalId>, GatewayError> {
        let reply =
            self.gateway
                .call(PATH_SESSIONS, TERMINAL_IDS_FOR_SESSION, &[session.as_str()])?;
        Ok(parse_id_list(&reply))
    }

    /// Owning session of a terminal, `None` if the terminal is gone
    pub fn session_for_terminal(
        &self,
        terminal: &TerminalId,
    ) -> Result<Option<SessionId>, GatewayError> {
        let reply =
            self.gateway
                .call(PATH_SESSIONS, SESSION_ID_FOR_TERMINAL, &[terminal.as_str()])?;
        Ok(non_sentinel(&reply).map(SessionId::from))
    }

    /// Open a new tab with the given layout, `None` if no id came back
    pub fn add_session(&self, split: SplitMode) -> Result<Option<SessionId>, GatewayError> {
        let method = match split {
            SplitMode::Horizontal => ADD_SESSION_TWO_HORIZONTAL,
            SplitMode::Vertical => ADD_SESSION_TWO_VERTICAL,
            SplitMode::Quad => ADD_SESSION_QUAD,
            SplitMode::None => ADD_SESSION,
        };
        let reply = self.gateway.call(PATH_SESSIONS, method, &[])?;
        Ok(non_sentinel(&reply).map(SessionId::from))
    }

    pub fn tab_title(&self, session: &SessionId) -> Result<String, GatewayError> {
        self.gateway.call(PATH_TABS, TAB_TITLE, &[session.as_str()])
    }

    pub fn set_tab_title(&self, session: &SessionId, title: &str) -> Option<GatewayError> {
        self.gateway
            .call_void(PATH_TABS, SET_TAB_TITLE, &[session.as_str(), title])
    }

    pub fn is_session_closable(&self, session: &SessionId) -> Result<bool, GatewayError> {
        let reply = self
            .gateway
            .call_required(PATH_SESSIONS, IS_SESSION_CLOSABLE, &[session.as_str()])?;
        parse_bool(&reply).ok_or_else(|| GatewayError::UnexpectedReply {
            method: short_name(IS_SESSION_CLOSABLE).to_string(),
            reply,
        })
    }

    pub fn set_session_closable(&self, session: &SessionId, closable: bool) -> Option<GatewayError> {
        self.gateway.call_void(
            PATH_SESSIONS,
            SET_SESSION_CLOSABLE,
            &[session.as_str(), bool_arg(closable)],
        )
    }

    pub fn set_monitor_silence(&self, session: &SessionId, enabled: bool) -> Option<GatewayError> {
        self.gateway.call_void(
            PATH_SESSIONS,
            SET_MONITOR_SILENCE,
            &[session.as_str(), bool_arg(enabled)],
        )
    }

    pub fn set_monitor_activity(&self, session: &SessionId, enabled: bool) -> Option<GatewayError> {
        self.gateway.call_void(
            PATH_SESSIONS,
            SET_MONITOR_ACTIVITY,
            &[session.as_str(), bool_arg(enabled)],
        )
    }

    pub fn set_keyboard_input(&self, session: &SessionId, enabled: bool) -> Option<GatewayError> {
        self.gateway.call_void(
            PATH_SESSIONS,
            SET_KEYBOARD_INPUT_ENABLED,
            &[session.as_str(), bool_arg(enabled)],
        )
    }

    /// Type `command` into a terminal and press enter
    pub fn run_command(&self, terminal: &TerminalId, command: &str) -> Option<GatewayError> {
        tracing::debug!("Execute command '{}' in terminal #{}", command, terminal);
        self.gateway.call_void(
            PATH_SESSIONS,
            RUN_COMMAND_IN_TERMINAL,
            &[terminal.as_str(), command],
        )
    }

    pub fn remove_terminal(&self, terminal: &TerminalId) -> Result<(), GatewayError> {
        self.gateway
            .call(PATH_SESSIONS, REMOVE_TERMINAL, &[terminal.as_str()])
            .map(drop)
    }

    /// Whether the main window is currently shown
    pub fn is_window_visible(&self) -> Result<bool, GatewayError> {
        // An empty reply falls through to the boolean parse
        let reply = self.gateway.call(PATH_MAIN_WINDOW, WIDGET_VISIBLE, &[])?;
        parse_bool(&reply).ok_or_else(|| GatewayError::UnexpectedReply {
            method: short_name(WIDGET_VISIBLE).to_string(),
            reply,
        })
    }

    pub fn toggle_window(&self) -> Option<GatewayError> {
        self.gateway.call_void(PATH_WINDOW, TOGGLE_WINDOW_STATE, &[])
    }
}

fn bool_arg(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
