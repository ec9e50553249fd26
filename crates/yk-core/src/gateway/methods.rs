//! D-Bus service, object paths and methods exposed by Yakuake
//!
//! A call is `qdbus <service> <path> <method> [args...]`.

pub const DBUS_APP: &str = "qdbus";
pub const DBUS_SERVICE: &str = "org.kde.yakuake";

// Object paths
pub const PATH_SESSIONS: &str = "/yakuake/sessions";
pub const PATH_TABS: &str = "/yakuake/tabs";
pub const PATH_WINDOW: &str = "/yakuake/window";
pub const PATH_MAIN_WINDOW: &str = "/yakuake/MainWindow_1";

// /yakuake/sessions
pub const ADD_SESSION: &str = "org.kde.yakuake.addSession";
pub const ADD_SESSION_TWO_HORIZONTAL: &str = "org.kde.yakuake.addSessionTwoHorizontal";
pub const ADD_SESSION_TWO_VERTICAL: &str = "org.kde.yakuake.addSessionTwoVertical";
pub const ADD_SESSION_QUAD: &str = "org.kde.yakuake.addSessionQuad";
pub const SET_MONITOR_SILENCE: &str = "org.kde.yakuake.setSessionMonitorSilenceEnabled";
pub const SET_MONITOR_ACTIVITY: &str = "org.kde.yakuake.setSessionMonitorActivityEnabled";
pub const SET_KEYBOARD_INPUT_ENABLED: &str = "org.kde.yakuake.setSessionKeyboardInputEnabled";
pub const TERMINAL_ID_LIST: &str = "org.kde.yakuake.terminalIdList";
pub const TERMINAL_IDS_FOR_SESSION: &str = "org.kde.yakuake.terminalIdsForSessionId";
pub const REMOVE_TERMINAL: &str = "org.kde.yakuake.removeTerminal";
pub const SESSION_ID_FOR_TERMINAL: &str = "org.kde.yakuake.sessionIdForTerminalId";
pub const SESSION_ID_LIST: &str = "org.kde.yakuake.sessionIdList";
pub const IS_SESSION_CLOSABLE: &str = "org.kde.yakuake.isSessionClosable";
pub const SET_SESSION_CLOSABLE: &str = "org.kde.yakuake.setSessionClosable";
pub const RUN_COMMAND_IN_TERMINAL: &str = "org.kde.yakuake.runCommandInTerminal";
pub const ACTIVE_SESSION_ID: &str = "org.kde.yakuake.activeSessionId";

// /yakuake/tabs
pub const TAB_TITLE: &str = "org.kde.yakuake.tabTitle";
pub const SET_TAB_TITLE: &str = "org.kde.yakuake.setTabTitle";

// /yakuake/window
pub const TOGGLE_WINDOW_STATE: &str = "org.kde.yakuake.toggleWindowState";

// /yakuake/MainWindow_1
pub const WIDGET_VISIBLE: &str = "org.qtproject.Qt.QWidget.visible";

pub const PING: &str = "org.freedesktop.DBus.Peer.Ping";

/// Last dotted component of a method, e.g. `addSessionQuad`
pub fn short_name(method: &str) -> &str {
    method.rsplit('.').next().unwrap_or(method)
}
