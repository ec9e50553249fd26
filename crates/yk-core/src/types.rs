//! Core domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reply Yakuake uses for "no such session"
pub const ABSENT_SENTINEL: &str = "-1";

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new id
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the raw id string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

opaque_id!(
    /// Identifier of a Yakuake session (one tab)
    SessionId
);

opaque_id!(
    /// Identifier of a single terminal inside a session
    TerminalId
);

/// Split layout requested for a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// One terminal
    #[default]
    None,
    /// Two terminals side by side
    Horizontal,
    /// Two terminals stacked
    Vertical,
    /// Four terminals
    Quad,
}

impl SplitMode {
    /// Interpret the free-text `split` value of a tab.
    ///
    /// Matching is case-insensitive; anything unknown opens a single terminal.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "left-right" | "horizontal" | "lr" => SplitMode::Horizontal,
            "top-bottom" | "vertical" | "tb" => SplitMode::Vertical,
            "quad" | "qu" => SplitMode::Quad,
            _ => SplitMode::None,
        }
    }

    /// Number of terminals the service creates for this layout
    pub fn terminal_count(self) -> usize {
        match self {
            SplitMode::None => 1,
            SplitMode::Horizontal | SplitMode::Vertical => 2,
            SplitMode::Quad => 4,
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitMode::None => write!(f, "none"),
            SplitMode::Horizontal => write!(f, "horizontal"),
            SplitMode::Vertical => write!(f, "vertical"),
            SplitMode::Quad => write!(f, "quad"),
        }
    }
}

/// Map the absent sentinel and blank replies to `None`
pub fn non_sentinel(reply: &str) -> Option<&str> {
    let reply = reply.trim();
    if reply.is_empty() || reply == ABSENT_SENTINEL {
        None
    } else {
        Some(reply)
    }
}

/// Split a comma-separated id list reply, dropping blanks
pub fn parse_id_list<T: From<String>>(reply: &str) -> Vec<T> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| T::from(id.to_string()))
        .collect()
}

/// Parse a textual boolean reply
pub fn parse_bool(reply: &str) -> Option<bool> {
    match reply.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
