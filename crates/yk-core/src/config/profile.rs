//! Profile and tab configuration

use serde::{Deserialize, Serialize};

use crate::types::SplitMode;

fn is_false(value: &bool) -> bool {
    !*value
}

/// A named collection of tabs that can be opened in one go
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Human-readable profile name
    pub name: String,

    /// Tabs to open, in order
    #[serde(default)]
    pub tabs: Vec<Tab>,

    /// Close the terminals that were open before the profile was loaded
    #[serde(default, rename = "clear", skip_serializing_if = "is_false")]
    pub clear_all: bool,

    /// Force-close protected terminals while clearing
    #[serde(default, rename = "force", skip_serializing_if = "is_false")]
    pub force_clear: bool,
}

/// A single tab of a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Title given to the tab
    pub name: String,

    /// Commands run in every terminal of the tab
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,

    /// Free-text split layout, see [`SplitMode::parse`]
    #[serde(default, rename = "split", skip_serializing_if = "String::is_empty")]
    pub split_mode: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terminal1: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terminal2: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terminal3: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terminal4: Vec<String>,

    /// Mark the session as not closable
    #[serde(default, skip_serializing_if = "is_false")]
    pub protected: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub monitor_silence: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub monitor_activity: bool,

    /// Disable keyboard input for the session
    #[serde(default, rename = "disableInput", skip_serializing_if = "is_false")]
    pub disable_keyboard_input: bool,
}

impl Tab {
    /// Create a tab with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parsed split layout
    pub fn split(&self) -> SplitMode {
        SplitMode::parse(&self.split_mode)
    }

    /// Per-terminal command lists, indexed by terminal slot
    pub fn slot_commands(&self) -> [&[String]; 4] {
        [
            &self.terminal1,
            &self.terminal2,
            &self.terminal3,
            &self.terminal4,
        ]
    }
}
