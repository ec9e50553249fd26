//! yk-core: Core abstractions and configuration for yakctl
//!
//! This crate provides the profile model, YAML configuration loading,
//! the error taxonomy and the gateway used to talk to a running Yakuake
//! instance over D-Bus.

pub mod config;
pub mod error;
pub mod gateway;
pub mod requirements;
pub mod types;

pub use error::YkError;
pub use gateway::Gateway;
pub use types::{SessionId, TerminalId};
