//! yakctl: Command-line interface for the Yakuake terminal
//!
//! Provides the `yakctl` CLI for opening profiles, clearing sessions,
//! running commands in terminals and showing status.

pub mod commands;
pub mod output;
