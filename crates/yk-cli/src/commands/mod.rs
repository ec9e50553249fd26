//! CLI command implementations

mod clear;
mod exec;
mod profile;
mod status;

pub use clear::{clear_command, print_clear_report};
pub use exec::{exec_command, parse_terminal_ids};
pub use profile::{profile_list, profile_open, profile_show};
pub use status::status_command;
