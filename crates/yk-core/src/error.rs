//! Core error types for yakctl

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the yakctl ecosystem
#[derive(Error, Debug)]
pub enum YkError {
    /// Remote call error
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Session error
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Profile lookup error
    #[error("{0}")]
    Profile(#[from] ProfileError),

    /// Startup requirement error
    #[error("{0}")]
    Requirement(#[from] RequirementError),
}

/// Errors raised while calling the remote Yakuake interface
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The external program could not be started
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external program exited with a failure status
    #[error("{method} failed (exit status {status}): {stderr}")]
    Failed {
        method: String,
        status: String,
        stderr: String,
    },

    /// The call succeeded but returned nothing where a value was required
    #[error("{0} returned no output")]
    EmptyReply(String),

    /// The reply could not be interpreted
    #[error("Unexpected reply from {method}: '{reply}'")]
    UnexpectedReply { method: String, reply: String },
}

/// Session-related errors
#[derive(Error, Debug)]
pub enum SessionError {
    /// The service did not hand back an id for a freshly opened tab
    #[error("Problem creating session for new tab '{0}'")]
    CreationFailed(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// Config file could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax error
    #[error("YAML syntax error in file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// YAML serialize error
    #[error("YAML serialize error: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// No home directory to resolve the default path against
    #[error("Unable to determine the home directory")]
    NoHomeDir,
}

/// Profile lookup errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProfileError {
    /// Id out of range or no profiles defined
    #[error("profile #{0} does not exist")]
    NotFound(i64),
}

/// Startup requirement errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequirementError {
    /// A required external program is not on PATH
    #[error("{0} command is missing - probably it is not installed")]
    DependencyMissing(String),
}
