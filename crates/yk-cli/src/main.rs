//! yakctl CLI
//!
//! Controls a running Yakuake over D-Bus:
//! - Profiles (predefined tabs, splits and commands) from `~/.yakctl.yml`
//! - Clearing of sessions and terminals
//! - Running commands in many terminals at once

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yakctl::commands;
use yakctl::output::{print_error, print_info};
use yk_core::config::{self, ConfigFile};
use yk_core::gateway::{methods, QdbusGateway};
use yk_core::requirements::check_requirements;
use yk_orchestrator::SessionOrchestrator;

#[derive(Parser)]
#[command(name = "yakctl")]
#[command(author, version, about = "Control the yakuake terminal and your terminal sessions")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (default: ~/.yakctl.yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// qdbus executable used to reach yakuake
    #[arg(long, global = true, env = "YAKCTL_QDBUS", default_value = methods::DBUS_APP)]
    qdbus: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clear all sessions and terminals
    #[command(alias = "c")]
    Clear {
        /// Force deletion of ALL tabs, including protected ones
        #[arg(long)]
        force: bool,
    },

    /// Manage defined profiles, default: list available profiles
    #[command(alias = "p")]
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },

    /// Execute a command in all or specific terminals
    #[command(alias = "e")]
    Exec {
        /// Ids of terminals, separated by comma and without space
        #[arg(short, long, value_delimiter = ',')]
        terminal: Vec<String>,
        /// Command to be executed
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// List status (sessions, terminals) of the current yakuake instance
    #[command(alias = "s")]
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List defined profiles
    #[command(alias = "l")]
    List,
    /// Show all details of a defined profile
    #[command(alias = "s")]
    Show {
        #[arg(allow_negative_numbers = true)]
        profile_id: i64,
    },
    /// Open a defined profile
    #[command(alias = "o")]
    Open {
        #[arg(allow_negative_numbers = true)]
        profile_id: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    if cli.verbose > 0 {
        print_info(&format!(
            "Using configuration file at: '{}'",
            config_path.display()
        ));
    }

    let configuration = match config::load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            print_error(&format!(
                "Invalid configuration detected in configuration file '{}'",
                config_path.display()
            ));
            return Err(e).context("yakctl is unable to start");
        }
    };

    tracing::debug!(
        "Loaded {} profile(s) from {}",
        configuration.profiles.len(),
        config_path.display()
    );

    let gateway = QdbusGateway::with_program(cli.qdbus.clone());

    match cli.command {
        Commands::Clear { force } => {
            let orchestrator = connect(&gateway)?;
            commands::clear_command(&orchestrator, force)?;
        }

        Commands::Profile { action } => match action.unwrap_or(ProfileAction::List) {
            ProfileAction::List => {
                commands::profile_list(&configuration)?;
            }
            ProfileAction::Show { profile_id } => {
                commands::profile_show(&configuration, profile_id)?;
            }
            ProfileAction::Open { profile_id } => {
                open_profile(&gateway, &configuration, profile_id, cli.verbose > 0)?;
            }
        },

        Commands::Exec { terminal, command } => {
            let command = command.join(" ");
            if command.trim().is_empty() {
                print_error("Invalid empty command input detected");
                anyhow::bail!("empty command");
            }
            let terminals = commands::parse_terminal_ids(&terminal);
            let orchestrator = connect(&gateway)?;
            commands::exec_command(&orchestrator, &command, &terminals)?;
        }

        Commands::Status { json } => {
            let orchestrator = connect(&gateway)?;
            commands::status_command(&orchestrator, json)?;
        }
    }

    Ok(())
}

/// Check requirements and hand out an orchestrator over `gateway`
fn connect(gateway: &QdbusGateway) -> Result<SessionOrchestrator<&QdbusGateway>> {
    if let Err(e) = check_requirements(gateway) {
        print_error(&e.to_string());
        print_error("Problems detected. yakctl is unable to start.");
        return Err(e.into());
    }
    Ok(SessionOrchestrator::new(gateway))
}

fn open_profile(
    gateway: &QdbusGateway,
    configuration: &ConfigFile,
    profile_id: i64,
    verbose: bool,
) -> Result<()> {
    // An unknown id is reported before yakuake is touched
    if let Err(e) = configuration.profile(profile_id) {
        print_error(&e.to_string());
        return Err(e.into());
    }
    let orchestrator = connect(gateway)?;
    commands::profile_open(&orchestrator, configuration, profile_id, verbose)
}
