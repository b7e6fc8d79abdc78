//! Operator command line for AgentDesk.
//!
//! # Responsibility
//! - Expose roster management and list distribution over a SQLite roster.
//! - Keep output machine-readable (JSON) for anything beyond the `ping` smoke check.

use agentdesk_core::db::open_db;
use agentdesk_core::{
    core_version, dashboard_stats, default_log_level, init_logging, ping, ContactRecord,
    RosterService, Session, SqliteAgentRepository, UploadService,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "agentdesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Register agents and distribute contact lists among them", long_about = None)]
struct Cli {
    /// Roster database file
    #[arg(long, global = true, env = "AGENTDESK_DB", default_value = "agentdesk.sqlite3")]
    db: PathBuf,

    /// Operator session token
    #[arg(long, global = true, env = "AGENTDESK_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Absolute directory for rolling log files (logging is off when unset)
    #[arg(long, global = true, env = "AGENTDESK_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true, env = "AGENTDESK_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print core linkage info
    Ping,

    #[command(flatten)]
    Roster(RosterCommand),
}

// Commands that need a session and the roster database.
#[derive(Subcommand)]
enum RosterCommand {
    /// Manage the agent roster
    Agent {
        #[command(subcommand)]
        action: AgentAction,
    },

    /// Distribute a parsed contact list across the current roster
    Distribute {
        /// Name of the uploaded file (csv, xls or xlsx)
        #[arg(long)]
        file_name: String,

        /// JSON array of parsed contact records
        #[arg(long)]
        records: PathBuf,
    },

    /// Print dashboard counters as JSON
    ///
    /// `lists_uploaded` counts uploads made by this process only; each
    /// invocation starts from zero, so a standalone `stats` reports 0.
    Stats,
}

#[derive(Subcommand)]
enum AgentAction {
    /// Register a new agent
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
    /// List agents in registration order
    List,
    /// Remove an agent by ID (unknown IDs are ignored)
    Remove { id: Uuid },
}

fn main() -> Result<()> {
    let Cli {
        db,
        token,
        log_dir,
        log_level,
        command,
    } = Cli::parse();

    if let Some(log_dir) = log_dir.as_deref() {
        let level = log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    match command {
        Commands::Ping => {
            println!("agentdesk_core ping={}", ping());
            println!("agentdesk_core version={}", core_version());
            Ok(())
        }
        Commands::Roster(command) => run_roster(&db, token.as_deref(), command),
    }
}

fn run_roster(db: &Path, token: Option<&str>, command: RosterCommand) -> Result<()> {
    let session = Session::from_token(token).context("use --token or AGENTDESK_TOKEN")?;
    let conn = open_db(db)
        .with_context(|| format!("failed to open roster database `{}`", db.display()))?;
    let mut roster = RosterService::load(SqliteAgentRepository::new(&conn))
        .context("failed to load roster")?;
    let mut uploads = UploadService::new();

    match command {
        RosterCommand::Agent { action } => match action {
            AgentAction::Add { name, email, phone } => {
                let agent = roster.add_agent(&session, &name, &email, &phone)?;
                print_json(&agent)?;
            }
            AgentAction::List => print_json(&roster.list_agents(&session))?,
            AgentAction::Remove { id } => {
                let removed = roster.remove_agent(&session, id)?;
                println!("removed={removed}");
            }
        },
        RosterCommand::Distribute { file_name, records } => {
            let raw = std::fs::read_to_string(&records)
                .with_context(|| format!("failed to read records `{}`", records.display()))?;
            let records: Vec<ContactRecord> =
                serde_json::from_str(&raw).context("records file must be a JSON array")?;

            let agents = roster.list_agents(&session);
            let distribution = uploads.upload(&session, &file_name, &records, &agents)?;
            print_json(distribution)?;
        }
        RosterCommand::Stats => print_json(&dashboard_stats(&roster, &uploads))?,
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, RosterCommand};
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_definitions_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ping_parses_without_session_arguments() {
        let cli = Cli::try_parse_from(["agentdesk", "ping"]).unwrap();
        assert!(matches!(cli.command, Commands::Ping));
    }

    #[test]
    fn roster_commands_stay_top_level() {
        let cli = Cli::try_parse_from(["agentdesk", "stats", "--token", "demo-token"]).unwrap();
        assert!(matches!(cli.command, Commands::Roster(RosterCommand::Stats)));

        let cli = Cli::try_parse_from([
            "agentdesk",
            "distribute",
            "--file-name",
            "leads.csv",
            "--records",
            "leads.json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Roster(RosterCommand::Distribute { .. })
        ));
    }

    #[test]
    fn stats_help_says_upload_count_is_per_process() {
        let mut command = Cli::command();
        let help = command
            .find_subcommand_mut("stats")
            .unwrap()
            .render_long_help()
            .to_string();
        assert!(help.contains("this process only"));
    }
}
