use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trello_core::AppConfig;

#[derive(Parser)]
#[command(name = "trello-tui")]
#[command(about = "Browse a Trello board from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of the board to show (or set TRELLO_BOARD)
    #[arg(short, long, env = "TRELLO_BOARD")]
    pub board: Option<String>,

    /// Seconds to wait between refreshes
    #[arg(short, long, value_name = "SECONDS")]
    pub refresh: Option<u64>,

    /// Seconds before a refresh is abandoned
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Trello username whose boards are searched
    #[arg(long, env = "TRELLO_USER")]
    pub user: Option<String>,

    /// Trello API key
    #[arg(long, env = "TRELLO_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Trello API token
    #[arg(long, env = "TRELLO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Where the last known board is saved between runs
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Neither restore nor save the last known board
    #[arg(long, conflicts_with = "snapshot")]
    pub no_snapshot: bool,

    /// Append logs to this file (or set TRELLO_TUI_LOG)
    #[arg(long, value_name = "FILE", env = "TRELLO_TUI_LOG")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// The command line as a config layer to put over the config file.
    pub fn config_overrides(&self) -> AppConfig {
        AppConfig {
            board: self.board.clone(),
            refresh_interval_secs: self.refresh,
            fetch_timeout_secs: self.timeout,
            user: self.user.clone(),
            key: self.key.clone(),
            token: self.token.clone(),
            snapshot_path: self.snapshot.clone(),
            persist_snapshot: self.no_snapshot.then_some(false),
        }
    }
}
