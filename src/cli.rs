use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "SmartPokerGrid prediction backend client")]
pub struct Cli {
    /// Backend base URL (defaults to $PUBLIC_API_URL, then http://localhost:8000)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Send a player profile and tournaments (JSON file) for prediction
    Predict {
        /// Analysis request in frontend shape
        request: PathBuf,
    },
    /// Upload a tournament file and list the tournaments read from it
    Upload { file: PathBuf },
    /// Upload a tournament history file for analysis
    Analyze { file: PathBuf },
    /// Check that the backend is up
    Health,
    /// Print shell completions
    Completions { shell: Shell },
}
