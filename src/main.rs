use anyhow::Result;

use grid_predictor_client::cli::{Cli, Command};
use grid_predictor_client::config::settings::AppConfig;
use grid_predictor_client::{
    handle_analyze, handle_completions, handle_health, handle_predict, handle_upload, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(cli)
}

fn execute_command(cli: Cli) -> Result<()> {
    let config = AppConfig::new().with_base_url_override(cli.base_url);

    match &cli.command {
        Command::Predict { request } => handle_predict(&config, request),
        Command::Upload { file } => handle_upload(&config, file),
        Command::Analyze { file } => handle_analyze(&config, file),
        Command::Health => handle_health(&config),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
