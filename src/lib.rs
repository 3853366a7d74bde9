pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::future::Future;
use std::path::Path;

use crate::config::settings::AppConfig;
use crate::services::analysis::AnalysisService;

pub use api::PredictorClient;
pub use config::ApiSettings;
pub use errors::{ApiError, ApiResult};
pub use http::FileUpload;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_predict(config: &AppConfig, request: &Path) -> Result<()> {
    run_service(config, |service| async move { service.predict(request).await })
}

pub fn handle_upload(config: &AppConfig, file: &Path) -> Result<()> {
    run_service(config, |service| async move { service.upload(file).await })
}

pub fn handle_analyze(config: &AppConfig, file: &Path) -> Result<()> {
    run_service(config, |service| async move { service.analyze(file).await })
}

pub fn handle_health(config: &AppConfig) -> Result<()> {
    run_service(config, |service| async move { service.health().await })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn run_service<F, Fut>(config: &AppConfig, call: F) -> Result<()>
where
    F: FnOnce(AnalysisService) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let runtime = tokio::runtime::Runtime::new()?;
    let output = runtime.block_on(async {
        let service = AnalysisService::new(config)?;
        call(service).await
    })?;
    print!("{output}");
    Ok(())
}
