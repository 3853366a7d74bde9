use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;

use crate::api::PredictorClient;
use crate::api::models::FileAnalysis;
use crate::config::settings::AppConfig;
use crate::domain::AnalysisRequest;
use crate::http::FileUpload;
use crate::services::report;

/// Runs one backend call per command and renders the outcome
pub struct AnalysisService {
    client: PredictorClient,
}

impl AnalysisService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = PredictorClient::new(&config.api).context("Failed to build backend client")?;
        Ok(Self { client })
    }

    pub async fn predict(&self, request_path: &Path) -> Result<String> {
        let request = Self::load_request(request_path).await?;
        info!(
            "Loaded {} tournaments from {}",
            request.tournament_data.len(),
            request_path.display()
        );

        let response = self
            .client
            .analyze_tournaments(&request)
            .await
            .context("Tournament analysis failed")?;

        Ok(report::render_analysis(&response))
    }

    pub async fn upload(&self, file_path: &Path) -> Result<String> {
        let file = FileUpload::from_path(file_path).await?;
        let tournaments = self
            .client
            .upload_tournaments(file)
            .await
            .context("Tournament upload failed")?;

        Ok(report::render_tournaments(&tournaments))
    }

    pub async fn analyze(&self, file_path: &Path) -> Result<String> {
        let file = FileUpload::from_path(file_path).await?;
        let value = self
            .client
            .analyze_file(file)
            .await
            .context("File analysis failed")?;

        match FileAnalysis::from_value(value.clone()) {
            Ok(analysis) => Ok(report::render_file_analysis(&analysis)),
            Err(e) => {
                warn!("Unrecognised analysis payload, printing raw JSON: {}", e);
                Ok(serde_json::to_string_pretty(&value)?)
            }
        }
    }

    pub async fn health(&self) -> Result<String> {
        let health = self
            .client
            .health_check()
            .await
            .context("Health check failed")?;
        let message = self.client.ping().await.context("API test call failed")?;

        Ok(report::render_health(&health, &message))
    }

    async fn load_request(path: &Path) -> Result<AnalysisRequest> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse analysis request in {}", path.display()))
    }
}
