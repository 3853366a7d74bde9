use crate::api::mapping;
use crate::api::models::{HealthStatus, ServiceMessage};
use crate::config::settings::ApiSettings;
use crate::domain::models::{AnalysisRequest, AnalysisResponse, TournamentData};
use crate::errors::ApiResult;
use crate::http::{FileUpload, JsonClient, RequestOptions};
use log::info;
use serde_json::Value;

pub const PREDICT_ENDPOINT: &str = "/api/predict";
pub const UPLOAD_ENDPOINT: &str = "/api/upload";
pub const ANALYZE_ENDPOINT: &str = "/api/analyze";
pub const HEALTH_ENDPOINT: &str = "/health";
pub const TEST_ENDPOINT: &str = "/api/test";
pub const ROOT_ENDPOINT: &str = "/";

/// Client for the tournament prediction backend
#[derive(Clone)]
pub struct PredictorClient {
    client: JsonClient,
}

impl PredictorClient {
    pub fn new(settings: &ApiSettings) -> ApiResult<Self> {
        let client = JsonClient::new(&settings.base_url, &settings.user_agent)?;
        Ok(Self { client })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Translate the request to backend shape and ask for predictions.
    ///
    /// The response is parsed as-is, without translating it back.
    pub async fn analyze_tournaments(
        &self,
        request: &AnalysisRequest,
    ) -> ApiResult<AnalysisResponse> {
        info!(
            "Requesting analysis of {} tournaments from {}",
            request.tournament_data.len(),
            self.base_url()
        );

        let body = mapping::request_to_backend(request);
        let options = RequestOptions::post_json(&body)?;
        self.client.send(PREDICT_ENDPOINT, options).await
    }

    /// Upload a tournament file and get back the rows the backend read from it
    pub async fn upload_tournaments(&self, file: FileUpload) -> ApiResult<Vec<TournamentData>> {
        info!("Uploading {} ({} bytes)", file.file_name, file.bytes.len());

        let options = Self::multipart_options(file)?;
        let tournaments: Vec<TournamentData> = self.client.send(UPLOAD_ENDPOINT, options).await?;

        info!("Backend returned {} tournaments", tournaments.len());
        Ok(tournaments)
    }

    /// Upload a file for analysis; the response shape is not modelled
    pub async fn analyze_file(&self, file: FileUpload) -> ApiResult<Value> {
        info!("Sending {} for analysis", file.file_name);

        let options = Self::multipart_options(file)?;
        self.client.send(ANALYZE_ENDPOINT, options).await
    }

    pub async fn health_check(&self) -> ApiResult<HealthStatus> {
        self.client.send(HEALTH_ENDPOINT, RequestOptions::get()).await
    }

    pub async fn ping(&self) -> ApiResult<ServiceMessage> {
        self.client.send(TEST_ENDPOINT, RequestOptions::get()).await
    }

    /// Service banner served at the base URL
    pub async fn root(&self) -> ApiResult<ServiceMessage> {
        self.client.send(ROOT_ENDPOINT, RequestOptions::get()).await
    }

    // --- Helper Methods ---

    fn multipart_options(file: FileUpload) -> ApiResult<RequestOptions> {
        Ok(RequestOptions::post_multipart(file.into_form()?))
    }
}
