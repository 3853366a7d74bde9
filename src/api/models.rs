use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ApiResult;

// --- Request shapes expected by the prediction backend ---

/// Tournament row in backend shape
///
/// Field order is the key order on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackendTournament {
    #[serde(rename = "Nom")]
    pub name: String,
    #[serde(rename = "Mise")]
    pub buy_in: f64,
    #[serde(rename = "Participants")]
    pub players: u32,
    #[serde(rename = "Date :")]
    pub start_time: String,
    #[serde(rename = "Rake")]
    pub rake: u32,
    #[serde(rename = "Compétence")]
    pub skill: u32,
    #[serde(rename = "Compétence moyenne")]
    pub average_skill: u32,
    #[serde(rename = "Nb_jeux")]
    pub games: u32,
    #[serde(rename = "Type")]
    pub tournament_type: String,
    #[serde(rename = "Prix")]
    pub prize_pool: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackendProfile {
    #[serde(rename = "ABI")]
    pub abi: f64,
    #[serde(rename = "ROI_total")]
    pub roi_total: f64,
    #[serde(rename = "Style")]
    pub style: String,
    /// Receives the tournament type labels, not the weekly hours
    pub heures: Vec<String>,
}

/// Body of `POST /api/predict`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackendAnalysisRequest {
    pub profil_joueur: BackendProfile,
    pub tournois: Vec<BackendTournament>,
}

// --- Service endpoints ---

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// `GET /` and `GET /api/test`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceMessage {
    pub message: String,
}

// --- File analysis view ---

/// Typed view over the `/api/analyze` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub results: Vec<FileAnalysisRow>,
    pub summary: FileAnalysisSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAnalysisRow {
    #[serde(rename = "Nom")]
    pub name: String,
    #[serde(rename = "Mise")]
    pub buy_in: f64,
    #[serde(rename = "Rake", default)]
    pub rake: f64,
    #[serde(rename = "Participants")]
    pub players: f64,
    #[serde(rename = "proba_profitable")]
    pub profitable_probability: f64,
    #[serde(rename = "raison", default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAnalysisSummary {
    #[serde(rename = "nb_recommandees")]
    pub recommended: u32,
    #[serde(rename = "max_proba")]
    pub max_probability: f64,
    #[serde(rename = "min_proba")]
    pub min_probability: f64,
    #[serde(rename = "total_tournois")]
    pub total_tournaments: u32,
}

impl FileAnalysis {
    /// Interpret an untyped `analyze_file` payload
    pub fn from_value(value: Value) -> ApiResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
