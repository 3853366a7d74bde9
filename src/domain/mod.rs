pub mod models;

pub use models::{
    AnalysisRequest, AnalysisResponse, AnalysisResult, AnalysisSummary, PlayerProfile,
    Recommendation, TournamentData,
};
