use serde::{Deserialize, Serialize};
use std::fmt;

/// Player profile as entered in the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    /// Average buy-in
    pub abi: f64,
    /// Lifetime return on investment
    pub roi: f64,
    pub style: String,
    pub hours_per_week: f64,
    pub tournament_types: Vec<String>,
}

/// Tournament description
///
/// Also accepts the backend's French keys, which is what `/api/upload`
/// answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentData {
    #[serde(alias = "Nom")]
    pub name: String,
    #[serde(alias = "Mise")]
    pub buy_in: f64,
    #[serde(alias = "Prix")]
    pub prize_pool: f64,
    #[serde(alias = "Participants")]
    pub players: u32,
    #[serde(alias = "Date :")]
    pub start_time: String,
    #[serde(rename = "type", alias = "Type")]
    pub tournament_type: String,
}

/// One analysis call: a profile and the tournaments to evaluate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub player_profile: PlayerProfile,
    pub tournament_data: Vec<TournamentData>,
}

/// Backend verdict on how desirable a tournament is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    High,
    Medium,
    Low,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recommendation::High => "high",
            Recommendation::Medium => "medium",
            Recommendation::Low => "low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub tournament_id: String,
    pub tournament_name: String,
    pub buy_in: f64,
    pub predicted_roi: f64,
    pub confidence: f64,
    pub reasoning: String,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_tournaments: u32,
    pub recommended_tournaments: u32,
    pub average_predicted_roi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub results: Vec<AnalysisResult>,
    pub summary: AnalysisSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tournament_accepts_frontend_keys() {
        let value = json!({
            "name": "Sunday Million",
            "buyIn": 100.0,
            "prizePool": 1000000.0,
            "players": 5000,
            "startTime": "2024-01-01T18:00:00Z",
            "type": "MTT"
        });

        let tournament: TournamentData = serde_json::from_value(value).unwrap();

        assert_eq!(tournament.name, "Sunday Million");
        assert_eq!(tournament.players, 5000);
        assert_eq!(tournament.tournament_type, "MTT");
    }

    #[test]
    fn test_tournament_accepts_backend_keys() {
        let value = json!({
            "Nom": "Bounty Builder",
            "Mise": 11.0,
            "Participants": 820,
            "Date :": "2024-03-10 20:00",
            "Rake": 1.0,
            "Compétence": 70.0,
            "Compétence moyenne": 65.0,
            "Nb_jeux": 50,
            "Type": "mtt",
            "Prix": 8000.0
        });

        let tournament: TournamentData = serde_json::from_value(value).unwrap();

        assert_eq!(tournament.name, "Bounty Builder");
        assert_eq!(tournament.buy_in, 11.0);
        assert_eq!(tournament.prize_pool, 8000.0);
        assert_eq!(tournament.start_time, "2024-03-10 20:00");
    }

    #[test]
    fn test_response_parses_recommendation_tiers() {
        let value = json!({
            "results": [{
                "tournamentId": "t-1",
                "tournamentName": "Sunday Million",
                "buyIn": 100.0,
                "predictedRoi": 12.5,
                "confidence": 0.75,
                "reasoning": "Gros field, variance élevée",
                "recommendation": "medium"
            }],
            "summary": {
                "totalTournaments": 1,
                "recommendedTournaments": 0,
                "averagePredictedRoi": 12.5
            }
        });

        let response: AnalysisResponse = serde_json::from_value(value).unwrap();

        assert_eq!(response.results[0].recommendation, Recommendation::Medium);
        assert_eq!(response.summary.total_tournaments, 1);
    }

    #[test]
    fn test_unknown_recommendation_is_rejected() {
        let parsed = serde_json::from_value::<Recommendation>(json!("maybe"));
        assert!(parsed.is_err());
    }
}
