//! Translation from frontend records to the backend's request shape.
//!
//! The mapping is one-way. Fields the backend needs but the frontend does
//! not model are filled with fixed placeholder values.

use crate::api::models::{BackendAnalysisRequest, BackendProfile, BackendTournament};
use crate::domain::models::{AnalysisRequest, PlayerProfile, TournamentData};

pub const PLACEHOLDER_RAKE: u32 = 0;
pub const PLACEHOLDER_SKILL: u32 = 70;
pub const PLACEHOLDER_AVERAGE_SKILL: u32 = 65;
pub const PLACEHOLDER_GAMES: u32 = 50;

pub fn tournament_to_backend(tournament: &TournamentData) -> BackendTournament {
    BackendTournament {
        name: tournament.name.clone(),
        buy_in: tournament.buy_in,
        players: tournament.players,
        start_time: tournament.start_time.clone(),
        rake: PLACEHOLDER_RAKE,
        skill: PLACEHOLDER_SKILL,
        average_skill: PLACEHOLDER_AVERAGE_SKILL,
        games: PLACEHOLDER_GAMES,
        tournament_type: tournament.tournament_type.clone(),
        prize_pool: tournament.prize_pool,
    }
}

/// `hours_per_week` is not sent; `heures` carries the tournament types.
pub fn profile_to_backend(profile: &PlayerProfile) -> BackendProfile {
    BackendProfile {
        abi: profile.abi,
        roi_total: profile.roi,
        style: profile.style.clone(),
        heures: profile.tournament_types.clone(),
    }
}

pub fn request_to_backend(request: &AnalysisRequest) -> BackendAnalysisRequest {
    BackendAnalysisRequest {
        profil_joueur: profile_to_backend(&request.player_profile),
        tournois: request
            .tournament_data
            .iter()
            .map(tournament_to_backend)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn sample_profile() -> PlayerProfile {
        PlayerProfile {
            abi: 50.0,
            roi: 10.0,
            style: "LAG".to_string(),
            hours_per_week: 20.0,
            tournament_types: vec!["MTT".to_string()],
        }
    }

    fn sample_tournament(name: &str) -> TournamentData {
        TournamentData {
            name: name.to_string(),
            buy_in: 100.0,
            prize_pool: 1_000_000.0,
            players: 5000,
            start_time: "2024-01-01T18:00:00Z".to_string(),
            tournament_type: "MTT".to_string(),
        }
    }

    /// Money fields go out as floats (`50.0`); compare numbers by value.
    fn as_floats(value: Value) -> Value {
        match value {
            Value::Number(n) => n.as_f64().map(Value::from).unwrap_or(Value::Number(n)),
            Value::Array(items) => Value::Array(items.into_iter().map(as_floats).collect()),
            Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, as_floats(v))).collect()),
            other => other,
        }
    }

    #[test]
    fn test_sunday_million_scenario() {
        let request = AnalysisRequest {
            player_profile: sample_profile(),
            tournament_data: vec![sample_tournament("Sunday Million")],
        };

        let body = serde_json::to_value(request_to_backend(&request)).unwrap();

        let expected = json!({
            "profil_joueur": {
                "ABI": 50,
                "ROI_total": 10,
                "Style": "LAG",
                "heures": ["MTT"]
            },
            "tournois": [{
                "Nom": "Sunday Million",
                "Mise": 100,
                "Participants": 5000,
                "Date :": "2024-01-01T18:00:00Z",
                "Rake": 0,
                "Compétence": 70,
                "Compétence moyenne": 65,
                "Nb_jeux": 50,
                "Type": "MTT",
                "Prix": 1000000
            }]
        });
        assert_eq!(as_floats(body), as_floats(expected));
    }

    #[test]
    fn test_tournament_keys_are_exact() {
        let value = serde_json::to_value(tournament_to_backend(&sample_tournament("Daily"))).unwrap();
        let mut keys: Vec<&str> = match &value {
            Value::Object(map) => map.keys().map(String::as_str).collect(),
            other => panic!("expected object, got {other}"),
        };

        let mut expected = vec![
            "Nom",
            "Mise",
            "Participants",
            "Date :",
            "Rake",
            "Compétence",
            "Compétence moyenne",
            "Nb_jeux",
            "Type",
            "Prix",
        ];
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_tournament_key_order_on_the_wire() {
        let text = serde_json::to_string(&tournament_to_backend(&sample_tournament("Daily"))).unwrap();

        let positions: Vec<usize> = ["\"Nom\"", "\"Mise\"", "\"Participants\"", "\"Date :\"", "\"Rake\"", "\"Prix\""]
            .iter()
            .map(|key| text.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_placeholders_ignore_input() {
        let mut cheap = sample_tournament("Micro");
        cheap.buy_in = 0.5;
        cheap.players = 12;

        let mapped = tournament_to_backend(&cheap);

        assert_eq!(mapped.rake, 0);
        assert_eq!(mapped.skill, 70);
        assert_eq!(mapped.average_skill, 65);
        assert_eq!(mapped.games, 50);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let tournament = sample_tournament("Sunday Million");
        assert_eq!(tournament_to_backend(&tournament), tournament_to_backend(&tournament));

        let profile = sample_profile();
        assert_eq!(profile_to_backend(&profile), profile_to_backend(&profile));
    }

    #[test]
    fn test_heures_carries_tournament_types() {
        let mut profile = sample_profile();
        profile.hours_per_week = 35.0;
        profile.tournament_types = vec!["MTT".to_string(), "KO".to_string(), "SnG".to_string()];

        let mapped = profile_to_backend(&profile);

        assert_eq!(mapped.heures, profile.tournament_types);
        let value = serde_json::to_value(&mapped).unwrap();
        assert_eq!(value["heures"], json!(["MTT", "KO", "SnG"]));
        assert!(value.get("hoursPerWeek").is_none());
    }

    #[test]
    fn test_request_preserves_tournament_order() {
        let names = ["Alpha", "Bravo", "Charlie", "Delta"];
        let request = AnalysisRequest {
            player_profile: sample_profile(),
            tournament_data: names.iter().map(|name| sample_tournament(name)).collect(),
        };

        let mapped = request_to_backend(&request);

        assert_eq!(mapped.tournois.len(), names.len());
        let mapped_names: Vec<&str> = mapped.tournois.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(mapped_names, names);
    }

    #[test]
    fn test_empty_request_maps_to_empty_tournois() {
        let request = AnalysisRequest {
            player_profile: sample_profile(),
            tournament_data: Vec::new(),
        };

        let value = serde_json::to_value(request_to_backend(&request)).unwrap();

        assert_eq!(value["tournois"], json!([]));
    }
}
