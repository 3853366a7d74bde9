use colored::{ColoredString, Colorize};
use std::fmt::Write;

use crate::api::models::{FileAnalysis, HealthStatus, ServiceMessage};
use crate::domain::{AnalysisResponse, Recommendation, TournamentData};

fn tier_label(recommendation: Recommendation) -> ColoredString {
    let label = recommendation.to_string();
    match recommendation {
        Recommendation::High => label.green().bold(),
        Recommendation::Medium => label.yellow(),
        Recommendation::Low => label.red(),
    }
}

pub fn render_analysis(response: &AnalysisResponse) -> String {
    let mut out = String::new();

    for result in &response.results {
        let _ = writeln!(
            out,
            "{:<32} buy-in {:>9.2}  ROI {:>7.2}%  conf {:>4.0}%  [{}]",
            result.tournament_name,
            result.buy_in,
            result.predicted_roi,
            result.confidence * 100.0,
            tier_label(result.recommendation)
        );
        if !result.reasoning.is_empty() {
            let _ = writeln!(out, "    {}", result.reasoning.dimmed());
        }
    }

    let summary = &response.summary;
    let _ = writeln!(
        out,
        "{} {}/{} recommended, average predicted ROI {:.2}%",
        "Summary:".bold(),
        summary.recommended_tournaments,
        summary.total_tournaments,
        summary.average_predicted_roi
    );
    out
}

pub fn render_tournaments(tournaments: &[TournamentData]) -> String {
    let mut out = String::new();
    for t in tournaments {
        let _ = writeln!(
            out,
            "{:<32} {:<6} buy-in {:>9.2}  prize pool {:>12.2}  players {:>6}  {}",
            t.name, t.tournament_type, t.buy_in, t.prize_pool, t.players, t.start_time
        );
    }
    let _ = writeln!(out, "{} tournaments", tournaments.len());
    out
}

pub fn render_file_analysis(analysis: &FileAnalysis) -> String {
    let mut out = String::new();
    for row in &analysis.results {
        let probability = format!("{:>5.1}%", row.profitable_probability * 100.0);
        let probability = if row.profitable_probability > 0.5 {
            probability.green()
        } else {
            probability.red()
        };
        let _ = writeln!(
            out,
            "{:<32} buy-in {:>9.2}  rake {:>6.2}  players {:>6.0}  profitable {}  {}",
            row.name, row.buy_in, row.rake, row.players, probability, row.reason
        );
    }

    let summary = &analysis.summary;
    let _ = writeln!(
        out,
        "{} {}/{} recommended, probability range {:.2} to {:.2}",
        "Summary:".bold(),
        summary.recommended,
        summary.total_tournaments,
        summary.min_probability,
        summary.max_probability
    );
    out
}

pub fn render_health(health: &HealthStatus, message: &ServiceMessage) -> String {
    let status = if health.is_ok() {
        health.status.green()
    } else {
        health.status.red()
    };
    format!(
        "status: {}\nmodel loaded: {}\n{}\n",
        status, health.model_loaded, message.message
    )
}
