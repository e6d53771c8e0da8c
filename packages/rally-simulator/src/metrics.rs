//! Metrics collection and output for simulated matches.

use serde::Serialize;

use crate::simulator::{Competitor, GameRecord, MatchResult, SimulatorConfig};

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: RunConfig,
    pub result: MatchResultMetrics,
    pub games: Vec<GameRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub a_strength: f64,
    pub undo_rate: f64,
    pub total_matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub winner: Competitor,
    pub games_a: u32,
    pub games_b: u32,
    pub points_a: u32,
    pub points_b: u32,
    pub total_rallies: u32,
    pub deuce_games: u32,
    pub capped_games: u32,
    pub undos: u32,
    pub exchanges: u32,
    pub duration_ms: f64,
}

/// Flat per-match row for the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: u32,
    pub seed: u64,
    pub winner: Competitor,
    pub games_a: u32,
    pub games_b: u32,
    pub points_a: u32,
    pub points_b: u32,
    pub total_rallies: u32,
    pub undos: u32,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(m: &MatchMetrics) -> Self {
        Self {
            match_id: m.match_id,
            seed: m.seed,
            winner: m.result.winner,
            games_a: m.result.games_a,
            games_b: m.result.games_b,
            points_a: m.result.points_a,
            points_b: m.result.points_b,
            total_rallies: m.result.total_rallies,
            undos: m.result.undos,
        }
    }
}

// A game went to deuce if both sides reached 20.
fn is_deuce(game: &GameRecord) -> bool {
    game.score_a >= 20 && game.score_b >= 20
}

fn is_capped(game: &GameRecord) -> bool {
    game.score_a.max(game.score_b) == 30 && game.score_a.abs_diff(game.score_b) == 1
}

/// Build metrics from a match result.
pub fn build_match_metrics(
    match_id: u32,
    seed: u64,
    config: &SimulatorConfig,
    total_matches: u32,
    result: &MatchResult,
    duration_ms: f64,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let points_a = result.games.iter().map(|g| g.score_a).sum();
    let points_b = result.games.iter().map(|g| g.score_b).sum();
    let deuce_games = result.games.iter().filter(|g| is_deuce(g)).count() as u32;
    let capped_games = result.games.iter().filter(|g| is_capped(g)).count() as u32;

    MatchMetrics {
        match_id,
        seed,
        timestamp,
        config: RunConfig {
            a_strength: config.a_strength,
            undo_rate: config.undo_rate,
            total_matches,
        },
        result: MatchResultMetrics {
            winner: result.winner,
            games_a: result.games_a,
            games_b: result.games_b,
            points_a,
            points_b,
            total_rallies: result.total_rallies,
            deuce_games,
            capped_games,
            undos: result.undos,
            exchanges: result.exchanges,
            duration_ms,
        },
        games: result.games.clone(),
    }
}
