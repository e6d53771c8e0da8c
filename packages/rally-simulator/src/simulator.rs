//! In-memory match simulator driving the scoring engine with random rallies.
//!
//! The engine tracks scoreboard slots, which swap whenever players change
//! ends. The simulator keeps its own record of which competitor stands in
//! which slot so results are attributed to people, not slots.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scorer::{MatchEngine, MatchState, Player};
use serde::Serialize;
use tracing::{debug, trace};

/// Games needed to take a best-of-three match.
pub const GAMES_TO_WIN: u32 = 2;
/// In the deciding game, ends change when the leader first reaches this score.
pub const DECIDER_INTERVAL: u32 = 11;
// Longest possible game is 30-29.
const MAX_RALLIES_PER_GAME: u32 = 59;

/// A person on court, independent of scoreboard slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Competitor {
    A,
    B,
}

#[derive(Debug, Clone, Copy)]
pub struct SimulatorConfig {
    /// Probability that competitor A wins any given rally.
    pub a_strength: f64,
    /// Probability of a mis-tap before a rally that is immediately undone.
    pub undo_rate: f64,
}

impl SimulatorConfig {
    pub fn validate(&self) -> Result<(), SimulatorError> {
        for (name, value) in [("a_strength", self.a_strength), ("undo_rate", self.undo_rate)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimulatorError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}

/// One finished game, scores attributed to competitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub game_no: u32,
    pub winner: Competitor,
    pub score_a: u32,
    pub score_b: u32,
    pub rallies: u32,
}

/// Result of simulating a complete match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Competitor,
    pub games: Vec<GameRecord>,
    pub games_a: u32,
    pub games_b: u32,
    pub total_rallies: u32,
    pub undos: u32,
    pub exchanges: u32,
}

#[derive(Debug)]
pub enum SimulatorError {
    /// Probability parameter outside `[0, 1]`
    InvalidProbability { name: &'static str, value: f64 },
    /// A game ran past the longest possible rally count
    RallyLimit(u32),
    /// Engine state contradicts the simulator's bookkeeping
    InvalidState(String),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::InvalidProbability { name, value } => {
                write!(f, "Invalid probability for {name}: {value} (expected 0.0..=1.0)")
            }
            SimulatorError::RallyLimit(game_no) => {
                write!(f, "Game {game_no} exceeded {MAX_RALLIES_PER_GAME} rallies")
            }
            SimulatorError::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
        }
    }
}

impl std::error::Error for SimulatorError {}

/// In-memory match simulator.
pub struct Simulator {
    engine: MatchEngine,
    rng: StdRng,
    config: SimulatorConfig,
    /// True while competitor A stands in slot 2.
    flipped: bool,
    undos: u32,
    exchanges: u32,
}

impl Simulator {
    /// Create a simulator for one match with a deterministic seed.
    pub fn new(seed: u64, config: SimulatorConfig) -> Result<Self, SimulatorError> {
        config.validate()?;
        Ok(Self {
            engine: MatchEngine::new(),
            rng: StdRng::seed_from_u64(seed),
            config,
            flipped: false,
            undos: 0,
            exchanges: 0,
        })
    }

    fn slot_of(&self, who: Competitor) -> Player {
        match (who, self.flipped) {
            (Competitor::A, false) | (Competitor::B, true) => Player::One,
            (Competitor::A, true) | (Competitor::B, false) => Player::Two,
        }
    }

    fn competitor_in(&self, slot: Player) -> Competitor {
        if self.slot_of(Competitor::A) == slot {
            Competitor::A
        } else {
            Competitor::B
        }
    }

    fn change_ends(&mut self) {
        self.engine.exchange_sides();
        self.flipped = !self.flipped;
        self.exchanges += 1;
    }

    fn score_of(&self, state: &MatchState, who: Competitor) -> u32 {
        state.standing(self.slot_of(who)).score
    }

    fn games_of(&self, state: &MatchState, who: Competitor) -> u32 {
        state.standing(self.slot_of(who)).games_won
    }

    /// Tap the wrong side, then take it back.
    fn mis_tap(&mut self) -> Result<(), SimulatorError> {
        let before = *self.engine.state();
        let slot = if self.rng.random::<bool>() {
            Player::One
        } else {
            Player::Two
        };
        self.engine.award_point(slot);
        let restored = self.engine.undo();
        if restored != before {
            return Err(SimulatorError::InvalidState(format!(
                "undo did not restore state: before={before:?} after={restored:?}"
            )));
        }
        self.undos += 1;
        Ok(())
    }

    fn play_game(&mut self, game_no: u32) -> Result<GameRecord, SimulatorError> {
        let deciding = game_no == 2 * GAMES_TO_WIN - 1;
        let mut changed_ends = false;
        let mut rallies = 0u32;

        loop {
            let state = *self.engine.state();
            if let Some(slot) = state.winner {
                let winner = self.competitor_in(slot);
                return Ok(GameRecord {
                    game_no,
                    winner,
                    score_a: self.score_of(&state, Competitor::A),
                    score_b: self.score_of(&state, Competitor::B),
                    rallies,
                });
            }
            if rallies >= MAX_RALLIES_PER_GAME {
                return Err(SimulatorError::RallyLimit(game_no));
            }

            if self.config.undo_rate > 0.0 && self.rng.random_bool(self.config.undo_rate) {
                self.mis_tap()?;
            }

            let rally_winner = if self.rng.random_bool(self.config.a_strength) {
                Competitor::A
            } else {
                Competitor::B
            };
            let state = self.engine.award_point(self.slot_of(rally_winner));
            rallies += 1;
            trace!(game_no, rally = rallies, winner = ?rally_winner, "Rally");

            if deciding && !changed_ends && state.winner.is_none() {
                let (s1, s2) = state.scores();
                if s1.max(s2) >= DECIDER_INTERVAL {
                    debug!(game_no, s1, s2, "Changing ends in deciding game");
                    self.change_ends();
                    changed_ends = true;
                }
            }
        }
    }

    /// Play a best-of-three match to completion.
    pub fn simulate_match(mut self) -> Result<MatchResult, SimulatorError> {
        let mut games = Vec::new();

        loop {
            let game_no = games.len() as u32 + 1;
            let record = self.play_game(game_no)?;
            debug!(
                game_no,
                winner = ?record.winner,
                score_a = record.score_a,
                score_b = record.score_b,
                "Game finished"
            );
            games.push(record);

            let state = *self.engine.state();
            let games_a = self.games_of(&state, Competitor::A);
            let games_b = self.games_of(&state, Competitor::B);
            if games_a.max(games_b) >= GAMES_TO_WIN {
                let winner = if games_a > games_b {
                    Competitor::A
                } else {
                    Competitor::B
                };
                let total_rallies = games.iter().map(|g| g.rallies).sum();
                return Ok(MatchResult {
                    winner,
                    games,
                    games_a,
                    games_b,
                    total_rallies,
                    undos: self.undos,
                    exchanges: self.exchanges,
                });
            }

            // Next game first so the winner keeps serve as the players change ends.
            let server_before = self.competitor_in(state.winner.unwrap_or(Player::One));
            self.engine.start_next_game();
            self.change_ends();
            let server_after = self.competitor_in(self.engine.state().serving_player);
            if server_after != server_before {
                return Err(SimulatorError::InvalidState(format!(
                    "server changed from {server_before:?} to {server_after:?} across games"
                )));
            }
        }
    }
}
