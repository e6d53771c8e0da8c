#![allow(dead_code)]

// tests/common/mod.rs
use scorer::{MatchEngine, Player};

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    scorer_test_support::logging::init();
}

/// Drive an engine through rallies written as a string of '1'/'2'.
pub fn play(engine: &mut MatchEngine, rallies: &str) {
    for c in rallies.chars() {
        let player = match c {
            '1' => Player::One,
            '2' => Player::Two,
            _ => continue,
        };
        engine.award_point(player);
    }
}

/// Engine positioned at an in-progress score, built by alternating rallies
/// so no intermediate state is a win.
pub fn engine_at(s1: u32, s2: u32) -> MatchEngine {
    let mut engine = MatchEngine::new();
    let (mut a, mut b) = (0, 0);
    while a < s1 || b < s2 {
        if a < s1 {
            engine.award_point(Player::One);
            a += 1;
        }
        if b < s2 {
            engine.award_point(Player::Two);
            b += 1;
        }
    }
    assert_eq!(engine.state().scores(), (s1, s2), "setup reached target score");
    assert_eq!(engine.state().winner, None, "setup must not conclude the game");
    engine
}
