// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::commands::Command;
use crate::domain::state::Player;

/// Generate a random player slot
pub fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::One), Just(Player::Two)]
}

/// Generate a sequence of rally winners
pub fn rallies(max_len: usize) -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec(player(), 0..=max_len)
}

/// Generate any command, weighted towards points as in a real session
pub fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        8 => player().prop_map(Command::AwardPoint),
        1 => Just(Command::ExchangeSides),
        1 => Just(Command::StartNextGame),
        1 => Just(Command::Undo),
        1 => Just(Command::ResetMatch),
    ]
}

/// Generate a session script of commands
pub fn commands(max_len: usize) -> impl Strategy<Value = Vec<Command>> {
    prop::collection::vec(command(), 0..=max_len)
}
