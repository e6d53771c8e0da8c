use serde::Serialize;

use crate::domain::rules::ServingCourt;
use crate::domain::scoreboard::{
    player_label, scoreboard_view, PrimaryAction, ScoreboardView, SideView,
};
use crate::domain::state::MatchState;
use crate::error::AppError;

pub const HELP: &str = "\
commands:
  1 | p1 | point 1   point to player 1
  2 | p2 | point 2   point to player 2
  u | undo           undo the last point or exchange
  x | swap           exchange sides
  n | next           start the next game (after a win)
  r | reset          reset all scores and games
  h | help           show this help
  q | quit           leave";

fn court_name(court: ServingCourt) -> &'static str {
    match court {
        ServingCourt::Left => "left",
        ServingCourt::Right => "right",
    }
}

fn side_line(side: &SideView) -> String {
    let mut line = format!(
        "{:<10} games {:>2}   score {:>2}",
        side.label, side.games_won, side.score
    );
    if let Some(court) = side.serving {
        line.push_str(&format!("   serving ({})", court_name(court)));
    }
    line
}

/// Multi-line text scoreboard.
pub fn render_text(view: &ScoreboardView) -> String {
    let mut out = String::new();
    for side in &view.sides {
        out.push_str(&side_line(side));
        out.push('\n');
    }
    if let Some(winner) = view.winner {
        out.push_str(&format!("{} wins the game\n", player_label(winner)));
    }
    let primary = match view.primary_action {
        PrimaryAction::NextGame => "[n] next game",
        PrimaryAction::Reset => "[r] reset",
    };
    out.push_str(&format!("[1] [2] point   [u] undo   [x] exchange   {primary}"));
    out
}

#[derive(Serialize)]
struct JsonFrame<'a> {
    state: &'a MatchState,
    scoreboard: ScoreboardView,
}

/// Single-line JSON frame carrying both the raw state and its view.
pub fn render_json(state: &MatchState) -> Result<String, AppError> {
    let frame = JsonFrame {
        state,
        scoreboard: scoreboard_view(state),
    };
    Ok(serde_json::to_string(&frame)?)
}
