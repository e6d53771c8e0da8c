use std::io;

use scorer::config::ScorerConfig;
use scorer::console::ConsoleSession;
use scorer::services::MatchEngine;
use tracing::info;

mod telemetry;

fn main() {
    // Configuration comes from SCORER_* environment variables; see ScorerConfig.
    let config = match ScorerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    telemetry::init_tracing(config.log_format);
    info!(
        output = ?config.output,
        confirm_reset = config.confirm_reset,
        clear_history_on_reset = config.clear_history_on_reset,
        "Starting scorer"
    );

    let engine = MatchEngine::with_options(config.engine_options());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ConsoleSession::new(
        engine,
        stdin.lock(),
        stdout.lock(),
        config.console_options(),
    );

    if let Err(e) = session.run() {
        eprintln!("❌ Session failed: {e}");
        std::process::exit(1);
    }

    let (s1, s2) = session.engine().state().scores();
    info!(score1 = s1, score2 = s2, "Session ended");
}
