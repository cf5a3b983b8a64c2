//! Pursuit game binary.
//!
//! Plays one scenario in the terminal: the board is printed to stdout after
//! every turn and progress is logged to stderr. Ctrl-C stops between turns.
//!
//! ```bash
//! PURSUIT_SCENARIO=meadow_corner PURSUIT_TURN_INTERVAL_MS=200 cargo run -p pursuit-client
//! ```

use anyhow::Result;
use pursuit_client::{ClientConfig, GameSetup, logging};
use pursuit_core::Renderer;
use pursuit_runtime::{DriverOutcome, TextRenderer, TracingNotifier, TurnDriver};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    logging::setup_logging()?;

    let config = ClientConfig::from_env();
    let setup = GameSetup::load(&config)?;
    tracing::info!(
        scenario = %setup.scenario.name,
        max_turns = setup.game.max_turns,
        evasion = setup.game.evasion.as_str(),
        "starting game"
    );

    let mut renderer = TextRenderer::stdout();
    renderer.render(setup.state.board())?;

    let driver = TurnDriver::from_parts(
        setup.state,
        setup.game,
        renderer,
        TracingNotifier,
        config.driver_config(),
    )?;

    let result = driver
        .run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!("failed to listen for ctrl-c: {err}");
                std::future::pending::<()>().await;
            }
        })
        .await;
    let summary = match result {
        Ok(summary) => summary,
        Err(err) => {
            tracing::error!(
                severity = err.severity().as_str(),
                code = err.error_code(),
                "game aborted: {err}"
            );
            return Err(err.into());
        }
    };

    match summary.outcome {
        DriverOutcome::Ended(reason) => {
            tracing::info!(
                turns = summary.turns_played,
                ?reason,
                evader = %summary.evader(),
                "game finished"
            );
        }
        DriverOutcome::Stopped => {
            tracing::info!(turns = summary.turns_played, "game interrupted");
        }
    }

    Ok(())
}
