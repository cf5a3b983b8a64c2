use std::time::Duration;

use pursuit_content::Scenario;
use pursuit_core::{
    Board, Cell, EndReason, ErrorSeverity, GameConfig, GameState, RenderError, Renderer,
    TurnEngine,
};
use pursuit_runtime::{
    DriverConfig, DriverOutcome, RuntimeError, TextRenderer, TracingNotifier, TurnDriver,
    TurnEvent,
};

fn drain(rx: &mut tokio::sync::broadcast::Receiver<TurnEvent>) -> Vec<TurnEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn runs_reference_meadow_to_completion() {
    let scenario = Scenario::meadow();
    let config = scenario.apply_to(GameConfig::default());
    let driver = TurnDriver::from_parts(
        scenario.build_state().unwrap(),
        config,
        TextRenderer::new(Vec::new()),
        TracingNotifier,
        DriverConfig::immediate(),
    )
    .unwrap();
    let mut rx = driver.events().subscribe();

    let summary = driver.run().await.unwrap();
    let events = drain(&mut rx);

    assert!(matches!(summary.outcome, DriverOutcome::Ended(_)));
    assert!(summary.turns_played >= 1 && summary.turns_played <= 10);

    let last = events.last().unwrap();
    assert_eq!(last.turn(), summary.turns_played);
    match summary.outcome {
        DriverOutcome::Ended(EndReason::Captured) => {
            assert_eq!(last, &TurnEvent::Captured {
                turn: summary.turns_played,
                cell: summary.evader(),
            });
            assert!(summary.pursuers().contains(&summary.evader()));
        }
        DriverOutcome::Ended(EndReason::MaxTurnsReached) => {
            assert_eq!(summary.turns_played, 10);
            assert_eq!(last.end_reason(), Some(EndReason::MaxTurnsReached));
        }
        DriverOutcome::Stopped => unreachable!("no shutdown signal was given"),
    }
}

#[tokio::test]
async fn single_turn_limit_publishes_completion_then_limit() {
    let state = GameState::from_parts(9, 7, &[], Cell::new(0, 0), &[Cell::new(6, 8)]).unwrap();
    let driver = TurnDriver::from_parts(
        state,
        GameConfig::new().with_max_turns(1),
        (),
        (),
        DriverConfig::immediate(),
    )
    .unwrap();
    let mut rx = driver.events().subscribe();

    let summary = driver.run().await.unwrap();

    assert_eq!(
        summary.outcome,
        DriverOutcome::Ended(EndReason::MaxTurnsReached)
    );
    assert_eq!(summary.turns_played, 1);
    let events = drain(&mut rx);
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], TurnEvent::TurnCompleted { turn: 1, .. }));
    assert_eq!(events[1], TurnEvent::MaxTurnsReached { turn: 1 });
}

#[tokio::test]
async fn shutdown_stops_between_turns() {
    let state = GameState::from_parts(9, 7, &[], Cell::new(0, 0), &[Cell::new(6, 8)]).unwrap();
    let driver = TurnDriver::from_parts(
        state,
        GameConfig::new().with_max_turns(50),
        (),
        (),
        DriverConfig {
            turn_interval: Duration::from_secs(3600),
            ..DriverConfig::default()
        },
    )
    .unwrap();
    let mut rx = driver.events().subscribe();

    let summary = driver.run_until(std::future::ready(())).await.unwrap();

    assert_eq!(summary.outcome, DriverOutcome::Stopped);
    assert_eq!(summary.turns_played, 1);
    assert_eq!(drain(&mut rx).last(), Some(&TurnEvent::Stopped { turn: 1 }));
}

#[tokio::test]
async fn pursuer_on_start_cell_is_captured_immediately() {
    let start = Cell::new(2, 2);
    let state = GameState::from_parts(5, 5, &[], start, &[start]).unwrap();
    let engine = TurnEngine::new(state, GameConfig::default(), (), ()).unwrap();

    let summary = TurnDriver::new(engine, DriverConfig::immediate())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.outcome, DriverOutcome::Ended(EndReason::Captured));
    assert_eq!(summary.turns_played, 1);
    assert_eq!(summary.evader(), start);
}

#[test]
fn invalid_config_is_rejected() {
    let state = GameState::from_layout(&["B.M"]).unwrap();
    let result = TurnDriver::from_parts(
        state,
        GameConfig::new().with_max_turns(0),
        (),
        (),
        DriverConfig::immediate(),
    );
    let Err(err) = result else {
        panic!("zero max_turns must be rejected");
    };
    assert!(matches!(err, RuntimeError::Config(_)));
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    assert_eq!(err.error_code(), "CONFIG_ZERO_MAX_TURNS");
}

struct BrokenScreen;

impl Renderer for BrokenScreen {
    fn render(&mut self, _board: &Board) -> Result<(), RenderError> {
        Err(RenderError::new("terminal closed"))
    }
}

#[tokio::test]
async fn renderer_failure_aborts_the_run_as_external_error() {
    let state = GameState::from_parts(9, 7, &[], Cell::new(0, 0), &[Cell::new(6, 8)]).unwrap();
    let driver = TurnDriver::from_parts(
        state,
        GameConfig::default(),
        BrokenScreen,
        (),
        DriverConfig::immediate(),
    )
    .unwrap();
    let mut rx = driver.events().subscribe();

    let err = driver.run().await.unwrap_err();

    assert!(matches!(err, RuntimeError::Turn(_)));
    assert_eq!(err.severity(), ErrorSeverity::External);
    assert_eq!(err.error_code(), "TURN_RENDER_FAILED");
    assert!(drain(&mut rx).is_empty());
}
