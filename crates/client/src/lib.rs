//! Command-line client for the pursuit simulation.
//!
//! The binary is a thin composition root: it reads [`ClientConfig`] from the
//! environment, resolves a scenario into a [`GameSetup`], and hands the result
//! to a [`pursuit_runtime::TurnDriver`].

pub mod config;
pub mod logging;

pub use config::ClientConfig;

use anyhow::{Context, Result};
use pursuit_content::{ConfigLoader, Scenario, ScenarioLoader};
use pursuit_core::{GameConfig, GameState};

/// Everything needed to start a game.
#[derive(Clone, Debug)]
pub struct GameSetup {
    pub scenario: Scenario,
    pub state: GameState,
    pub game: GameConfig,
}

impl GameSetup {
    /// Resolves the scenario and layers settings as
    /// defaults < config file < scenario < environment.
    pub fn load(config: &ClientConfig) -> Result<Self> {
        let base = match &config.config_file {
            Some(path) => ConfigLoader::load(path)?,
            None => GameConfig::default(),
        };

        let scenario = ScenarioLoader::resolve(&config.scenario)?;
        let state = scenario
            .build_state()
            .with_context(|| format!("Invalid layout in scenario {}", scenario.name))?;

        let game = config.apply_to(scenario.apply_to(base));
        game.validate()?;

        Ok(Self {
            scenario,
            state,
            game,
        })
    }
}
