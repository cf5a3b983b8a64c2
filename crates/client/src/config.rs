//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use pursuit_core::{EvasionStrategy, GameConfig};
use pursuit_runtime::DriverConfig;

/// Configuration required to assemble a game from the environment.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Built-in scenario name or path to a RON scenario file.
    pub scenario: String,
    /// Optional TOML file with [`GameConfig`] defaults.
    pub config_file: Option<PathBuf>,
    pub max_turns: Option<u32>,
    pub evasion: Option<EvasionStrategy>,
    pub turn_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scenario: Self::DEFAULT_SCENARIO.to_owned(),
            config_file: None,
            max_turns: None,
            evasion: None,
            turn_interval: DriverConfig::DEFAULT_TURN_INTERVAL,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_SCENARIO: &'static str = "meadow";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PURSUIT_SCENARIO` - Built-in name or RON file path (default: meadow)
    /// - `PURSUIT_CONFIG` - TOML file with game defaults (optional)
    /// - `PURSUIT_MAX_TURNS` - Turn limit, overrides scenario and file
    /// - `PURSUIT_EVASION` - `direct` or `path`, overrides scenario and file
    /// - `PURSUIT_TURN_INTERVAL_MS` - Delay between turns (default: 1000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(scenario) = lookup("PURSUIT_SCENARIO").filter(|s| !s.trim().is_empty()) {
            config.scenario = scenario.trim().to_owned();
        }
        config.config_file = lookup("PURSUIT_CONFIG").map(PathBuf::from);

        config.max_turns = match parse(&lookup, "PURSUIT_MAX_TURNS") {
            Some(0) => {
                tracing::warn!(key = "PURSUIT_MAX_TURNS", "ignoring zero turn limit");
                None
            }
            turns => turns,
        };
        config.evasion = parse(&lookup, "PURSUIT_EVASION");

        if let Some(millis) = parse(&lookup, "PURSUIT_TURN_INTERVAL_MS") {
            config.turn_interval = Duration::from_millis(millis);
        }

        config
    }

    /// Applies environment overrides on top of scenario-adjusted settings.
    pub fn apply_to(&self, base: GameConfig) -> GameConfig {
        let mut config = base;
        if let Some(max_turns) = self.max_turns {
            config.max_turns = max_turns;
        }
        if let Some(evasion) = self.evasion {
            config.evasion = evasion;
        }
        config
    }

    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            turn_interval: self.turn_interval,
            ..DriverConfig::default()
        }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment variable: {err}");
            None
        }
    }
}
