//! Scenario loader.
//!
//! Scenario files are RON documents describing a [`Scenario`]. The layout is
//! validated while loading so a malformed board never reaches the engine.

use std::path::Path;

use anyhow::Context;

use crate::Scenario;
use crate::loaders::{LoadResult, read_file};

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    /// Parse a scenario from RON text and validate its layout.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        scenario.build_state()?;
        if let Some(max_turns) = scenario.max_turns {
            anyhow::ensure!(max_turns > 0, "scenario max_turns must be at least 1");
        }

        Ok(scenario)
    }

    /// Resolve a scenario by built-in name or, failing that, by file path.
    pub fn resolve(name_or_path: &str) -> LoadResult<Scenario> {
        match Scenario::builtin(name_or_path) {
            Some(scenario) => Ok(scenario),
            None => Self::load(Path::new(name_or_path)),
        }
    }
}
