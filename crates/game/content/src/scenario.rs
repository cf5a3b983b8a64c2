//! Scenario definitions: an initial layout plus optional rule overrides.

use pursuit_core::{EvasionStrategy, GameConfig, GameState, LayoutError};

/// A named starting position.
///
/// Layout rows use the glyphs `.` (empty), `W` (wall), `B` (evader) and `M`
/// (pursuer); spaces between glyphs are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub name: String,
    pub layout: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_turns: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub evasion: Option<EvasionStrategy>,
}

const MEADOW_WALLS: [(usize, usize); 9] = [
    (0, 5),
    (1, 1),
    (1, 3),
    (1, 7),
    (2, 5),
    (3, 1),
    (3, 7),
    (4, 2),
    (5, 4),
];

impl Scenario {
    /// Names accepted by [`Scenario::builtin`].
    pub const BUILTIN_NAMES: [&'static str; 2] = ["meadow", "meadow_corner"];

    /// The reference 9x7 meadow with the evader in the left pocket at (3, 2).
    pub fn meadow() -> Self {
        Self::meadow_with_evader("meadow", (3, 2))
    }

    /// The same meadow with the evader starting on the top edge at (0, 2).
    pub fn meadow_corner() -> Self {
        Self::meadow_with_evader("meadow_corner", (0, 2))
    }

    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "meadow" => Some(Self::meadow()),
            "meadow_corner" => Some(Self::meadow_corner()),
            _ => None,
        }
    }

    /// Parses and validates the layout.
    pub fn build_state(&self) -> Result<GameState, LayoutError> {
        GameState::from_layout(&self.layout)
    }

    /// Applies this scenario's overrides on top of `base`.
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

    fn meadow_with_evader(name: &str, evader: (usize, usize)) -> Self {
        let mut grid = [['.'; 9]; 7];
        for (row, col) in MEADOW_WALLS {
            grid[row][col] = 'W';
        }
        grid[5][2] = 'M';
        grid[6][5] = 'M';
        grid[evader.0][evader.1] = 'B';

        let layout = grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        Self {
            name: name.to_owned(),
            layout,
            max_turns: None,
            evasion: None,
        }
    }
}
