/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Upper bound on goal samples drawn while generating one board.
    ///
    /// Duplicate samples count towards the cap, so a pool with fewer than
    /// [`Self::CELL_COUNT`] distinct items fails instead of looping forever.
    pub max_goal_draws: u32,

    /// Default for the `group_teams` flag when a caller does not choose one.
    pub group_teams: bool,

    /// Default for the `blackout` flag when a caller does not choose one.
    pub blackout: bool,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Width and height of the bingo board.
    pub const BOARD_SIZE: usize = 5;
    pub const CELL_COUNT: usize = Self::BOARD_SIZE * Self::BOARD_SIZE;
    /// Completion slots per cell, one for each team corner.
    pub const MAX_CORNERS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_GOAL_DRAWS: u32 = 10_000;

    pub const fn new() -> Self {
        Self {
            max_goal_draws: Self::DEFAULT_MAX_GOAL_DRAWS,
            group_teams: true,
            blackout: false,
        }
    }

    pub const fn with_max_goal_draws(max_goal_draws: u32) -> Self {
        Self {
            max_goal_draws,
            group_teams: true,
            blackout: false,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration used when an environment is built without an explicit one.
pub(crate) static DEFAULT_CONFIG: GameConfig = GameConfig::new();
