//! Traits describing the engine's collaborators.
//!
//! Oracles expose the host's teams, the goal pools and game modes, and the
//! outbound sync channel. The [`GameEnv`] aggregate bundles what the engine
//! needs per call, so nothing is reached through global state.
mod mode;
mod rng;
mod sync;
mod tables;
mod teams;

pub use mode::{Catalog, GameMode, ModeCatalog};
pub use rng::{PcgRng, RngOracle};
pub use sync::{NoopSync, SyncChannel};
pub use tables::{Goal, GoalTable, GoalTier, TierId, WeightedGoalTable};
pub use teams::{StaticTeams, TeamRegistry};

use crate::config::{DEFAULT_CONFIG, GameConfig};

/// Collaborators borrowed by [`crate::engine::GameEngine`] for one operation.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    teams: &'a dyn TeamRegistry,
    sync: &'a dyn SyncChannel,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    /// Builds an environment using the default [`GameConfig`].
    pub fn new(teams: &'a dyn TeamRegistry, sync: &'a dyn SyncChannel) -> Self {
        Self {
            teams,
            sync,
            config: &DEFAULT_CONFIG,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: &'a GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn teams(&self) -> &'a dyn TeamRegistry {
        self.teams
    }

    pub fn sync(&self) -> &'a dyn SyncChannel {
        self.sync
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}
