//! Authoritative game state representation.
//!
//! This module owns the board, the completion record and the lifecycle
//! flags. Runtime layers read this state freely but mutate it exclusively
//! through [`crate::engine::GameEngine`].
pub mod board;
pub mod completion;
pub mod types;

use std::sync::Arc;

pub use board::Board;
pub use completion::CompletionMatrix;
pub use types::{Coord, Corner, GoalItem, PlayerId, Team, TeamColor, TeamKey};

use crate::env::{GameMode, GoalTable, PcgRng};

/// Sentinel stored in `start_time`/`end_time` while unset.
pub const UNSET_TIME: i64 = -1;

/// Lifecycle phase derived from the state flags.
///
/// `Inactive` covers both a never-created state and one stopped with `end()`;
/// only `create` leaves it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GamePhase {
    Inactive,
    NotStarted,
    Started,
    /// A winner was declared; the board stays visible.
    Ended,
}

/// Canonical state of one bingo game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) mode: Option<Arc<GameMode>>,
    pub(crate) table: Option<Arc<dyn GoalTable>>,
    /// Game rng, seeded by `create` and used for table choice, goal sampling
    /// and the placement shuffle. Not persisted.
    pub(crate) rng: Option<PcgRng>,
    pub(crate) board: Board,
    pub(crate) completion: CompletionMatrix,
    pub(crate) is_active: bool,
    pub(crate) has_started: bool,
    pub(crate) group_teams: bool,
    pub(crate) blackout: bool,
    pub(crate) start_time: i64,
    pub(crate) end_time: i64,
    pub(crate) winner: Option<TeamKey>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            mode: None,
            table: None,
            rng: None,
            board: Board::empty(),
            completion: CompletionMatrix::new(),
            is_active: false,
            has_started: false,
            group_teams: false,
            blackout: false,
            start_time: UNSET_TIME,
            end_time: UNSET_TIME,
            winner: None,
        }
    }
}

impl GameState {
    /// Creates an empty, inactive state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived from the flags. A game counts as ended once it has an end
    /// time, even when its winner could not be resolved after a load.
    pub fn phase(&self) -> GamePhase {
        if !self.is_active {
            GamePhase::Inactive
        } else if self.has_started {
            GamePhase::Started
        } else if self.winner.is_some() || self.end_time != UNSET_TIME {
            GamePhase::Ended
        } else {
            GamePhase::NotStarted
        }
    }

    /// True while acquisitions are accepted.
    pub fn is_running(&self) -> bool {
        self.is_active && self.has_started
    }

    pub fn mode(&self) -> Option<&Arc<GameMode>> {
        self.mode.as_ref()
    }

    pub fn table(&self) -> Option<&Arc<dyn GoalTable>> {
        self.table.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn completion(&self) -> &CompletionMatrix {
        &self.completion
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn has_started(&self) -> bool {
        self.has_started
    }

    pub fn group_teams(&self) -> bool {
        self.group_teams
    }

    pub fn blackout(&self) -> bool {
        self.blackout
    }

    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    pub fn end_time(&self) -> i64 {
        self.end_time
    }

    pub fn winner(&self) -> Option<&TeamKey> {
        self.winner.as_ref()
    }

    /// Drops everything back to the inactive defaults.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_inactive_with_unset_times() {
        let state = GameState::new();

        assert_eq!(state.phase(), GamePhase::Inactive);
        assert!(!state.is_running());
        assert_eq!(state.start_time(), UNSET_TIME);
        assert_eq!(state.end_time(), UNSET_TIME);
        assert!(state.winner().is_none());
        assert!(state.mode().is_none());
        assert_eq!(state.board().goals().count(), 0);
    }

    #[test]
    fn phase_follows_flags() {
        let mut state = GameState::new();
        state.is_active = true;
        assert_eq!(state.phase(), GamePhase::NotStarted);

        state.has_started = true;
        assert_eq!(state.phase(), GamePhase::Started);

        state.has_started = false;
        state.winner = Some(TeamKey::new("red"));
        assert_eq!(state.phase(), GamePhase::Ended);
        assert_eq!(GamePhase::NotStarted.to_string(), "not_started");
    }

    #[test]
    fn end_time_without_winner_is_still_ended() {
        let mut state = GameState::new();
        state.is_active = true;
        state.end_time = 420;
        assert_eq!(state.phase(), GamePhase::Ended);
        assert!(!state.is_running());
    }
}
