//! Game lifecycle and acquisition pipeline.
//!
//! The [`GameEngine`] is the authoritative controller for [`GameState`]. It
//! drives the lifecycle `create → start → record_acquisition* → (win | end)`,
//! fires the mode's effect hooks and reports newly completed cells to the
//! sync channel. [`GameSession`] wraps it behind a lock for hosts that
//! receive events from several threads.

pub mod board;
mod errors;
mod hook;
mod session;
pub mod win;

pub use errors::{EngineError, Operation};
pub use hook::{
    AnnounceEffect, CollectionEffect, EffectContext, EffectError, StartingEffect, WinEffect,
};
pub use session::GameSession;
pub use win::Line;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::env::{GameEnv, GameMode, PcgRng};
use crate::state::{Coord, GamePhase, GameState, GoalItem, PlayerId, Team};

/// Result of feeding one acquisition event to the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AcquisitionOutcome {
    /// The game is not running; the event was dropped.
    Ignored,
    /// No cell on the board has this item as its goal.
    NoMatch,
    /// Every matching cell was already completed by this team.
    AlreadyCompleted,
    /// The team newly completed these cells.
    Completed { cells: Vec<Coord> },
}

/// Controller that mutates a borrowed [`GameState`].
///
/// Collaborators come in through [`GameEnv`]; the engine keeps no state of
/// its own, so a short-lived engine per operation is the normal usage.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState, env: GameEnv<'a>) -> Self {
        Self { state, env }
    }

    pub fn state(&self) -> &GameState {
        &*self.state
    }

    /// Sets up a new game, replacing whatever the state held before.
    ///
    /// The seed drives table choice, goal sampling and the placement shuffle,
    /// so equal seeds produce equal boards. On error the state is left reset
    /// and inactive.
    pub fn create(
        &mut self,
        seed: u64,
        mode: Arc<GameMode>,
        group_teams: bool,
        blackout: bool,
    ) -> Result<(), EngineError> {
        self.state.reset();

        let mut rng = PcgRng::seeded(seed);
        let table = mode
            .random_table(&mut rng)
            .ok_or_else(|| EngineError::NoGoalTables {
                mode: mode.id().to_owned(),
            })?;
        let board = board::generate(table.as_ref(), &mut rng, self.env.config().max_goal_draws)?;

        info!(
            mode = mode.id(),
            table = table.name(),
            seed,
            group_teams,
            blackout,
            "created bingo game"
        );

        self.state.mode = Some(mode);
        self.state.table = Some(table);
        self.state.rng = Some(rng);
        self.state.board = board;
        self.state.is_active = true;
        self.state.group_teams = group_teams;
        self.state.blackout = blackout;
        Ok(())
    }

    /// Starts a created game and fires the mode's starting effects.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` unless the game is active and not yet started.
    pub fn start(&mut self, clock_time: i64) -> Result<(), EngineError> {
        let phase = self.state.phase();
        if phase != GamePhase::NotStarted {
            return Err(EngineError::invalid_transition(Operation::Start, phase));
        }

        self.state.has_started = true;
        self.state.start_time = clock_time;
        info!(clock_time, "bingo game started");

        if let Some(mode) = self.state.mode.clone() {
            let ctx = self.effect_context(clock_time);
            for effect in mode.starting_effects() {
                debug!(effect = effect.name(), "running starting effect");
                effect.on_game_started(&ctx)?;
            }
        }
        Ok(())
    }

    /// Records that `player` of `team` acquired `item`.
    ///
    /// Each matching cell is marked for the team and every new cell is sent
    /// to the sync channel. If anything was newly marked the collection
    /// effects fire once; a repeated acquisition does neither. Win evaluation
    /// runs afterwards whenever the game is running, whether or not anything
    /// was marked.
    ///
    /// # Errors
    ///
    /// `UnregisteredTeam` when `team` is not in the registry under the same
    /// corner; nothing is marked. A failing collection effect does not stop
    /// the remaining effects, the sync notifications or win evaluation; the
    /// first such failure is returned once they have run.
    pub fn record_acquisition(
        &mut self,
        player: &PlayerId,
        item: &GoalItem,
        team: &Team,
        clock_time: i64,
    ) -> Result<AcquisitionOutcome, EngineError> {
        if !self.state.is_running() {
            debug!(%player, %item, "acquisition ignored, game not running");
            return Ok(AcquisitionOutcome::Ignored);
        }
        if self.env.teams().team(team.key().as_str()) != Some(team) {
            return Err(EngineError::UnregisteredTeam {
                team: team.key().to_string(),
                corner: team.corner().index(),
            });
        }

        let matching: Vec<Coord> = self.state.board.matching(item).collect();
        let mut completed = Vec::new();
        for coord in &matching {
            if self.state.completion.mark(*coord, team) {
                completed.push(*coord);
            }
        }

        for coord in &completed {
            debug!(%coord, %team, "goal completed");
            self.env.sync().goal_completed(*coord, team.key());
        }

        let mut effect_failure = None;
        if !completed.is_empty()
            && let Some(mode) = self.state.mode.clone()
        {
            for effect in mode.collection_effects() {
                if let Err(err) = effect.on_item_collected(player, item, team) {
                    warn!(effect = effect.name(), error = %err, "collection effect failed");
                    effect_failure.get_or_insert(err);
                }
            }
        }

        self.evaluate_and_maybe_end(clock_time)?;
        if let Some(err) = effect_failure {
            return Err(err.into());
        }

        Ok(if matching.is_empty() {
            AcquisitionOutcome::NoMatch
        } else if completed.is_empty() {
            AcquisitionOutcome::AlreadyCompleted
        } else {
            AcquisitionOutcome::Completed { cells: completed }
        })
    }

    /// Runs win evaluation and ends the game if a team qualifies.
    ///
    /// Only a running game can be won, so the transition happens at most
    /// once per game. Returns the newly declared winner.
    pub fn evaluate_and_maybe_end(&mut self, clock_time: i64) -> Result<Option<Team>, EngineError> {
        if !self.state.is_running() {
            return Ok(None);
        }

        let teams = self.env.teams().teams();
        let Some(winner) =
            win::evaluate(&self.state.completion, teams, self.state.blackout).cloned()
        else {
            return Ok(None);
        };

        self.state.winner = Some(winner.key().clone());
        self.state.end_time = clock_time;
        self.state.has_started = false;
        match win::winning_line(&self.state.completion, &winner) {
            Some(line) if !self.state.blackout => info!(%winner, %line, "bingo game won"),
            _ => info!(%winner, "bingo game won"),
        }

        if let Some(mode) = self.state.mode.clone() {
            let ctx = self.effect_context(clock_time);
            for effect in mode.win_effects() {
                effect.on_game_completed(&ctx, &winner)?;
            }
        }
        Ok(Some(winner))
    }

    /// Stops the current game regardless of its win state.
    ///
    /// Clears mode, table, flags, winner and timestamps, and also empties the
    /// board and completion record so nothing from the stopped game stays
    /// readable.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` when there is no active game to stop.
    pub fn end(&mut self) -> Result<(), EngineError> {
        let phase = self.state.phase();
        if phase == GamePhase::Inactive {
            return Err(EngineError::invalid_transition(Operation::End, phase));
        }

        self.state.reset();
        info!(%phase, "bingo game stopped");
        Ok(())
    }

    fn effect_context(&self, clock_time: i64) -> EffectContext<'_> {
        EffectContext {
            clock_time,
            state: &*self.state,
            teams: self.env.teams(),
        }
    }
}
