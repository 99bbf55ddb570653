//! Game-mode effect hooks invoked by the engine.
//!
//! A [`crate::env::GameMode`] carries ordered lists of effects for the three
//! points the engine reports on: game start, a newly completed goal, and a
//! declared winner. Effects run synchronously inside the engine call and an
//! error aborts the remaining effects of that list and is returned to the
//! caller as [`crate::engine::EngineError::Effect`].

use tracing::info;

use crate::env::TeamRegistry;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, GoalItem, PlayerId, Team};

/// Read-only view handed to start and win effects.
#[derive(Clone, Copy)]
pub struct EffectContext<'a> {
    /// Host clock value passed to the engine operation.
    pub clock_time: i64,
    pub state: &'a GameState,
    pub teams: &'a dyn TeamRegistry,
}

/// Failure reported by an effect hook.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("effect '{effect}' failed: {message}")]
pub struct EffectError {
    pub effect: String,
    pub message: String,
}

impl EffectError {
    pub fn new(effect: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            effect: effect.into(),
            message: message.into(),
        }
    }
}

impl GameError for EffectError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "EFFECT_FAILED"
    }
}

/// Runs once when a created game is started.
pub trait StartingEffect: Send + Sync {
    /// Returns a human-readable name for this effect (used in logging).
    fn name(&self) -> &'static str;

    fn on_game_started(&self, ctx: &EffectContext<'_>) -> Result<(), EffectError>;
}

/// Runs each time a team completes a goal for the first time.
pub trait CollectionEffect: Send + Sync {
    fn name(&self) -> &'static str;

    fn on_item_collected(
        &self,
        player: &PlayerId,
        item: &GoalItem,
        team: &Team,
    ) -> Result<(), EffectError>;
}

/// Runs once when a winner is declared.
pub trait WinEffect: Send + Sync {
    fn name(&self) -> &'static str;

    fn on_game_completed(&self, ctx: &EffectContext<'_>, winner: &Team)
    -> Result<(), EffectError>;
}

/// Effect that reports game events through `tracing` at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnnounceEffect;

impl AnnounceEffect {
    pub const NAME: &'static str = "announce";
}

impl StartingEffect for AnnounceEffect {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_game_started(&self, ctx: &EffectContext<'_>) -> Result<(), EffectError> {
        let mode = ctx.state.mode().map(|mode| mode.id()).unwrap_or("none");
        info!(
            mode,
            blackout = ctx.state.blackout(),
            teams = ctx.teams.teams().len(),
            "bingo game started"
        );
        Ok(())
    }
}

impl CollectionEffect for AnnounceEffect {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_item_collected(
        &self,
        player: &PlayerId,
        item: &GoalItem,
        team: &Team,
    ) -> Result<(), EffectError> {
        info!(%player, %item, %team, "goal obtained");
        Ok(())
    }
}

impl WinEffect for AnnounceEffect {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_game_completed(
        &self,
        ctx: &EffectContext<'_>,
        winner: &Team,
    ) -> Result<(), EffectError> {
        let duration = ctx.clock_time - ctx.state.start_time();
        info!(%winner, duration, "bingo game won");
        Ok(())
    }
}
