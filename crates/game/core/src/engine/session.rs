//! Lock-serialized access to one authoritative game.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error};

use crate::codec::{self, Tag};
use crate::config::GameConfig;
use crate::engine::{AcquisitionOutcome, EngineError, GameEngine};
use crate::env::{GameEnv, GameMode, ModeCatalog, SyncChannel, TeamRegistry};
use crate::error::GameError;
use crate::state::{GameState, GoalItem, PlayerId, Team};

/// Owns the game state and serializes every operation on it.
///
/// Acquisition events from many players may arrive concurrently; each call
/// takes the lock for the whole operation, so marks and win evaluation
/// never interleave and at most one winner is ever declared.
pub struct GameSession {
    state: Mutex<GameState>,
    teams: Arc<dyn TeamRegistry>,
    sync: Arc<dyn SyncChannel>,
    config: GameConfig,
}

impl GameSession {
    pub fn new(teams: Arc<dyn TeamRegistry>, sync: Arc<dyn SyncChannel>) -> Self {
        Self::with_config(teams, sync, GameConfig::default())
    }

    pub fn with_config(
        teams: Arc<dyn TeamRegistry>,
        sync: Arc<dyn SyncChannel>,
        config: GameConfig,
    ) -> Self {
        Self {
            state: Mutex::new(GameState::new()),
            teams,
            sync,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn teams(&self) -> &dyn TeamRegistry {
        self.teams.as_ref()
    }

    pub fn create(
        &self,
        seed: u64,
        mode: Arc<GameMode>,
        group_teams: bool,
        blackout: bool,
    ) -> Result<(), EngineError> {
        self.with_engine(|engine| engine.create(seed, mode, group_teams, blackout))
    }

    /// Creates a game using the flags from the session's [`GameConfig`].
    pub fn create_default(&self, seed: u64, mode: Arc<GameMode>) -> Result<(), EngineError> {
        let (group_teams, blackout) = (self.config.group_teams, self.config.blackout);
        self.create(seed, mode, group_teams, blackout)
    }

    pub fn start(&self, clock_time: i64) -> Result<(), EngineError> {
        self.with_engine(|engine| engine.start(clock_time))
    }

    pub fn record_acquisition(
        &self,
        player: &PlayerId,
        item: &GoalItem,
        team: &Team,
        clock_time: i64,
    ) -> Result<AcquisitionOutcome, EngineError> {
        self.with_engine(|engine| engine.record_acquisition(player, item, team, clock_time))
    }

    pub fn end(&self) -> Result<(), EngineError> {
        self.with_engine(|engine| engine.end())
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> Result<GameState, EngineError> {
        Ok(self.lock()?.clone())
    }

    /// Serializes the current state to its tag tree.
    pub fn save(&self) -> Result<Tag, EngineError> {
        let state = self.lock()?;
        Ok(codec::write(&state))
    }

    /// Replaces the current state with one read from `tag`.
    pub fn load(&self, tag: &Tag, catalog: &dyn ModeCatalog) -> Result<(), EngineError> {
        let restored = codec::read(tag, catalog, self.teams.as_ref());
        *self.lock()? = restored;
        Ok(())
    }

    fn with_engine<T>(
        &self,
        op: impl FnOnce(&mut GameEngine<'_>) -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        let mut state = self.lock()?;
        let env = GameEnv::new(self.teams.as_ref(), self.sync.as_ref()).with_config(&self.config);
        let mut engine = GameEngine::new(&mut state, env);
        op(&mut engine).inspect_err(|err| {
            let severity = err.severity();
            if severity.is_internal() {
                error!(
                    code = err.error_code(),
                    severity = severity.as_str(),
                    error = %err,
                    "game operation failed"
                );
            } else {
                debug!(code = err.error_code(), error = %err, "game operation rejected");
            }
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameState>, EngineError> {
        self.state.lock().map_err(|_| EngineError::LockPoisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::{RecordingSync, classic_mode, scenario_catalog};
    use crate::env::StaticTeams;
    use crate::state::{GamePhase, TeamColor};
    use std::thread;

    fn session(sync: Arc<RecordingSync>) -> GameSession {
        GameSession::new(Arc::new(StaticTeams::standard()), sync)
    }

    #[test]
    fn lifecycle_through_the_session() {
        let sync = Arc::new(RecordingSync::default());
        let session = session(Arc::clone(&sync));
        let (mode, _) = classic_mode();

        session.create_default(5, mode).unwrap();
        assert!(session.snapshot().unwrap().group_teams());
        session.start(10).unwrap();
        assert_eq!(session.snapshot().unwrap().phase(), GamePhase::Started);

        session.end().unwrap();
        assert_eq!(session.snapshot().unwrap().phase(), GamePhase::Inactive);
        assert!(matches!(
            session.end(),
            Err(EngineError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn concurrent_acquisitions_declare_one_winner() {
        let sync = Arc::new(RecordingSync::default());
        let session = Arc::new(session(Arc::clone(&sync)));
        let (mode, _) = classic_mode();
        session.create(9, mode, true, false).unwrap();
        session.start(0).unwrap();

        let board = session.snapshot().unwrap().board().clone();
        let handles: Vec<_> = [TeamColor::Red, TeamColor::Blue]
            .into_iter()
            .map(|color| {
                let session = Arc::clone(&session);
                let board = board.clone();
                thread::spawn(move || {
                    let team = color.team();
                    let player = PlayerId::new(format!("{color}-runner"));
                    for (tick, (_, item)) in board.goals().enumerate() {
                        session
                            .record_acquisition(&player, item, &team, tick as i64)
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let state = session.snapshot().unwrap();
        assert_eq!(state.phase(), GamePhase::Ended);
        let winner = state.winner().unwrap().as_str();
        assert!(winner == "red" || winner == "blue");
    }

    #[test]
    fn save_and_load_round_trip() {
        let sync = Arc::new(RecordingSync::default());
        let session = session(sync);
        let (catalog, mode) = scenario_catalog();
        session.create(3, mode, false, true).unwrap();
        session.start(100).unwrap();

        let saved = session.save().unwrap();
        session.end().unwrap();
        session.load(&saved, &catalog).unwrap();

        assert_eq!(session.save().unwrap(), saved);
        assert_eq!(session.snapshot().unwrap().phase(), GamePhase::Started);
    }
}
