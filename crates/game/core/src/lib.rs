//! Deterministic bingo game logic and data types.
//!
//! `bingo-core` defines the canonical rules (board generation, completion
//! tracking, win detection) and the persisted tag-tree format. All state
//! mutation flows through [`engine::GameEngine`]; hosts that receive events
//! from several threads use [`engine::GameSession`]. Collaborators such as
//! the team registry, goal tables and the sync channel are traits in [`env`].
pub mod codec;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use codec::{CodecError, Compound, IdentifierKind, Tag};
pub use config::GameConfig;
pub use engine::{
    AcquisitionOutcome, AnnounceEffect, CollectionEffect, EffectContext, EffectError,
    EngineError, GameEngine, GameSession, Line, Operation, StartingEffect, WinEffect,
};
pub use env::{
    Catalog, GameEnv, GameMode, Goal, GoalTable, GoalTier, ModeCatalog, NoopSync, PcgRng,
    RngOracle, StaticTeams, SyncChannel, TeamRegistry, TierId, WeightedGoalTable,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Board, CompletionMatrix, Coord, Corner, GamePhase, GameState, GoalItem, PlayerId, Team,
    TeamColor, TeamKey, UNSET_TIME,
};
