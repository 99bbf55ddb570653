//! Data-driven bingo content and loaders.
//!
//! This crate reads the content a host needs to run games from RON/TOML data
//! files:
//! - Goal tables (weighted tiers of goal items, RON or TOML)
//! - Game modes (tables plus effect hooks, TOML)
//! - Game configuration (TOML)
//!
//! Content is resolved into a [`bingo_core::Catalog`] and never appears in
//! game state except by identifier.
//!
//! All loaders use bingo-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EffectKind, GoalTableLoader, LoadResult, ModeLoader, ModeSpec,
};
