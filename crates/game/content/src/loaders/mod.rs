//! Content loaders for reading game data from files.
//!
//! Each loader converts one kind of RON/TOML file into bingo-core types;
//! [`ContentFactory`] ties them together for a data directory.

pub mod config;
pub mod factory;
pub mod modes;
pub mod tables;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use modes::{EffectKind, ModeLoader, ModeSpec};
pub use tables::GoalTableLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
