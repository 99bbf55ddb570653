//! Content factory for building a catalog from data files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bingo_core::{Catalog, GameConfig, GoalTable, WeightedGoalTable};
use tracing::info;

use crate::loaders::{ConfigLoader, GoalTableLoader, LoadResult, ModeLoader, ModeSpec};

/// Content factory that loads all bingo content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── modes.toml
/// └── tables/
///     ├── overworld.toml
///     └── nether.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load every goal table under `tables/`.
    pub fn load_tables(&self) -> LoadResult<Vec<WeightedGoalTable>> {
        GoalTableLoader::load_dir(&self.data_dir.join("tables"))
    }

    /// Load mode definitions from `modes.toml`.
    pub fn load_modes(&self) -> LoadResult<Vec<ModeSpec>> {
        let path = self.data_dir.join("modes.toml");
        ModeLoader::load(&path)
    }

    /// Loads tables and modes and registers them in a fresh [`Catalog`].
    ///
    /// Tables not referenced by any mode are registered too, so saved games
    /// naming them still resolve.
    pub fn build_catalog(&self) -> LoadResult<Catalog> {
        let tables: HashMap<String, Arc<dyn GoalTable>> = self
            .load_tables()?
            .into_iter()
            .map(|table| {
                let table: Arc<dyn GoalTable> = Arc::new(table);
                (table.name().to_owned(), table)
            })
            .collect();

        let mut catalog = Catalog::new();
        for table in tables.values() {
            catalog.register_table(Arc::clone(table));
        }

        let specs = self.load_modes()?;
        for spec in &specs {
            catalog.register_mode(spec.build(&tables)?);
        }

        info!(
            data_dir = %self.data_dir.display(),
            modes = specs.len(),
            tables = tables.len(),
            "loaded bingo content"
        );
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
