//! Goal table loader.

use std::path::Path;

use bingo_core::{GameConfig, WeightedGoalTable};
use tracing::{debug, warn};

use crate::loaders::{LoadResult, read_file};

/// Loader for weighted goal tables from RON or TOML files.
///
/// The format is chosen by file extension. A RON table looks like:
///
/// ```ron
/// (
///     name: "bingo:nether",
///     tiers: [
///         (name: "common", weight: 6, goals: [(id: "minecraft:netherrack")]),
///         (name: "rare", weight: 1, goals: [(id: "minecraft:ghast_tear", count: 1)]),
///     ],
/// )
/// ```
///
/// and the same table in TOML:
///
/// ```toml
/// name = "bingo:nether"
///
/// [[tiers]]
/// name = "common"
/// weight = 6
/// goals = [{ id = "minecraft:netherrack" }]
/// ```
pub struct GoalTableLoader;

impl GoalTableLoader {
    /// Load a single goal table.
    pub fn load(path: &Path) -> LoadResult<WeightedGoalTable> {
        let content = read_file(path)?;
        let table: WeightedGoalTable = match extension(path) {
            Some("ron") => ron::from_str(&content).map_err(|e| {
                anyhow::anyhow!("Failed to parse goal table RON at {:?}: {}", path, e)
            })?,
            Some("toml") => toml::from_str(&content).map_err(|e| {
                anyhow::anyhow!("Failed to parse goal table TOML at {:?}: {}", path, e)
            })?,
            _ => anyhow::bail!("Unsupported goal table format: {}", path.display()),
        };

        if table.tiers.iter().all(|tier| tier.weight == 0) {
            anyhow::bail!("Goal table '{}' has no tier with a positive weight", table.name);
        }

        let distinct = table.distinct_goals();
        if distinct < GameConfig::CELL_COUNT {
            // Still loadable; creating a game from it fails once the draw cap is hit.
            warn!(
                table = %table.name,
                distinct,
                "goal table cannot fill a board"
            );
        }
        debug!(table = %table.name, tiers = table.tiers.len(), distinct, "loaded goal table");

        Ok(table)
    }

    /// Load every `.ron` and `.toml` table in `dir`, sorted by file name.
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<WeightedGoalTable>> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if matches!(extension(&path), Some("ron" | "toml")) {
                paths.push(path);
            }
        }
        paths.sort();

        let tables = paths
            .iter()
            .map(|path| Self::load(path))
            .collect::<LoadResult<Vec<_>>>()?;

        for (i, table) in tables.iter().enumerate() {
            if tables[..i].iter().any(|other| other.name == table.name) {
                anyhow::bail!("Duplicate goal table name '{}' in {}", table.name, dir.display());
            }
        }

        Ok(tables)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
