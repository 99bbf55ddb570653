//! Game mode loader.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use bingo_core::{AnnounceEffect, GameMode, GoalTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Built-in effect hooks a mode file can reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Logs start, collection and win events.
    Announce,
}

/// One mode as written in `modes.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeSpec {
    pub id: String,
    /// Goal table names; a board is drawn from one of them at random.
    pub tables: Vec<String>,
    #[serde(default)]
    pub starting_effects: Vec<EffectKind>,
    #[serde(default)]
    pub collection_effects: Vec<EffectKind>,
    #[serde(default)]
    pub win_effects: Vec<EffectKind>,
}

impl ModeSpec {
    /// Resolves table names against `tables` and attaches the effects.
    pub fn build(&self, tables: &HashMap<String, Arc<dyn GoalTable>>) -> LoadResult<GameMode> {
        if self.tables.is_empty() {
            anyhow::bail!("Game mode '{}' lists no goal tables", self.id);
        }

        let mut mode = GameMode::new(&self.id);
        for name in &self.tables {
            let table = tables.get(name).ok_or_else(|| {
                anyhow::anyhow!("Game mode '{}' references unknown goal table '{}'", self.id, name)
            })?;
            mode = mode.with_table(Arc::clone(table));
        }
        for kind in &self.starting_effects {
            mode = match kind {
                EffectKind::Announce => mode.with_starting_effect(Arc::new(AnnounceEffect)),
            };
        }
        for kind in &self.collection_effects {
            mode = match kind {
                EffectKind::Announce => mode.with_collection_effect(Arc::new(AnnounceEffect)),
            };
        }
        for kind in &self.win_effects {
            mode = match kind {
                EffectKind::Announce => mode.with_win_effect(Arc::new(AnnounceEffect)),
            };
        }
        Ok(mode)
    }
}

/// Mode file structure for TOML files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeCatalogFile {
    pub modes: Vec<ModeSpec>,
}

/// Loader for game modes from TOML files.
pub struct ModeLoader;

impl ModeLoader {
    /// Load mode definitions from a TOML file.
    ///
    /// ```toml
    /// [[modes]]
    /// id = "bingo:default"
    /// tables = ["bingo:overworld"]
    /// win_effects = ["announce"]
    /// ```
    pub fn load(path: &Path) -> LoadResult<Vec<ModeSpec>> {
        let content = read_file(path)?;
        let file: ModeCatalogFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse modes TOML: {}", e))?;

        Ok(file.modes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingo_core::{GoalItem, GoalTier, WeightedGoalTable};

    fn tables() -> HashMap<String, Arc<dyn GoalTable>> {
        let table: Arc<dyn GoalTable> = Arc::new(WeightedGoalTable::new(
            "bingo:overworld",
            vec![GoalTier::new("all", 1, vec![GoalItem::new("minecraft:dirt")])],
        ));
        HashMap::from([("bingo:overworld".to_owned(), table)])
    }

    #[test]
    fn parses_and_builds_modes() {
        let file: ModeCatalogFile = toml::from_str(
            r#"
            [[modes]]
            id = "bingo:default"
            tables = ["bingo:overworld"]
            collection_effects = ["announce"]
            win_effects = ["announce"]
            "#,
        )
        .unwrap();

        let spec = &file.modes[0];
        assert!(spec.starting_effects.is_empty());
        assert_eq!(spec.win_effects, vec![EffectKind::Announce]);

        let mode = spec.build(&tables()).unwrap();
        assert_eq!(mode.id(), "bingo:default");
        assert_eq!(mode.tables().len(), 1);
        assert_eq!(mode.collection_effects().len(), 1);
        assert_eq!(mode.win_effects()[0].name(), "announce");
    }

    #[test]
    fn unknown_table_is_an_error() {
        let spec = ModeSpec {
            id: "bingo:broken".into(),
            tables: vec!["bingo:nether".into()],
            starting_effects: Vec::new(),
            collection_effects: Vec::new(),
            win_effects: Vec::new(),
        };

        let err = spec.build(&tables()).unwrap_err();
        assert!(err.to_string().contains("bingo:nether"));
    }

    #[test]
    fn unknown_effect_fails_to_parse() {
        let result: Result<ModeCatalogFile, _> = toml::from_str(
            r#"
            [[modes]]
            id = "bingo:default"
            tables = ["bingo:overworld"]
            win_effects = ["fireworks"]
            "#,
        );
        assert!(result.is_err());
    }
}
