//! Game modes and the catalog used to resolve saved identifiers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::engine::{CollectionEffect, StartingEffect, WinEffect};
use crate::env::{GoalTable, RngOracle};

/// Rule set for a game: which goal tables it draws boards from and which
/// effects fire at start, on collection and on a win.
#[derive(Clone)]
pub struct GameMode {
    id: String,
    tables: Vec<Arc<dyn GoalTable>>,
    starting_effects: Vec<Arc<dyn StartingEffect>>,
    collection_effects: Vec<Arc<dyn CollectionEffect>>,
    win_effects: Vec<Arc<dyn WinEffect>>,
}

impl GameMode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tables: Vec::new(),
            starting_effects: Vec::new(),
            collection_effects: Vec::new(),
            win_effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_table(mut self, table: Arc<dyn GoalTable>) -> Self {
        self.tables.push(table);
        self
    }

    #[must_use]
    pub fn with_starting_effect(mut self, effect: Arc<dyn StartingEffect>) -> Self {
        self.starting_effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_collection_effect(mut self, effect: Arc<dyn CollectionEffect>) -> Self {
        self.collection_effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_win_effect(mut self, effect: Arc<dyn WinEffect>) -> Self {
        self.win_effects.push(effect);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tables(&self) -> &[Arc<dyn GoalTable>] {
        &self.tables
    }

    /// Picks one of the mode's tables uniformly, or `None` if it has none.
    pub fn random_table(&self, rng: &mut dyn RngOracle) -> Option<Arc<dyn GoalTable>> {
        if self.tables.is_empty() {
            return None;
        }
        let index = rng.below(self.tables.len() as u32) as usize;
        self.tables.get(index).cloned()
    }

    pub fn starting_effects(&self) -> &[Arc<dyn StartingEffect>] {
        &self.starting_effects
    }

    pub fn collection_effects(&self) -> &[Arc<dyn CollectionEffect>] {
        &self.collection_effects
    }

    pub fn win_effects(&self) -> &[Arc<dyn WinEffect>] {
        &self.win_effects
    }
}

impl fmt::Debug for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameMode")
            .field("id", &self.id)
            .field(
                "tables",
                &self.tables.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .field(
                "starting_effects",
                &self.starting_effects.iter().map(|e| e.name()).collect::<Vec<_>>(),
            )
            .field(
                "collection_effects",
                &self
                    .collection_effects
                    .iter()
                    .map(|e| e.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "win_effects",
                &self.win_effects.iter().map(|e| e.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Oracle resolving mode ids and goal-table names found in saved games.
pub trait ModeCatalog: Send + Sync {
    fn game_mode(&self, id: &str) -> Option<Arc<GameMode>>;

    fn goal_table(&self, name: &str) -> Option<Arc<dyn GoalTable>>;
}

/// In-memory catalog.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    modes: HashMap<String, Arc<GameMode>>,
    tables: HashMap<String, Arc<dyn GoalTable>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a mode together with every table it references.
    pub fn register_mode(&mut self, mode: GameMode) -> Arc<GameMode> {
        for table in mode.tables() {
            self.register_table(Arc::clone(table));
        }
        let mode = Arc::new(mode);
        self.modes.insert(mode.id().to_owned(), Arc::clone(&mode));
        mode
    }

    pub fn register_table(&mut self, table: Arc<dyn GoalTable>) {
        self.tables.insert(table.name().to_owned(), table);
    }

    pub fn mode_ids(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl ModeCatalog for Catalog {
    fn game_mode(&self, id: &str) -> Option<Arc<GameMode>> {
        self.modes.get(id).cloned()
    }

    fn goal_table(&self, name: &str) -> Option<Arc<dyn GoalTable>> {
        self.tables.get(name).cloned()
    }
}
