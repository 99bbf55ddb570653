//! Persisted representation of a game.
//!
//! [`write`] turns a [`GameState`] into a [`Tag`] tree with a fixed schema:
//!
//! ```text
//! IsActive, HasStarted, GroupTeams, Blackout   byte (0 or 1)
//! StartTime, EndTime                           long, -1 when unset
//! Winner                                       string, omitted without a winner
//! GameMode, GoalTable                          string, omitted without a table
//! Goals        list of { X: int, Y: int, ItemStack: { id: string, Count: byte } }
//! Completion   list of { X: int, Y: int, Teams: list of string }
//! ```
//!
//! `Goals` and `Completion` are only written while both a mode and a table
//! are set, in column-major order (x outer, y inner).
//!
//! [`read`] is lenient. It starts from an inactive default state and overlays
//! whatever it can decode; a field that is absent, malformed or names an
//! unknown mode, table or team falls back to its default and is logged.
//! Goals and completion are only restored when the goal table resolves.

mod error;
mod tag;

pub use error::{CodecError, IdentifierKind};
pub use tag::{Compound, Tag};

use tracing::{debug, warn};

use crate::env::{ModeCatalog, TeamRegistry};
use crate::state::{Board, CompletionMatrix, Coord, GameState, GoalItem, UNSET_TIME};

const IS_ACTIVE: &str = "IsActive";
const HAS_STARTED: &str = "HasStarted";
const GROUP_TEAMS: &str = "GroupTeams";
const BLACKOUT: &str = "Blackout";
const START_TIME: &str = "StartTime";
const END_TIME: &str = "EndTime";
const WINNER: &str = "Winner";
const GAME_MODE: &str = "GameMode";
const GOAL_TABLE: &str = "GoalTable";
const GOALS: &str = "Goals";
const COMPLETION: &str = "Completion";
const X: &str = "X";
const Y: &str = "Y";
const ITEM_STACK: &str = "ItemStack";
const TEAMS: &str = "Teams";
const ITEM_ID: &str = "id";
const ITEM_COUNT: &str = "Count";

/// Serializes `state` into its canonical tag tree.
pub fn write(state: &GameState) -> Tag {
    let mut root = Compound::new();
    root.put_bool(IS_ACTIVE, state.is_active());
    root.put_bool(HAS_STARTED, state.has_started());
    root.put_bool(GROUP_TEAMS, state.group_teams());
    root.put_bool(BLACKOUT, state.blackout());
    root.put_long(START_TIME, state.start_time());
    root.put_long(END_TIME, state.end_time());

    if let Some(winner) = state.winner() {
        root.put_string(WINNER, winner.as_str());
    }

    if let (Some(mode), Some(table)) = (state.mode(), state.table()) {
        root.put_string(GAME_MODE, mode.id());
        root.put_string(GOAL_TABLE, table.name());
        root.put_list(GOALS, write_goals(state.board()));
        root.put_list(COMPLETION, write_completion(state.completion()));
    }

    Tag::Compound(root)
}

fn write_coord(coord: Coord) -> Compound {
    let mut entry = Compound::new();
    entry.put_int(X, i32::from(coord.x()));
    entry.put_int(Y, i32::from(coord.y()));
    entry
}

fn write_goals(board: &Board) -> Vec<Tag> {
    Coord::column_major()
        .filter_map(|coord| {
            let item = board.goal(coord)?;
            let mut entry = write_coord(coord);
            entry.put(ITEM_STACK, write_item(item));
            Some(Tag::Compound(entry))
        })
        .collect()
}

fn write_item(item: &GoalItem) -> Compound {
    let mut stack = Compound::new();
    stack.put_string(ITEM_ID, item.id());
    // Counts above 127 wrap; read casts back, so the value round-trips.
    stack.put_byte(ITEM_COUNT, item.count() as i8);
    stack
}

fn write_completion(matrix: &CompletionMatrix) -> Vec<Tag> {
    Coord::column_major()
        .map(|coord| {
            let mut entry = write_coord(coord);
            let teams = matrix
                .teams_at(coord)
                .map(|key| Tag::from(key.as_str()))
                .collect();
            entry.put_list(TEAMS, teams);
            Tag::Compound(entry)
        })
        .collect()
}

/// Rebuilds a game state from `tag`.
///
/// Identifiers are resolved against `catalog` and `teams`. The game rng is
/// not persisted, so a restored state carries none.
pub fn read(tag: &Tag, catalog: &dyn ModeCatalog, teams: &dyn TeamRegistry) -> GameState {
    let mut state = GameState::new();
    let Some(root) = tag.as_compound() else {
        warn!(found = tag.kind(), "saved game is not a compound, using defaults");
        return state;
    };

    state.is_active = field(root.get_bool(IS_ACTIVE), false);
    state.has_started = field(root.get_bool(HAS_STARTED), false);
    state.group_teams = field(root.get_bool(GROUP_TEAMS), false);
    state.blackout = field(root.get_bool(BLACKOUT), false);
    state.start_time = field(root.get_long(START_TIME), UNSET_TIME);
    state.end_time = field(root.get_long(END_TIME), UNSET_TIME);

    state.winner = resolve(root, WINNER, IdentifierKind::Team, |key| {
        teams.team(key).map(|team| team.key().clone())
    });
    state.mode = resolve(root, GAME_MODE, IdentifierKind::GameMode, |id| {
        catalog.game_mode(id)
    });
    state.table = resolve(root, GOAL_TABLE, IdentifierKind::GoalTable, |name| {
        catalog.goal_table(name)
    });

    if state.table.is_some() {
        read_goals(root, &mut state.board);
        read_completion(root, teams, &mut state.completion);
    }

    debug!(
        phase = %state.phase(),
        goals = state.board.goals().count(),
        "read saved game"
    );
    state
}

/// Unwraps a field read, logging and substituting `default` on failure.
///
/// Absent fields are expected for optional keys and only logged at debug.
fn field<T>(result: Result<T, CodecError>, default: T) -> T {
    match result {
        Ok(value) => value,
        Err(CodecError::MissingField { key }) => {
            debug!(%key, "field absent, using default");
            default
        }
        Err(error) => {
            warn!(%error, "unreadable field, using default");
            default
        }
    }
}

fn resolve<T>(
    root: &Compound,
    key: &str,
    kind: IdentifierKind,
    lookup: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    let id = field(root.get_string(key).map(Some), None)?;
    let resolved = lookup(id);
    if resolved.is_none() {
        let error = CodecError::UnknownIdentifier {
            kind,
            id: id.to_owned(),
        };
        warn!(%error, "dropping unresolved identifier");
    }
    resolved
}

fn entry<'t>(tag: &'t Tag, list: &str) -> Result<&'t Compound, CodecError> {
    tag.as_compound().ok_or_else(|| CodecError::TypeMismatch {
        key: list.to_owned(),
        expected: "compound",
        found: tag.kind(),
    })
}

fn read_coord(entry: &Compound) -> Result<Coord, CodecError> {
    let (x, y) = (entry.get_int(X)?, entry.get_int(Y)?);
    Coord::new(x, y).ok_or(CodecError::OutOfBounds { x, y })
}

fn read_goals(root: &Compound, board: &mut Board) {
    for tag in field(root.get_list(GOALS), Default::default()) {
        match read_goal(tag) {
            Ok((coord, item)) => board.set_goal(coord, item),
            Err(error) => warn!(%error, "skipping goal entry"),
        }
    }
}

fn read_goal(tag: &Tag) -> Result<(Coord, GoalItem), CodecError> {
    let entry = entry(tag, GOALS)?;
    let coord = read_coord(entry)?;
    let stack = entry.get_compound(ITEM_STACK)?;
    let count = match stack.get_byte(ITEM_COUNT) {
        Ok(count) => count as u8,
        Err(CodecError::MissingField { .. }) => 1,
        Err(error) => return Err(error),
    };
    let item = GoalItem::new(stack.get_string(ITEM_ID)?).with_count(count);
    Ok((coord, item))
}

fn read_completion(root: &Compound, teams: &dyn TeamRegistry, matrix: &mut CompletionMatrix) {
    for tag in field(root.get_list(COMPLETION), Default::default()) {
        let (coord, keys) = match read_completion_entry(tag) {
            Ok(parsed) => parsed,
            Err(error) => {
                warn!(%error, "skipping completion entry");
                continue;
            }
        };
        for key in keys {
            let Tag::String(key) = key else {
                warn!(%coord, found = key.kind(), "skipping non-string team key");
                continue;
            };
            match teams.team(key) {
                Some(team) => {
                    matrix.mark(coord, team);
                }
                None => {
                    let error = CodecError::UnknownIdentifier {
                        kind: IdentifierKind::Team,
                        id: key.clone(),
                    };
                    warn!(%coord, %error, "skipping completion for unknown team");
                }
            }
        }
    }
}

fn read_completion_entry(tag: &Tag) -> Result<(Coord, &[Tag]), CodecError> {
    let entry = entry(tag, COMPLETION)?;
    Ok((read_coord(entry)?, entry.get_list(TEAMS)?))
}
