//! Per-cell, per-corner completion record.

use crate::config::GameConfig;
use crate::state::{Coord, Team, TeamKey};

type Slots = [Option<TeamKey>; GameConfig::MAX_CORNERS];

/// Which teams have completed which cells.
///
/// Each cell has one slot per team corner. A slot goes from empty to
/// occupied at most once per game, and [`CompletionMatrix::mark`] is the only
/// way to occupy one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletionMatrix {
    cells: [Slots; GameConfig::CELL_COUNT],
}

impl CompletionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupies the team's slot at `coord`.
    ///
    /// Returns `false` without touching the matrix when the slot is already
    /// taken, so duplicate acquisition events are harmless.
    pub fn mark(&mut self, coord: Coord, team: &Team) -> bool {
        let slot = &mut self.cells[coord.index()][team.corner().index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(team.key().clone());
        true
    }

    pub fn is_completed(&self, coord: Coord, team: &Team) -> bool {
        self.cells[coord.index()][team.corner().index()].is_some()
    }

    /// True iff the team has completed every cell.
    pub fn team_has_all(&self, team: &Team) -> bool {
        Coord::all().all(|coord| self.is_completed(coord, team))
    }

    /// Teams recorded at `coord`, in corner order.
    pub fn teams_at(&self, coord: Coord) -> impl Iterator<Item = &TeamKey> {
        self.cells[coord.index()].iter().flatten()
    }

    pub fn completed_count(&self, team: &Team) -> usize {
        Coord::all()
            .filter(|coord| self.is_completed(*coord, team))
            .count()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Corner, TeamColor};

    #[test]
    fn mark_is_idempotent() {
        let mut matrix = CompletionMatrix::new();
        let red = TeamColor::Red.team();
        let cell = Coord::at(3, 1);

        assert!(matrix.mark(cell, &red));
        let after_first = matrix.clone();
        assert!(!matrix.mark(cell, &red));
        assert_eq!(matrix, after_first);
        assert!(matrix.is_completed(cell, &red));
    }

    #[test]
    fn occupied_slot_is_never_overwritten() {
        let mut matrix = CompletionMatrix::new();
        let red = TeamColor::Red.team();
        let impostor = Team::new("crimson", Corner::new(0).unwrap());
        let cell = Coord::at(0, 0);

        assert!(matrix.mark(cell, &red));
        assert!(!matrix.mark(cell, &impostor));
        let keys: Vec<_> = matrix.teams_at(cell).map(TeamKey::as_str).collect();
        assert_eq!(keys, vec!["red"]);
    }

    #[test]
    fn teams_share_cells_through_their_corners() {
        let mut matrix = CompletionMatrix::new();
        let cell = Coord::at(2, 2);
        let blue = TeamColor::Blue.team();
        let yellow = TeamColor::Yellow.team();

        assert!(matrix.mark(cell, &blue));
        assert!(matrix.mark(cell, &yellow));

        let keys: Vec<_> = matrix.teams_at(cell).map(TeamKey::as_str).collect();
        assert_eq!(keys, vec!["yellow", "blue"]);
        assert!(!matrix.is_completed(cell, &TeamColor::Red.team()));
    }

    #[test]
    fn team_has_all_requires_every_cell() {
        let mut matrix = CompletionMatrix::new();
        let green = TeamColor::Green.team();

        for coord in Coord::all().skip(1) {
            matrix.mark(coord, &green);
        }
        assert!(!matrix.team_has_all(&green));
        assert_eq!(matrix.completed_count(&green), 24);

        matrix.mark(Coord::ORIGIN, &green);
        assert!(matrix.team_has_all(&green));

        matrix.reset();
        assert_eq!(matrix.completed_count(&green), 0);
    }
}
