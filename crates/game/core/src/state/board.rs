//! The 5×5 goal grid.

use crate::config::GameConfig;
use crate::state::{Coord, GoalItem};

/// Goal items laid out on the board, indexed by [`Coord`].
///
/// A freshly created game fills every cell; cells are only `None` on an
/// inactive state or after restoring a save with missing entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Option<GoalItem>; GameConfig::CELL_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Places items in placement order (see [`Coord::all`]).
    ///
    /// Extra items beyond the last cell are ignored.
    pub fn from_items(items: impl IntoIterator<Item = GoalItem>) -> Self {
        let mut board = Self::empty();
        for (coord, item) in Coord::all().zip(items) {
            board.set_goal(coord, item);
        }
        board
    }

    pub fn goal(&self, coord: Coord) -> Option<&GoalItem> {
        self.cells[coord.index()].as_ref()
    }

    pub(crate) fn set_goal(&mut self, coord: Coord, item: GoalItem) {
        self.cells[coord.index()] = Some(item);
    }

    /// All cells whose goal is the same item as `item`.
    pub fn matching<'a>(&'a self, item: &'a GoalItem) -> impl Iterator<Item = Coord> + 'a {
        self.goals()
            .filter(move |(_, goal)| goal.same_item(item))
            .map(|(coord, _)| coord)
    }

    /// Populated cells in placement order.
    pub fn goals(&self) -> impl Iterator<Item = (Coord, &GoalItem)> {
        Coord::all().filter_map(|coord| self.goal(coord).map(|goal| (coord, goal)))
    }

    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        *self = Self::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(n: usize) -> GoalItem {
        GoalItem::new(format!("test:item_{n}"))
    }

    #[test]
    fn from_items_fills_row_major() {
        let board = Board::from_items((0..25).map(item));

        assert!(board.is_filled());
        assert_eq!(board.goal(Coord::at(1, 0)), Some(&item(1)));
        assert_eq!(board.goal(Coord::at(0, 1)), Some(&item(5)));
        assert_eq!(board.goal(Coord::at(4, 4)), Some(&item(24)));
    }

    #[test]
    fn matching_uses_item_identity() {
        let board = Board::from_items((0..25).map(item));
        let stack = item(7).with_count(3);

        let found: Vec<_> = board.matching(&stack).collect();
        assert_eq!(found, vec![Coord::at(2, 1)]);
        assert_eq!(board.matching(&item(99)).count(), 0);
    }

    #[test]
    fn partial_board_is_not_filled() {
        let mut board = Board::from_items((0..3).map(item));
        assert!(!board.is_filled());
        assert_eq!(board.goals().count(), 3);

        board.clear();
        assert_eq!(board.goals().count(), 0);
    }
}
