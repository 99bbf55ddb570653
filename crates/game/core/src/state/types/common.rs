use std::fmt;

use crate::config::GameConfig;

const SIZE: u8 = GameConfig::BOARD_SIZE as u8;

/// Cell position on the bingo board.
///
/// Both axes are in `[0, BOARD_SIZE)`. The only public constructors are
/// checked, so every `Coord` in circulation indexes a real cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Returns the coordinate, or `None` when either axis is off the board.
    pub fn new(x: i32, y: i32) -> Option<Self> {
        let in_range = |v: i32| (0..SIZE as i32).contains(&v);
        (in_range(x) && in_range(y)).then(|| Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Builds a coordinate the caller has already range-checked.
    pub(crate) const fn at(x: u8, y: u8) -> Self {
        debug_assert!(x < SIZE && y < SIZE);
        Self { x, y }
    }

    /// Row-major cell index (x varies fastest).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < GameConfig::CELL_COUNT).then(|| Self {
            x: (index % GameConfig::BOARD_SIZE) as u8,
            y: (index / GameConfig::BOARD_SIZE) as u8,
        })
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.y as usize * GameConfig::BOARD_SIZE + self.x as usize
    }

    /// Every cell in placement order: x = 0..5 for y = 0, then y = 1, and so on.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|y| (0..SIZE).map(move |x| Coord::at(x, y)))
    }

    /// Every cell with x as the outer loop. This is the order saved data uses.
    pub fn column_major() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|x| (0..SIZE).map(move |y| Coord::at(x, y)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identifier of the player who triggered an acquisition.
///
/// Players are owned by the host; the engine only forwards the id to
/// collection effects.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_off_board_coordinates() {
        assert!(Coord::new(-1, 0).is_none());
        assert!(Coord::new(0, 5).is_none());
        assert!(Coord::new(5, 5).is_none());
        assert_eq!(Coord::new(4, 4).map(Coord::index), Some(24));
    }

    #[test]
    fn placement_order_is_x_fastest() {
        let first: Vec<_> = Coord::all().take(6).map(|c| (c.x(), c.y())).collect();
        assert_eq!(first, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 1)]);

        for (index, coord) in Coord::all().enumerate() {
            assert_eq!(coord.index(), index);
            assert_eq!(Coord::from_index(index), Some(coord));
        }
        assert!(Coord::from_index(25).is_none());
    }

    #[test]
    fn column_major_visits_every_cell_once() {
        let mut seen: Vec<_> = Coord::column_major().collect();
        assert_eq!(seen[1], Coord::at(0, 1));
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), GameConfig::CELL_COUNT);
    }
}
