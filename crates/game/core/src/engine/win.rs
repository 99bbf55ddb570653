//! Win detection over the completion matrix.

use std::fmt;

use crate::config::GameConfig;
use crate::state::{CompletionMatrix, Coord, Team};

const SIZE: u8 = GameConfig::BOARD_SIZE as u8;

/// A full line of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Line {
    /// Fixed x, varying y.
    Column(u8),
    /// Fixed y, varying x.
    Row(u8),
    /// (0,0) to (4,4).
    Diagonal,
    /// (0,4) to (4,0).
    AntiDiagonal,
}

impl Line {
    /// Every line in evaluation order: columns, rows, diagonal, anti-diagonal.
    pub fn all() -> impl Iterator<Item = Line> {
        (0..SIZE)
            .map(Line::Column)
            .chain((0..SIZE).map(Line::Row))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    pub fn cells(self) -> [Coord; GameConfig::BOARD_SIZE] {
        let mut cells = [Coord::ORIGIN; GameConfig::BOARD_SIZE];
        for (i, cell) in (0..SIZE).zip(cells.iter_mut()) {
            *cell = match self {
                Line::Column(x) => Coord::at(x, i),
                Line::Row(y) => Coord::at(i, y),
                Line::Diagonal => Coord::at(i, i),
                Line::AntiDiagonal => Coord::at(i, SIZE - 1 - i),
            };
        }
        cells
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Column(x) => write!(f, "column {x}"),
            Line::Row(y) => write!(f, "row {y}"),
            Line::Diagonal => f.write_str("diagonal"),
            Line::AntiDiagonal => f.write_str("anti-diagonal"),
        }
    }
}

/// First line the team has fully completed, in evaluation order.
pub fn winning_line(matrix: &CompletionMatrix, team: &Team) -> Option<Line> {
    Line::all().find(|line| {
        line.cells()
            .iter()
            .all(|cell| matrix.is_completed(*cell, team))
    })
}

/// Returns the first team in `teams` order that satisfies the active rule.
///
/// Blackout requires every cell; otherwise any line wins.
pub fn evaluate<'t>(
    matrix: &CompletionMatrix,
    teams: &'t [Team],
    blackout: bool,
) -> Option<&'t Team> {
    teams.iter().find(|team| {
        if blackout {
            matrix.team_has_all(team)
        } else {
            winning_line(matrix, team).is_some()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TeamColor;

    fn teams() -> Vec<Team> {
        vec![
            TeamColor::Red.team(),
            TeamColor::Yellow.team(),
            TeamColor::Green.team(),
            TeamColor::Blue.team(),
        ]
    }

    fn mark_line(matrix: &mut CompletionMatrix, line: Line, team: &Team) {
        for cell in line.cells() {
            matrix.mark(cell, team);
        }
    }

    #[test]
    fn twelve_lines_in_order() {
        let lines: Vec<_> = Line::all().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], Line::Column(0));
        assert_eq!(lines[5], Line::Row(0));
        assert_eq!(lines[10], Line::Diagonal);
        assert_eq!(lines[11], Line::AntiDiagonal);
        assert_eq!(
            Line::AntiDiagonal.cells(),
            [
                Coord::at(0, 4),
                Coord::at(1, 3),
                Coord::at(2, 2),
                Coord::at(3, 1),
                Coord::at(4, 0)
            ]
        );
    }

    #[test]
    fn every_single_line_wins() {
        let teams = teams();
        let red = &teams[0];
        for line in Line::all() {
            let mut matrix = CompletionMatrix::new();
            mark_line(&mut matrix, line, red);

            assert_eq!(winning_line(&matrix, red), Some(line));
            assert_eq!(evaluate(&matrix, &teams, false), Some(red));
        }
    }

    #[test]
    fn four_of_five_never_wins() {
        let teams = teams();
        let green = &teams[2];
        for line in Line::all() {
            for skipped in 0..GameConfig::BOARD_SIZE {
                let mut matrix = CompletionMatrix::new();
                for (i, cell) in line.cells().into_iter().enumerate() {
                    if i != skipped {
                        matrix.mark(cell, green);
                    }
                }
                assert_eq!(evaluate(&matrix, &teams, false), None, "{line} without {skipped}");
            }
        }
    }

    #[test]
    fn row_two_wins_for_red() {
        let teams = teams();
        let mut matrix = CompletionMatrix::new();
        for x in 0..5 {
            matrix.mark(Coord::new(x, 2).unwrap(), &teams[0]);
        }

        let winner = evaluate(&matrix, &teams, false).map(|t| t.key().as_str());
        assert_eq!(winner, Some("red"));
        assert_eq!(winning_line(&matrix, &teams[0]), Some(Line::Row(2)));
    }

    #[test]
    fn diagonal_needs_the_fifth_cell() {
        let teams = teams();
        let blue = &teams[3];
        let mut matrix = CompletionMatrix::new();
        for i in 0..4 {
            matrix.mark(Coord::new(i, i).unwrap(), blue);
        }
        assert_eq!(evaluate(&matrix, &teams, false), None);

        matrix.mark(Coord::new(4, 4).unwrap(), blue);
        assert_eq!(evaluate(&matrix, &teams, false), Some(blue));
    }

    #[test]
    fn lines_do_not_count_in_blackout() {
        let teams = teams();
        let mut matrix = CompletionMatrix::new();
        mark_line(&mut matrix, Line::Column(3), &teams[1]);

        assert_eq!(evaluate(&matrix, &teams, true), None);
        assert_eq!(evaluate(&matrix, &teams, false), Some(&teams[1]));
    }

    #[test]
    fn blackout_is_per_team_and_ties_go_to_registry_order() {
        let teams = teams();
        let (yellow, blue) = (&teams[1], &teams[3]);
        let mut matrix = CompletionMatrix::new();
        for cell in Coord::all() {
            matrix.mark(cell, blue);
        }
        assert_eq!(evaluate(&matrix, &teams, true), Some(blue));

        for cell in Coord::all() {
            matrix.mark(cell, yellow);
        }
        assert_eq!(evaluate(&matrix, &teams, true), Some(yellow));

        let reversed: Vec<_> = teams.iter().rev().cloned().collect();
        assert_eq!(evaluate(&matrix, &reversed, true), Some(&reversed[0]));
        assert_eq!(reversed[0].key().as_str(), "blue");
    }

    #[test]
    fn other_teams_marks_do_not_help() {
        let teams = teams();
        let mut matrix = CompletionMatrix::new();
        for (i, cell) in Line::Row(0).cells().into_iter().enumerate() {
            let team = if i == 0 { &teams[1] } else { &teams[0] };
            matrix.mark(cell, team);
        }
        assert_eq!(evaluate(&matrix, &teams, false), None);
    }
}
