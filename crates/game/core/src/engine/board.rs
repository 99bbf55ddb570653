//! Board generation from a goal table.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::config::GameConfig;
use crate::engine::EngineError;
use crate::env::{GoalTable, RngOracle};
use crate::state::{Board, GoalItem};

/// Draws 25 distinct goals from `table`, shuffles them with `rng` and lays
/// them out in placement order.
///
/// A sample whose item is already on the board is rejected and redrawn.
/// Every sample counts towards `max_draws`; hitting the cap returns
/// [`EngineError::InsufficientGoalPool`].
pub fn generate(
    table: &dyn GoalTable,
    rng: &mut dyn RngOracle,
    max_draws: u32,
) -> Result<Board, EngineError> {
    let mut accepted: ArrayVec<GoalItem, { GameConfig::CELL_COUNT }> = ArrayVec::new();
    let mut draws = 0u32;

    while !accepted.is_full() {
        if draws >= max_draws {
            return Err(EngineError::InsufficientGoalPool {
                table: table.name().to_owned(),
                accepted: accepted.len(),
                draws,
            });
        }
        draws += 1;

        let tier = table.random_tier(rng);
        let Some(goal) = table.random_goal(tier, rng) else {
            continue;
        };
        if accepted.iter().any(|item| item.same_item(&goal.target)) {
            continue;
        }
        accepted.push(goal.target);
    }

    shuffle(&mut accepted, rng);
    debug!(table = table.name(), draws, "generated bingo board");

    Ok(Board::from_items(accepted))
}

/// Fisher–Yates shuffle driven by the game rng.
fn shuffle<T>(items: &mut [T], rng: &mut dyn RngOracle) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i as u32 + 1) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{GoalTier, PcgRng, WeightedGoalTable};

    fn table(distinct: usize) -> WeightedGoalTable {
        let common = (0..distinct / 2)
            .map(|i| GoalItem::new(format!("test:common_{i}")))
            .collect();
        let rare = (distinct / 2..distinct)
            .map(|i| GoalItem::new(format!("test:rare_{i}")))
            .collect();
        WeightedGoalTable::new(
            "test",
            vec![GoalTier::new("common", 3, common), GoalTier::new("rare", 1, rare)],
        )
    }

    #[test]
    fn board_goals_are_pairwise_distinct() {
        let table = table(40);
        for seed in 0..20 {
            let board = generate(&table, &mut PcgRng::seeded(seed), 10_000).unwrap();
            assert!(board.is_filled());

            let goals: Vec<_> = board.goals().map(|(_, item)| item).collect();
            for (i, a) in goals.iter().enumerate() {
                for b in &goals[i + 1..] {
                    assert!(!a.same_item(b), "duplicate {a} with seed {seed}");
                }
            }
        }
    }

    #[test]
    fn exactly_25_goals_fill_the_board() {
        let table = table(25);
        let board = generate(&table, &mut PcgRng::seeded(8), 100_000).unwrap();
        assert_eq!(board.goals().count(), 25);
    }

    #[test]
    fn same_seed_same_board() {
        let table = table(60);
        let a = generate(&table, &mut PcgRng::seeded(1234), 10_000).unwrap();
        let b = generate(&table, &mut PcgRng::seeded(1234), 10_000).unwrap();
        let c = generate(&table, &mut PcgRng::seeded(4321), 10_000).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn small_pool_reports_insufficient_goals() {
        let table = table(10);
        let err = generate(&table, &mut PcgRng::seeded(2), 500).unwrap_err();

        match err {
            EngineError::InsufficientGoalPool {
                table,
                accepted,
                draws,
            } => {
                assert_eq!(table, "test");
                assert_eq!(accepted, 10);
                assert_eq!(draws, 500);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut items: Vec<u32> = (0..25).collect();
        shuffle(&mut items, &mut PcgRng::seeded(77));
        assert_ne!(items, (0..25).collect::<Vec<_>>());

        items.sort_unstable();
        assert_eq!(items, (0..25).collect::<Vec<_>>());
    }
}
