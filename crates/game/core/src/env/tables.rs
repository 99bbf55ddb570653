//! Goal pool: weighted tiers of goal items.

use std::fmt;

use crate::env::RngOracle;
use crate::state::GoalItem;

/// Index of a tier within its goal table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierId(pub u16);

/// A goal drawn from a table: the item to acquire and the tier it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Goal {
    pub tier: TierId,
    pub target: GoalItem,
}

/// Oracle sampling goals for board generation.
///
/// Sampling is two-step, tier then goal, and both steps draw from the
/// caller's rng so the board stays reproducible from the game seed.
pub trait GoalTable: Send + Sync + fmt::Debug {
    /// Stable name used in saved games.
    fn name(&self) -> &str;

    fn random_tier(&self, rng: &mut dyn RngOracle) -> TierId;

    /// Samples a goal from `tier`, or `None` if the tier has nothing to offer.
    fn random_goal(&self, tier: TierId, rng: &mut dyn RngOracle) -> Option<Goal>;
}

/// One rarity tier: a weight relative to sibling tiers and its goal items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalTier {
    pub name: String,
    pub weight: u32,
    pub goals: Vec<GoalItem>,
}

impl GoalTier {
    pub fn new(name: impl Into<String>, weight: u32, goals: Vec<GoalItem>) -> Self {
        Self {
            name: name.into(),
            weight,
            goals,
        }
    }
}

/// Goal table backed by weighted tiers; goals within a tier are uniform.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedGoalTable {
    pub name: String,
    pub tiers: Vec<GoalTier>,
}

impl WeightedGoalTable {
    pub fn new(name: impl Into<String>, tiers: Vec<GoalTier>) -> Self {
        Self {
            name: name.into(),
            tiers,
        }
    }

    /// Number of distinct goal items across all tiers.
    pub fn distinct_goals(&self) -> usize {
        let mut seen: Vec<&GoalItem> = Vec::new();
        for goal in self.tiers.iter().flat_map(|tier| &tier.goals) {
            if !seen.iter().any(|other| other.same_item(goal)) {
                seen.push(goal);
            }
        }
        seen.len()
    }

    fn total_weight(&self) -> u32 {
        self.tiers
            .iter()
            .fold(0u32, |sum, tier| sum.saturating_add(tier.weight))
    }
}

impl GoalTable for WeightedGoalTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn random_tier(&self, rng: &mut dyn RngOracle) -> TierId {
        let total = self.total_weight();
        if total == 0 {
            return TierId(0);
        }

        let mut roll = rng.below(total);
        for (index, tier) in self.tiers.iter().enumerate() {
            if roll < tier.weight {
                return TierId(index as u16);
            }
            roll -= tier.weight;
        }
        // Only reachable when weights saturated the sum.
        TierId(self.tiers.len().saturating_sub(1) as u16)
    }

    fn random_goal(&self, tier: TierId, rng: &mut dyn RngOracle) -> Option<Goal> {
        let goals = &self.tiers.get(tier.0 as usize)?.goals;
        if goals.is_empty() {
            return None;
        }
        let pick = rng.below(goals.len() as u32) as usize;
        Some(Goal {
            tier,
            target: goals[pick].clone(),
        })
    }
}
