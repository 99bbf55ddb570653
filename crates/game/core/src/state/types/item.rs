//! Goal item identity.

use std::fmt;

/// Target item a team has to acquire to complete a cell.
///
/// Identity is the namespaced item id (e.g. `minecraft:diamond`). The stack
/// count is carried through saves but ignored when matching acquisitions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalItem {
    id: String,
    #[cfg_attr(feature = "serde", serde(default = "GoalItem::default_count"))]
    count: u8,
}

impl GoalItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            count: Self::default_count(),
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: u8) -> Self {
        self.count = count;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    /// Exact identity match used for acquisitions and duplicate rejection.
    pub fn same_item(&self, other: &GoalItem) -> bool {
        self.id == other.id
    }

    const fn default_count() -> u8 {
        1
    }
}

impl fmt::Display for GoalItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count > 1 {
            write!(f, "{}x {}", self.count, self.id)
        } else {
            f.write_str(&self.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_ignores_count() {
        let single = GoalItem::new("minecraft:apple");
        let stack = GoalItem::new("minecraft:apple").with_count(16);

        assert!(single.same_item(&stack));
        assert_ne!(single, stack);
        assert!(!single.same_item(&GoalItem::new("minecraft:golden_apple")));
    }
}
