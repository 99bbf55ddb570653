//! Team identity as seen by the engine.
//!
//! Teams are owned by the host's team registry; the engine stores only the
//! key and uses the corner to address completion slots.

use std::fmt;

use crate::config::GameConfig;

/// Stable string key used for persistence and display.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TeamKey(String);

impl TeamKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl AsRef<str> for TeamKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Completion slot index in `[0, MAX_CORNERS)` assigned to a team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Corner(u8);

impl Corner {
    pub fn new(index: u8) -> Option<Self> {
        ((index as usize) < GameConfig::MAX_CORNERS).then_some(Self(index))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A team participating in the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    key: TeamKey,
    corner: Corner,
}

impl Team {
    pub fn new(key: impl Into<TeamKey>, corner: Corner) -> Self {
        Self {
            key: key.into(),
            corner,
        }
    }

    pub fn key(&self) -> &TeamKey {
        &self.key
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)
    }
}

/// The four default team colours, in corner order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TeamColor {
    Red,
    Yellow,
    Green,
    Blue,
}

impl TeamColor {
    pub const fn corner(self) -> Corner {
        Corner(self as u8)
    }

    pub fn team(self) -> Team {
        Team::new(TeamKey::new(self.as_ref()), self.corner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn corners_are_bounded() {
        assert!(Corner::new(3).is_some());
        assert!(Corner::new(4).is_none());
    }

    #[test]
    fn colours_map_to_distinct_corners() {
        let corners: Vec<_> = TeamColor::iter().map(|c| c.corner().index()).collect();
        assert_eq!(corners, vec![0, 1, 2, 3]);
        assert_eq!(TeamColor::from_str("BLUE"), Ok(TeamColor::Blue));
        assert_eq!(TeamColor::Green.team().key().as_str(), "green");
    }
}
