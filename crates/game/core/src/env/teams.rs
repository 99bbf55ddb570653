use strum::IntoEnumIterator;

use crate::state::{Team, TeamColor};

/// Oracle exposing the host's teams.
///
/// Iteration order matters: when several teams satisfy the win rule at the
/// same moment, the first one in [`TeamRegistry::teams`] wins.
pub trait TeamRegistry: Send + Sync {
    fn teams(&self) -> &[Team];

    fn team(&self, key: &str) -> Option<&Team> {
        self.teams().iter().find(|team| team.key().as_str() == key)
    }
}

/// Fixed, in-memory team list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticTeams {
    teams: Vec<Team>,
}

impl StaticTeams {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    /// Red, yellow, green and blue in corners 0 to 3.
    pub fn standard() -> Self {
        Self::new(TeamColor::iter().map(TeamColor::team).collect())
    }
}

impl TeamRegistry for StaticTeams {
    fn teams(&self) -> &[Team] {
        &self.teams
    }
}
