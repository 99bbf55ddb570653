pub mod common;
pub mod item;
pub mod team;

pub use common::{Coord, PlayerId};
pub use item::GoalItem;
pub use team::{Corner, Team, TeamColor, TeamKey};
