use crate::state::{Coord, TeamKey};

/// Outbound replication of single-cell completion changes.
///
/// Called once per newly occupied completion slot. The engine does not wait
/// for delivery, so implementations should only enqueue.
pub trait SyncChannel: Send + Sync {
    fn goal_completed(&self, coord: Coord, team: &TeamKey);
}

/// Sync channel for hosts without remote observers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSync;

impl SyncChannel for NoopSync {
    fn goal_completed(&self, _coord: Coord, _team: &TeamKey) {}
}
