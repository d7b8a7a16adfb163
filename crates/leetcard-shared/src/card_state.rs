//! Fetch/render lifecycle for the stats card.
//!
//! `Loading → Loaded | Failed`. Both outcomes are terminal: a resolution
//! arriving after the card has settled is dropped, so a stale fetch can
//! never overwrite a settled card.

use tracing::warn;

use crate::error::FetchError;
use crate::snapshot::StatsSnapshot;

#[derive(Debug)]
pub enum CardState {
    Loading,
    Loaded(StatsSnapshot),
    Failed(FetchError),
}

impl CardState {
    pub fn new() -> Self {
        CardState::Loading
    }

    /// Apply the fetch outcome. No-op once settled.
    pub fn resolve(&mut self, outcome: Result<StatsSnapshot, FetchError>) {
        if self.is_settled() {
            warn!("dropping stale fetch resolution");
            return;
        }
        *self = match outcome {
            Ok(snapshot) => CardState::Loaded(snapshot),
            Err(err) => CardState::Failed(err),
        };
    }

    /// Has the card left `Loading`?
    pub fn is_settled(&self) -> bool {
        !matches!(self, CardState::Loading)
    }

    /// The snapshot, if the fetch succeeded.
    pub fn snapshot(&self) -> Option<&StatsSnapshot> {
        match self {
            CardState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new()
    }
}
