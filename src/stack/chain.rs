use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Rank};

/// An in-progress chain of stackable cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackingContext {
    rank: Rank,
    target: PlayerId,
    count: u32,
    /// Player whose Nine opened the chain and reversed the turn order.
    origin: Option<PlayerId>,
}

impl StackingContext {
    /// Open a chain with its first link.
    #[must_use]
    pub fn open(rank: Rank, target: PlayerId, origin: Option<PlayerId>) -> Self {
        debug_assert!(rank.stack_penalty() > 0, "{rank} cannot stack");
        Self {
            rank,
            target,
            count: 1,
            origin,
        }
    }

    /// Add a link and hand the liability to `target`.
    pub fn extend(&mut self, target: PlayerId) {
        self.count += 1;
        self.target = target;
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The player who pays if the chain resolves now.
    #[must_use]
    pub fn target(&self) -> PlayerId {
        self.target
    }

    /// Number of links.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn origin(&self) -> Option<PlayerId> {
        self.origin
    }

    /// Hand the liability to `target` without adding a link.
    pub fn retarget(&mut self, target: PlayerId) {
        self.target = target;
    }

    /// Cards the target draws on resolution.
    #[must_use]
    pub fn penalty(&self) -> u32 {
        self.rank.stack_penalty() * self.count
    }
}
