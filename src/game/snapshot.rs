//! Serializable views of a game for rendering.
//!
//! A snapshot never contains another player's cards: only hand sizes, plus
//! the viewer's own hand when one is given.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Direction, PlayerId, Suit};
use crate::stack::StackingContext;

/// Character budget for the log lines embedded in a snapshot.
pub const LOG_BUDGET: usize = 1_000;

/// Public information about one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub cards: usize,
    pub is_ai: bool,
    pub skip_for: u32,
    pub left: bool,
}

/// Point-in-time view of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub round: u64,
    pub current: Option<PlayerId>,
    /// Player with an open decision.
    pub deciding: Option<PlayerId>,
    pub winner: Option<PlayerId>,
    pub aborted: bool,
    pub table: Card,
    pub required_suit: Option<Suit>,
    pub stack: Option<StackingContext>,
    pub direction: Direction,
    /// Remaining players starting with the current one.
    pub turn_order: Vec<PlayerId>,
    pub players: Vec<PlayerView>,
    pub deck_size: usize,
    /// The viewer's own hand.
    pub hand: Option<Vec<Card>>,
    /// Most recent log lines first.
    pub log: Vec<String>,
}

impl Snapshot {
    /// Encode with bincode for shipping to a host process.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|view| view.id == id)
    }
}
