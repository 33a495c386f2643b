//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Index into the game's player registry (0-based).
//!
//! ## PlayerMap
//!
//! `Vec`-backed per-player storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! Mutable per-participant state owned by the engine: hand, pending skips,
//! the picking lock and the low-card bookkeeping.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::card::Card;

/// Player identifier supporting up to 255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

/// Largest number of seats a `PlayerId` can address.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= MAX_PLAYERS, "At most {MAX_PLAYERS} players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Create a map with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's entry, or `None` for an out-of-range id.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A hand of cards. Order carries no meaning.
pub type Hand = SmallVec<[Card; 8]>;

/// Mutable state of one participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand: Hand,
    /// Turns this player still has to sit out.
    pub skip_for: u32,
    /// Held while the player has an open decision.
    pub picking: bool,
    pub is_ai: bool,
    /// Cycle count up to which the player can be reported for an
    /// undeclared last card.
    pub reportable_until: Option<u64>,
    /// Last card announced ahead of the play that leaves it.
    pub declared: bool,
    /// The player left the game. Kept for scoring.
    pub left: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_ai: bool) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            skip_for: 0,
            picking: false,
            is_ai,
            reportable_until: None,
            declared: false,
            left: false,
        }
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Remove one copy of `card`. Returns false if it is not in hand.
    pub fn take_from_hand(&mut self, card: Card) -> bool {
        match self.hand.iter().position(|&c| c == card) {
            Some(position) => {
                self.hand.swap_remove(position);
                true
            }
            None => false,
        }
    }

    /// Add cards to the hand. A hand that grows past one card is no longer
    /// reportable, and any announcement made ahead of time lapses.
    pub fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        let before = self.hand.len();
        self.hand.extend(cards);
        if self.hand.len() > before {
            self.declared = false;
        }
        if self.hand.len() != 1 {
            self.reportable_until = None;
        }
    }

    /// Can the player announce their last card before playing down to it?
    #[must_use]
    pub fn can_declare_ahead(&self) -> bool {
        self.hand.len() == 2 && !self.declared
    }

    /// Is the player still inside the report window at `cycle`?
    #[must_use]
    pub fn is_reportable(&self, cycle: u64) -> bool {
        self.hand.len() == 1 && self.reportable_until.is_some_and(|until| cycle <= until)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
