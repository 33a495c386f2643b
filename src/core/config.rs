//! Game configuration.
//!
//! Hosts build a `GameConfig` (or deserialize one) before creating a game.
//! All fields have defaults, so a partial document is enough:
//!
//! ```
//! use maumau::core::{GameConfig, DiscardPolicy};
//!
//! let config = GameConfig::default()
//!     .with_min_players(4)
//!     .with_hand_size(7)
//!     .with_discard(DiscardPolicy::Pile)
//!     .with_seed(42);
//!
//! assert_eq!(config.deck_multiplier_for(4), 1);
//! assert_eq!(config.deck_multiplier_for(9), 3);
//! ```

use serde::{Deserialize, Serialize};

use super::deck::DiscardPolicy;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Games with fewer players are filled up with AI players.
    pub min_players: usize,

    /// Starting hand size.
    pub hand_size: usize,

    /// Jokers added to every standard deck (0-2).
    pub jokers_per_deck: u8,

    /// Number of standard decks. `None` derives it from the player count.
    pub deck_multiplier: Option<usize>,

    /// Where cards go once they are covered on the table.
    pub discard: DiscardPolicy,

    /// Recycle the discard pile when the deck runs out.
    pub infinite: bool,

    /// Cards drawn for a missed declaration, or by a false reporter.
    pub report_penalty: usize,

    /// Turn advances during which a one-card player can be reported.
    pub report_window: u64,

    /// Probability that an AI declares its last card.
    pub ai_declare_chance: f64,

    /// Maximum entries kept in the event log.
    pub log_capacity: usize,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            hand_size: 5,
            jokers_per_deck: 2,
            deck_multiplier: None,
            discard: DiscardPolicy::Bury,
            infinite: true,
            report_penalty: 2,
            report_window: 2,
            ai_declare_chance: 0.2,
            log_capacity: 50,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Number of standard decks for `player_count` players.
    #[must_use]
    pub fn deck_multiplier_for(&self, player_count: usize) -> usize {
        self.deck_multiplier
            .unwrap_or(player_count / 3)
            .max(1)
    }

    #[must_use]
    pub fn with_min_players(mut self, count: usize) -> Self {
        self.min_players = count;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers_per_deck = jokers.min(2);
        self
    }

    #[must_use]
    pub fn with_deck_multiplier(mut self, multiplier: usize) -> Self {
        self.deck_multiplier = Some(multiplier);
        self
    }

    #[must_use]
    pub fn with_discard(mut self, policy: DiscardPolicy) -> Self {
        self.discard = policy;
        self
    }

    #[must_use]
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    #[must_use]
    pub fn with_report_penalty(mut self, cards: usize) -> Self {
        self.report_penalty = cards;
        self
    }

    #[must_use]
    pub fn with_report_window(mut self, advances: u64) -> Self {
        self.report_window = advances;
        self
    }

    #[must_use]
    pub fn with_ai_declare_chance(mut self, chance: f64) -> Self {
        self.ai_declare_chance = chance;
        self
    }

    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
