//! The draw pile.
//!
//! Cards are drawn from the end of the vector (the "top"). There is no
//! visible discard pile: when a card leaves the table it is either buried
//! at a random deck position ([`DiscardPolicy::Bury`]) or set aside in a
//! hidden pile ([`DiscardPolicy::Pile`]) that is reshuffled into the deck
//! once the deck runs dry, provided the deck is `infinite`.
//!
//! ## Conservation
//!
//! `len() + discard_len()` plus every hand plus the one table card is
//! constant for the lifetime of a game. Nothing here creates or destroys
//! cards.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use super::rng::GameRng;
use crate::error::GameError;

/// What happens to a card when a newer card covers it on the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscardPolicy {
    /// Reinsert at a random position in the deck.
    #[default]
    Bury,
    /// Keep in a hidden discard pile, recycled when the deck empties.
    Pile,
}

/// Ordered stack of cards plus the hidden discard pile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    discard: Vec<Card>,
    infinite: bool,
}

impl Deck {
    /// Create a deck from explicit cards. The last card is drawn first.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            discard: Vec::new(),
            infinite: false,
        }
    }

    /// One standard 52-card deck plus `jokers` Jokers, unshuffled.
    #[must_use]
    pub fn standard(jokers: u8) -> Self {
        let mut cards = Vec::with_capacity(52 + jokers as usize);
        for suit in Suit::ALL {
            for rank in Rank::STANDARD {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.extend((0..jokers).map(|_| Card::joker()));
        Self::new(cards)
    }

    /// `multiplier` standard decks merged together, unshuffled.
    #[must_use]
    pub fn combined(multiplier: usize, jokers: u8) -> Self {
        let mut deck = Self::standard(jokers);
        for _ in 1..multiplier {
            deck.merge(Self::standard(jokers));
        }
        deck
    }

    /// Enable or disable recycling of the discard pile.
    #[must_use]
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Move every card of `other` (deck and discard pile) into this deck.
    pub fn merge(&mut self, other: Deck) {
        self.cards.extend(other.cards);
        self.discard.extend(other.discard);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    /// Cards that can still be drawn, counting the recyclable discard pile.
    #[must_use]
    pub fn available(&self) -> usize {
        if self.infinite {
            self.cards.len() + self.discard.len()
        } else {
            self.cards.len()
        }
    }

    /// Deck contents, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Uniformly permute the deck.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw the top card.
    ///
    /// An empty infinite deck first reshuffles the discard pile back in.
    pub fn take_card(&mut self, rng: &mut GameRng) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            self.recycle(rng);
        }
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    /// Draw `count` cards, or none at all if fewer are available.
    pub fn take_cards(&mut self, count: usize, rng: &mut GameRng) -> Result<Vec<Card>, GameError> {
        if self.available() < count {
            return Err(GameError::DeckExhausted);
        }
        (0..count).map(|_| self.take_card(rng)).collect()
    }

    /// Bury a card at a uniformly random position.
    pub fn add_card_at_random_position(&mut self, card: Card, rng: &mut GameRng) {
        let index = rng.gen_index(self.cards.len() + 1);
        self.cards.insert(index, card);
    }

    /// Dispose of a card that left the table according to `policy`.
    pub fn retire(&mut self, card: Card, policy: DiscardPolicy, rng: &mut GameRng) {
        match policy {
            DiscardPolicy::Bury => self.add_card_at_random_position(card, rng),
            DiscardPolicy::Pile => self.discard.push(card),
        }
    }

    fn recycle(&mut self, rng: &mut GameRng) {
        if !self.infinite || self.discard.is_empty() {
            return;
        }
        tracing::debug!(cards = self.discard.len(), "recycling discard pile into deck");
        self.cards.append(&mut self.discard);
        self.shuffle(rng);
    }
}
