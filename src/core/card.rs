//! Card values: rank, suit, abilities and the placement rule.
//!
//! ## Placement
//!
//! [`Card::can_place_on`] is the only legality check in the engine. Every
//! playable-card set (human queries, AI choices, stacking replies) is
//! computed from it.
//!
//! ## Abilities
//!
//! | Rank  | Ability                                  |
//! |-------|------------------------------------------|
//! | Ace   | next player skips a turn                 |
//! | Seven | stack, +2 cards per link                 |
//! | Nine  | stack, +1 card per link, reverses order  |
//! | Jack  | placer chooses the next suit             |
//! | Queen | reverses order (skip with two players)   |
//! | Joker | stack, +5 cards per link                 |

use serde::{Deserialize, Serialize};

/// Card suit. Jokers have none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits in a fixed order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Unicode symbol for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
}

impl Rank {
    /// The thirteen ranks of a standard suit (no Joker).
    pub const STANDARD: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// The special ability attached to this rank, if any.
    #[must_use]
    pub const fn ability(self) -> Option<Ability> {
        match self {
            Rank::Ace => Some(Ability::Skip),
            Rank::Seven => Some(Ability::Stack { per_link: 2 }),
            Rank::Nine => Some(Ability::Stack { per_link: 1 }),
            Rank::Jack => Some(Ability::ChooseSuit),
            Rank::Queen => Some(Ability::Reverse),
            Rank::Joker => Some(Ability::Stack { per_link: 5 }),
            _ => None,
        }
    }

    /// Cards added to the recipient per link of a chain of this rank.
    ///
    /// Returns 0 for ranks that cannot stack.
    #[must_use]
    pub const fn stack_penalty(self) -> u32 {
        match self.ability() {
            Some(Ability::Stack { per_link }) => per_link,
            _ => 0,
        }
    }

    /// Short label used when rendering cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Joker => "*",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
            Rank::Joker => "Joker",
            Rank::Seven => "Seven",
            Rank::Nine => "Nine",
            other => other.label(),
        };
        f.write_str(name)
    }
}

/// What a special card does when placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// The next player loses one turn.
    Skip,
    /// Turn order flips direction.
    Reverse,
    /// The placer picks the suit the next card must follow.
    ChooseSuit,
    /// Opens or extends a stacking chain.
    Stack {
        /// Cards the recipient draws for each link in the chain.
        per_link: u32,
    },
}

/// An immutable playing card.
///
/// Jokers carry no suit; every other rank always has one. The constructors
/// enforce this so no partially-formed card can exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Option<Suit>,
}

impl Card {
    /// Create a card. A `Rank::Joker` ignores `suit`.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        match rank {
            Rank::Joker => Self::joker(),
            _ => Self {
                rank,
                suit: Some(suit),
            },
        }
    }

    /// Create a Joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: Rank::Joker,
            suit: None,
        }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        self.suit
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self.rank, Rank::Joker)
    }

    /// Does this card carry an ability?
    #[must_use]
    pub const fn is_special(self) -> bool {
        self.rank.ability().is_some()
    }

    /// Can this card open or extend a stacking chain?
    #[must_use]
    pub const fn is_stackable(self) -> bool {
        matches!(self.rank.ability(), Some(Ability::Stack { .. }))
    }

    /// Can this card be placed on `target`?
    ///
    /// While a stacking chain is active only an exact rank match answers it.
    /// Otherwise a card fits when either card is a Joker, this card is a
    /// Jack, or suit or rank match.
    #[must_use]
    pub fn can_place_on(self, target: Card, stacking_active: bool) -> bool {
        if stacking_active {
            return self.rank == target.rank;
        }

        self.is_joker()
            || target.is_joker()
            || self.rank == Rank::Jack
            || (self.suit.is_some() && self.suit == target.suit)
            || self.rank == target.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{}{}", self.rank.label(), suit),
            None => f.write_str("Joker"),
        }
    }
}
