//! Decision procedure for AI players.
//!
//! The AI is deliberately simple: it plays a uniformly random legal card,
//! wishes for the suit it holds most of, and reports anyone it sees holding
//! an undeclared last card. Every choice draws from the game's dedicated AI
//! stream so a seeded game replays identically.

use crate::core::{Card, GameRng, Player, PlayerId, PlayerMap, Suit};

/// A uniformly random legal card, or `None` when nothing fits.
pub(super) fn pick_card(legal: &[Card], rng: &mut GameRng) -> Option<Card> {
    rng.choose(legal).copied()
}

/// The suit the hand holds most of. Jokers do not count; a hand without
/// suited cards gets a random suit.
pub(super) fn pick_suit(hand: &[Card], rng: &mut GameRng) -> Suit {
    Suit::ALL
        .into_iter()
        .map(|suit| (hand.iter().filter(|card| card.suit() == Some(suit)).count(), suit))
        .filter(|&(held, _)| held > 0)
        .max_by_key(|&(held, _)| held)
        .map_or_else(|| random_suit(rng), |(_, suit)| suit)
}

/// Uniformly random suit.
pub(super) fn random_suit(rng: &mut GameRng) -> Suit {
    Suit::ALL[rng.gen_index(Suit::ALL.len())]
}

/// Does the AI remember to declare its last card this time?
pub(super) fn declares(chance: f64, rng: &mut GameRng) -> bool {
    rng.gen_bool(chance)
}

/// Opponents `me` can report right now, in seat order.
pub(super) fn report_targets(players: &PlayerMap<Player>, me: PlayerId, cycle: u64) -> Vec<PlayerId> {
    players
        .iter()
        .filter(|(id, player)| *id != me && !player.left && player.is_reportable(cycle))
        .map(|(id, _)| id)
        .collect()
}
