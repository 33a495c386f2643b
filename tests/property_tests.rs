//! Property-based tests for turn order, card conservation and legality.

use proptest::prelude::*;

use maumau::core::{Card, Cycler, GameConfig, Rank, Suit};
use maumau::error::GameError;
use maumau::game::{GameBuilder, Outcome};

#[derive(Clone, Debug)]
enum Op {
    Advance,
    Retreat,
    Reverse,
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Advance),
        2 => Just(Op::Retreat),
        1 => Just(Op::Reverse),
        2 => (0u8..8).prop_map(Op::Remove),
    ]
}

fn every_card() -> Vec<Card> {
    let mut cards: Vec<Card> = Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::STANDARD.into_iter().map(move |rank| Card::new(rank, suit)))
        .collect();
    cards.push(Card::joker());
    cards
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: Pointer stability
    /// Removing another item keeps the current item; removing the current
    /// item lands where `advance` would have gone.
    #[test]
    fn prop_cycler_removal_keeps_cursor(
        len in 2u8..8,
        ops in proptest::collection::vec(op(), 0..40),
    ) {
        let mut cycler = Cycler::new((0..len).collect::<Vec<u8>>());

        for op in ops {
            match op {
                Op::Advance => { cycler.advance(); }
                Op::Retreat => { cycler.retreat(); }
                Op::Reverse => cycler.reverse(),
                Op::Remove(item) => {
                    if cycler.len() == 1 {
                        continue;
                    }
                    let current = *cycler.current().unwrap();
                    let next = *cycler.peek_next().unwrap();
                    let removed = cycler.remove(&item);

                    match removed {
                        Some(_) if item == current => {
                            prop_assert_eq!(cycler.current(), Some(&next));
                        }
                        _ => {
                            prop_assert_eq!(cycler.current(), Some(&current));
                        }
                    }
                }
            }
            prop_assert!(cycler.current().is_some());
            prop_assert_eq!(cycler.full_order_from_current().count(), cycler.len());
        }
    }

    /// Property: Card conservation
    /// No card is created or lost over a whole AI game, however it ends.
    #[test]
    fn prop_ai_games_conserve_cards(
        seed in any::<u64>(),
        players in 2usize..7,
        hand_size in 1usize..8,
    ) {
        let config = GameConfig::default()
            .with_seed(seed)
            .with_min_players(players)
            .with_hand_size(hand_size);
        let mut game = GameBuilder::new(config).build().unwrap();
        let total = game.total_cards();

        match game.start() {
            Ok(Outcome::GameOver(winner)) => {
                prop_assert!(game.hand(winner).unwrap().is_empty());
            }
            Err(GameError::DeckExhausted) => {}
            other => {
                prop_assert!(false, "unexpected outcome {:?}", other);
            }
        }
        prop_assert_eq!(game.card_count(), total);
    }
}

/// Legality over the whole card space, checked against the rule written
/// out longhand.
#[test]
fn test_legality_is_exhaustive_and_symmetric() {
    let cards = every_card();

    for &candidate in &cards {
        for &table in &cards {
            let expected = candidate.is_joker()
                || table.is_joker()
                || candidate.rank() == Rank::Jack
                || (candidate.suit().is_some() && candidate.suit() == table.suit())
                || candidate.rank() == table.rank();
            assert_eq!(candidate.can_place_on(table, false), expected, "{candidate} on {table}");

            // Suit and rank matches work both ways.
            if candidate.rank() != Rank::Jack && table.rank() != Rank::Jack {
                assert_eq!(
                    candidate.can_place_on(table, false),
                    table.can_place_on(candidate, false),
                    "{candidate} / {table}"
                );
            }

            assert_eq!(
                candidate.can_place_on(table, true),
                candidate.rank() == table.rank(),
                "{candidate} answering {table}"
            );
        }
    }
}
