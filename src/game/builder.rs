//! Game setup.

use rustc_hash::FxHashMap;

use super::decision::Renderer;
use super::engine::Game;
use crate::core::{Card, Deck, GameConfig, GameRng, Player, PlayerId, PlayerMap, MAX_PLAYERS};
use crate::error::GameError;

/// Builder for creating a [`Game`].
///
/// Players are seated in the order they are added. Missing seats up to
/// `GameConfig::min_players` are filled with AI players.
///
/// Tests and scripted setups can fix the deck, individual hands and the
/// opening table card; anything left unset is dealt from a shuffled deck.
pub struct GameBuilder {
    config: GameConfig,
    seats: Vec<(String, bool)>,
    deck: Option<Vec<Card>>,
    hands: FxHashMap<PlayerId, Vec<Card>>,
    table: Option<Card>,
    skips: Vec<(PlayerId, u32)>,
    renderer: Option<Box<dyn Renderer>>,
}

impl GameBuilder {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            seats: Vec::new(),
            deck: None,
            hands: FxHashMap::default(),
            table: None,
            skips: Vec::new(),
            renderer: None,
        }
    }

    #[must_use]
    pub fn human(mut self, name: impl Into<String>) -> Self {
        self.seats.push((name.into(), false));
        self
    }

    #[must_use]
    pub fn ai(mut self, name: impl Into<String>) -> Self {
        self.seats.push((name.into(), true));
        self
    }

    /// Use exactly these cards as the deck, unshuffled. The last card is
    /// drawn first.
    #[must_use]
    pub fn deck(mut self, cards: Vec<Card>) -> Self {
        self.deck = Some(cards);
        self
    }

    /// Give `player` this starting hand instead of dealing one.
    #[must_use]
    pub fn hand(mut self, player: PlayerId, cards: Vec<Card>) -> Self {
        self.hands.insert(player, cards);
        self
    }

    /// Open with this table card instead of drawing one.
    #[must_use]
    pub fn table(mut self, card: Card) -> Self {
        self.table = Some(card);
        self
    }

    /// Start `player` with pending skipped turns.
    #[must_use]
    pub fn skip(mut self, player: PlayerId, turns: u32) -> Self {
        self.skips.push((player, turns));
        self
    }

    #[must_use]
    pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Seat the players, deal, and turn the first table card.
    pub fn build(mut self) -> Result<Game, GameError> {
        let seat_count = self.seats.len().max(self.config.min_players);
        if seat_count > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(seat_count));
        }
        while self.seats.len() < self.config.min_players {
            let name = format!("Bot {}", self.seats.len() + 1);
            self.seats.push((name, true));
        }
        if self.seats.len() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }

        let mut rng = self.config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let ai_rng = rng.for_context("ai");

        let mut deck = match self.deck.take() {
            Some(cards) => Deck::new(cards),
            None => {
                let multiplier = self.config.deck_multiplier_for(self.seats.len());
                let mut deck = Deck::combined(multiplier, self.config.jokers_per_deck);
                deck.shuffle(&mut rng);
                deck
            }
        }
        .with_infinite(self.config.infinite);

        let seats = &self.seats;
        let mut players = PlayerMap::new(seats.len(), |id| {
            let (name, is_ai) = &seats[id.index()];
            Player::new(id, name.clone(), *is_ai)
        });

        for (id, player) in players.iter_mut() {
            let hand = match self.hands.remove(&id) {
                Some(cards) => cards,
                None => deck.take_cards(self.config.hand_size, &mut rng)?,
            };
            player.receive(hand);
        }
        for (id, turns) in self.skips {
            if let Some(player) = players.get_mut(id) {
                player.skip_for += turns;
            }
        }

        let table = match self.table {
            Some(card) => card,
            None => deck.take_card(&mut rng)?,
        };

        tracing::debug!(
            players = players.player_count(),
            deck = deck.len(),
            %table,
            "game built"
        );

        Ok(Game::assemble(self.config, players, deck, table, rng, ai_rng, self.renderer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    #[test]
    fn test_fills_with_ai() {
        let game = GameBuilder::new(GameConfig::default().with_min_players(4).with_seed(1))
            .human("alice")
            .build()
            .unwrap();

        let ai: Vec<_> = game.players().map(|p| p.is_ai).collect();
        assert_eq!(ai, vec![false, true, true, true]);
        assert_eq!(game.player(PlayerId(3)).unwrap().name, "Bot 4");
    }

    #[test]
    fn test_not_enough_players() {
        let result = GameBuilder::new(GameConfig::default().with_min_players(0)).human("solo").build();
        assert_eq!(result.unwrap_err(), GameError::NotEnoughPlayers);
    }

    #[test]
    fn test_too_many_players() {
        let result = GameBuilder::new(GameConfig::default().with_min_players(1000)).build();
        assert_eq!(result.unwrap_err(), GameError::TooManyPlayers(1000));

        let mut builder = GameBuilder::new(GameConfig::default());
        for seat in 0..=MAX_PLAYERS {
            builder = builder.human(format!("P{seat}"));
        }
        assert_eq!(builder.build().unwrap_err(), GameError::TooManyPlayers(256));
    }

    #[test]
    fn test_deals_hands_and_table() {
        let game = GameBuilder::new(GameConfig::default().with_hand_size(7).with_seed(3))
            .human("a")
            .human("b")
            .human("c")
            .build()
            .unwrap();

        for player in game.players() {
            assert_eq!(player.hand.len(), 7);
        }
        assert_eq!(game.deck_len(), 54 - 21 - 1);
        assert_eq!(game.card_count(), 54);
        assert_eq!(game.total_cards(), 54);
    }

    #[test]
    fn test_multiplier_scales_deck() {
        let game = GameBuilder::new(GameConfig::default().with_min_players(6).with_jokers(0).with_seed(3))
            .build()
            .unwrap();

        assert_eq!(game.total_cards(), 104);
    }

    #[test]
    fn test_scripted_setup() {
        let two_hearts = Card::new(Rank::Two, Suit::Hearts);
        let game = GameBuilder::new(GameConfig::default().with_seed(3))
            .human("a")
            .human("b")
            .deck(vec![Card::new(Rank::Three, Suit::Clubs)])
            .hand(PlayerId(0), vec![Card::new(Rank::Five, Suit::Diamonds)])
            .hand(PlayerId(1), vec![Card::new(Rank::Seven, Suit::Hearts)])
            .table(two_hearts)
            .build()
            .unwrap();

        assert_eq!(game.table_card(), two_hearts);
        assert_eq!(game.deck_len(), 1);
        assert_eq!(game.total_cards(), 4);
    }

    #[test]
    fn test_deal_exhausts_small_deck() {
        let result = GameBuilder::new(GameConfig::default().with_seed(3))
            .human("a")
            .human("b")
            .deck(vec![Card::joker(); 6])
            .build();

        assert_eq!(result.unwrap_err(), GameError::DeckExhausted);
    }
}
