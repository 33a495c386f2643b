//! The turn controller.
//!
//! ## Turn flow
//!
//! Every accepted action ends in one of three ways: the turn is over (the
//! cursor has moved on and [`Game::advance_turn`] takes over), a host
//! decision is pending, or the acting player emptied their hand.
//!
//! ## Stacking
//!
//! Each link of a chain makes the player after the placer (in the current
//! direction) liable. When the chain resolves, the liable player draws the
//! whole penalty and loses the turn. A Nine chain also reverses direction
//! when it opens; once the liable player has been passed over, the
//! direction flips back.
//!
//! ## Card accounting
//!
//! The card a placement covers is retired to the deck according to
//! [`DiscardPolicy`](crate::core::DiscardPolicy), so the deck, the hidden
//! discard pile, every hand and the single table card always add up to
//! [`Game::total_cards`].

use std::fmt;

use super::ai;
use super::decision::{ChoiceHost, DecisionKind, PendingDecision, Renderer, Response};
use super::snapshot::{PlayerView, Snapshot, LOG_BUDGET};
use super::{Outcome, Phase};
use crate::core::{
    Ability, Card, Cycler, Deck, Direction, GameConfig, GameRng, Player, PlayerId, PlayerMap, Rank, Suit,
};
use crate::error::GameError;
use crate::stack::StackingContext;
use crate::stats::{EventLog, GameEvent, Notification, Stat, StatBook, StatKind};

/// How a single step of play ended.
enum Step {
    TurnOver,
    Pending(PendingDecision),
    Won(PlayerId),
}

/// A running game.
///
/// Create one with [`GameBuilder`](super::GameBuilder), then call
/// [`start`](Game::start).
pub struct Game {
    config: GameConfig,
    players: PlayerMap<Player>,
    order: Cycler<PlayerId>,
    deck: Deck,
    table: Card,
    /// Suit wished for by the last Jack.
    required_suit: Option<Suit>,
    stack: Option<StackingContext>,
    phase: Phase,
    log: EventLog,
    stats: StatBook,
    player_stats: PlayerMap<StatBook>,
    rng: GameRng,
    ai_rng: GameRng,
    renderer: Option<Box<dyn Renderer>>,
    total_cards: usize,
}

impl Game {
    pub(super) fn assemble(
        config: GameConfig,
        players: PlayerMap<Player>,
        deck: Deck,
        table: Card,
        rng: GameRng,
        ai_rng: GameRng,
        renderer: Option<Box<dyn Renderer>>,
    ) -> Self {
        let count = players.player_count();
        let in_hands: usize = players.values().map(|player| player.hand.len()).sum();
        let total_cards = deck.len() + deck.discard_len() + in_hands + 1;
        let log = EventLog::new(config.log_capacity);

        Self {
            config,
            players,
            order: Cycler::new(PlayerId::all(count).collect()),
            deck,
            table,
            required_suit: None,
            stack: None,
            phase: Phase::Idle,
            log,
            stats: StatBook::new(),
            player_stats: PlayerMap::with_default(count),
            rng,
            ai_rng,
            renderer,
            total_cards,
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Start play. AI players at the front of the order act right away.
    ///
    /// Starting a running game again just reports its status.
    pub fn start(&mut self) -> Result<Outcome, GameError> {
        if self.phase != Phase::Idle {
            self.check_running()?;
            return Ok(self.status());
        }

        let players = self.players.player_count();
        self.stats.bump(StatKind::GamesPlayed, 1);
        for (_, book) in self.player_stats.iter_mut() {
            book.bump(StatKind::GamesPlayed, 1);
        }

        tracing::info!(players, table = %self.table, seed = self.rng.seed(), "game started");
        self.notify(GameEvent::Started { players, table: self.table });

        let result = self.advance_turn();
        self.conclude(result)
    }

    /// Draw a card.
    ///
    /// With a chain open, drawing declines to answer it: the chain resolves
    /// against its target instead. A drawn card that fits the table is
    /// offered back to the player through a `ConfirmPlacement` decision.
    pub fn draw(&mut self, player: PlayerId) -> Result<Outcome, GameError> {
        self.check_actor(player)?;
        let result = self.draw_step(player).and_then(|step| self.settle(step));
        self.conclude(result)
    }

    /// Place `card` from `player`'s hand on the table.
    pub fn place_card(&mut self, player: PlayerId, card: Card) -> Result<Outcome, GameError> {
        self.check_actor(player)?;
        if !self.players[player].holds(card) || !card.can_place_on(self.table_target(), self.stack.is_some()) {
            return Err(GameError::IllegalCard { player, card });
        }

        let result = self.play(player, card).and_then(|step| self.settle(step));
        self.conclude(result)
    }

    /// Ask the player to pick a card. Takes their picking lock until
    /// [`respond`](Game::respond) answers the `ChooseCard` decision.
    pub fn begin_selection(&mut self, player: PlayerId) -> Result<Outcome, GameError> {
        self.check_actor(player)?;
        let legal = self.legal_cards(player);
        let decision = PendingDecision {
            player,
            kind: DecisionKind::ChooseCard { legal },
        };

        let result = self.settle(Step::Pending(decision));
        self.conclude(result)
    }

    /// Answer the pending decision of `player`.
    ///
    /// The response is validated before anything changes. `Timeout` applies
    /// the decision's default.
    pub fn respond(&mut self, player: PlayerId, response: Response) -> Result<Outcome, GameError> {
        self.check_running()?;
        self.seated(player)?;
        let decision = match &self.phase {
            Phase::AwaitingDecision(decision) if decision.player == player => decision.clone(),
            _ => return Err(GameError::NoPendingDecision(player)),
        };

        match (&decision.kind, response) {
            (_, Response::Timeout)
            | (DecisionKind::ChooseSuit, Response::Suit(_))
            | (DecisionKind::ConfirmPlacement { .. }, Response::Confirm(_))
            | (DecisionKind::ChooseCard { .. }, Response::Card(None)) => {}
            (DecisionKind::ChooseCard { legal }, Response::Card(Some(card))) => {
                if !legal.contains(&card) {
                    return Err(GameError::IllegalCard { player, card });
                }
            }
            _ => return Err(GameError::InvalidResponse),
        }

        self.players[player].picking = false;
        self.phase = Phase::AwaitingAction(player);
        let result = self
            .apply_response(player, decision.kind, response)
            .and_then(|step| self.settle(step));
        self.conclude(result)
    }

    /// Declare a last card. Returns false (and changes nothing) if the
    /// player has nothing to declare.
    ///
    /// A player holding two cards may declare before playing one of them;
    /// the declaration then takes effect as the hand drops to one card and
    /// lapses if the hand grows instead. Allowed out of turn and while the
    /// player is picking.
    pub fn declare(&mut self, player: PlayerId) -> Result<bool, GameError> {
        self.check_running()?;
        let seat = self.seated(player)?;
        let reportable = seat.is_reportable(self.order.cycles());
        let ahead = seat.can_declare_ahead();

        if reportable {
            self.declare_low_card(player);
        } else if ahead {
            tracing::debug!(player = %self.players[player], "last card announced ahead");
            self.players[player].declared = true;
        } else {
            return Ok(false);
        }
        self.render();
        Ok(true)
    }

    /// Report `accused` for an undeclared last card.
    ///
    /// Returns whether the report was upheld. An upheld report makes the
    /// accused draw the report penalty; a false one makes the reporter draw
    /// it instead.
    pub fn report(&mut self, reporter: PlayerId, accused: PlayerId) -> Result<bool, GameError> {
        self.check_running()?;
        self.seated(accused)?;
        if self.seated(reporter)?.picking {
            return Err(GameError::AlreadyPicking(reporter));
        }

        let result = self.file_report(reporter, accused);
        self.conclude(result)
    }

    /// Remove `player` from the game.
    ///
    /// Their hand is buried in the deck and their seat leaves the turn
    /// order; the player record stays for scoring. When one player remains
    /// they win.
    pub fn leave(&mut self, player: PlayerId) -> Result<Outcome, GameError> {
        self.check_running()?;
        self.seated(player)?;

        let was_current = self.order.current() == Some(&player);
        if matches!(&self.phase, Phase::AwaitingDecision(decision) if decision.player == player) {
            self.phase = Phase::AwaitingAction(player);
        }

        let successor = self.next_after(player);
        if let Some(chain) = self.stack.as_mut() {
            if chain.target() == player {
                chain.retarget(successor);
            }
        }

        let leaver = &mut self.players[player];
        leaver.left = true;
        leaver.picking = false;
        leaver.skip_for = 0;
        leaver.reportable_until = None;
        leaver.declared = false;
        let hand = std::mem::take(&mut leaver.hand);
        for card in hand {
            self.deck.add_card_at_random_position(card, &mut self.rng);
        }

        self.order.remove(&player);
        tracing::info!(player = %self.players[player], remaining = self.order.len(), "player left");
        self.notify(GameEvent::Left { player });

        let result = match self.order.current().copied() {
            Some(last) if self.order.len() == 1 => {
                self.finish(last);
                Ok(Outcome::GameOver(last))
            }
            Some(_) if was_current => self.advance_turn(),
            _ => Ok(self.status()),
        };
        self.conclude(result)
    }

    /// Drive pending decisions to completion through `host`.
    ///
    /// A `None` answer counts as a timeout.
    pub fn resolve_pending_with(&mut self, host: &mut impl ChoiceHost) -> Result<Outcome, GameError> {
        let mut outcome = self.status();
        loop {
            let PendingDecision { player, kind } = match outcome {
                Outcome::Pending(decision) => decision,
                settled => return Ok(settled),
            };

            let response = match kind {
                DecisionKind::ChooseSuit => host.choose_suit(player).map_or(Response::Timeout, Response::Suit),
                DecisionKind::ConfirmPlacement { card } => host
                    .confirm_placement(player, card)
                    .map_or(Response::Timeout, Response::Confirm),
                DecisionKind::ChooseCard { legal } => host
                    .choose_card(player, &legal)
                    .map_or(Response::Timeout, Response::Card),
            };
            outcome = self.respond(player, response)?;
        }
    }

    pub fn set_renderer(&mut self, renderer: impl Renderer + 'static) {
        self.renderer = Some(Box::new(renderer));
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Cards in `player`'s hand that can go on the table right now.
    pub fn valid_plays(&self, player: PlayerId) -> Result<Vec<Card>, GameError> {
        self.players.get(player).ok_or(GameError::UnknownPlayer(player))?;
        Ok(self.legal_cards(player))
    }

    /// The current phase as an [`Outcome`].
    pub fn status(&self) -> Outcome {
        match &self.phase {
            Phase::AwaitingDecision(decision) => Outcome::Pending(decision.clone()),
            Phase::Finished(winner) => Outcome::GameOver(*winner),
            _ => Outcome::Continue,
        }
    }

    /// Public view of the game, plus `viewer`'s own hand.
    #[must_use]
    pub fn snapshot(&self, viewer: Option<PlayerId>) -> Snapshot {
        Snapshot {
            round: self.order.round(),
            current: self.current_player(),
            deciding: self.pending().map(|decision| decision.player),
            winner: match self.phase {
                Phase::Finished(winner) => Some(winner),
                _ => None,
            },
            aborted: self.phase == Phase::Aborted,
            table: self.table,
            required_suit: self.required_suit,
            stack: self.stack,
            direction: self.order.direction(),
            turn_order: self.turn_order(),
            players: self
                .players
                .values()
                .map(|player| PlayerView {
                    id: player.id,
                    name: player.name.clone(),
                    cards: player.hand.len(),
                    is_ai: player.is_ai,
                    skip_for: player.skip_for,
                    left: player.left,
                })
                .collect(),
            deck_size: self.deck.len(),
            hand: viewer
                .and_then(|id| self.players.get(id))
                .map(|player| player.hand.to_vec()),
            log: self.log.render(LOG_BUDGET),
        }
    }

    /// Post-game statistics: game-wide lines, then one block per player.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let name = |id: PlayerId| self.player_name(id);
        let mut lines = self.stats.summary(name);
        for (id, book) in self.player_stats.iter().filter(|(_, book)| !book.is_empty()) {
            lines.push(format!("{}:", self.player_name(id)));
            lines.extend(book.summary(name).into_iter().map(|line| format!("  {line}")));
        }
        lines
    }

    /// Cards currently in the deck, the discard pile, all hands and on the
    /// table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.players.values().map(|player| player.hand.len()).sum();
        self.deck.len() + self.deck.discard_len() + in_hands + 1
    }

    /// Cards the game was set up with. Equals [`card_count`](Game::card_count)
    /// at all times.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.order.current().copied()
    }

    #[must_use]
    pub fn table_card(&self) -> Card {
        self.table
    }

    #[must_use]
    pub fn required_suit(&self) -> Option<Suit> {
        self.required_suit
    }

    /// The open chain, if any.
    #[must_use]
    pub fn stacking(&self) -> Option<StackingContext> {
        self.stack
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingDecision> {
        match &self.phase {
            Phase::AwaitingDecision(decision) => Some(decision),
            _ => None,
        }
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Every player in seat order, including those who left.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn hand(&self, id: PlayerId) -> Option<&[Card]> {
        self.players.get(id).map(|player| player.hand.as_slice())
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.order.direction()
    }

    #[must_use]
    pub fn round(&self) -> u64 {
        self.order.round()
    }

    /// Remaining players, starting with the current one.
    #[must_use]
    pub fn turn_order(&self) -> Vec<PlayerId> {
        self.order.full_order_from_current().copied().collect()
    }

    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Game-wide statistics.
    #[must_use]
    pub fn stats(&self) -> &StatBook {
        &self.stats
    }

    #[must_use]
    pub fn player_stats(&self, id: PlayerId) -> Option<&StatBook> {
        self.player_stats.get(id)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // =========================================================================
    // Turn advancement
    // =========================================================================

    /// Move play forward until a human has to act or the game ends.
    ///
    /// Each pass either pays out a chain, consumes a skip credit, or plays
    /// an AI turn.
    fn advance_turn(&mut self) -> Result<Outcome, GameError> {
        loop {
            let Some(current) = self.current_player() else {
                return Err(GameError::NotEnoughPlayers);
            };
            let liable = self.stack.is_some_and(|chain| chain.target() == current);

            // A skipped player cannot answer the chain either. Paying it
            // uses up the skip.
            if liable {
                let skipped = self.players[current].skip_for > 0;
                if skipped || self.legal_cards(current).is_empty() {
                    self.resolve_stack()?;
                    if skipped {
                        self.consume_skip(current);
                    }
                    continue;
                }
            }

            if self.players[current].skip_for > 0 {
                self.consume_skip(current);
                self.order.advance();
                continue;
            }

            if self.players[current].is_ai {
                match self.ai_turn(current)? {
                    Step::TurnOver => continue,
                    step => return self.settle(step),
                }
            }

            self.phase = if liable {
                Phase::ResolvingStack(current)
            } else {
                Phase::AwaitingAction(current)
            };
            return Ok(Outcome::Continue);
        }
    }

    fn consume_skip(&mut self, player: PlayerId) {
        self.players[player].skip_for -= 1;
        self.count(Some(player), StatKind::TurnsSkipped, 1);
        self.notify(GameEvent::Skipped { player });
    }

    fn ai_turn(&mut self, player: PlayerId) -> Result<Step, GameError> {
        for accused in ai::report_targets(&self.players, player, self.order.cycles()) {
            self.file_report(player, accused)?;
        }

        let legal = self.legal_cards(player);
        match ai::pick_card(&legal, &mut self.ai_rng) {
            Some(card) => self.play(player, card),
            None => self.draw_step(player),
        }
    }

    fn settle(&mut self, step: Step) -> Result<Outcome, GameError> {
        match step {
            Step::TurnOver => self.advance_turn(),
            Step::Pending(decision) => {
                tracing::trace!(player = %decision.player, kind = ?decision.kind, "awaiting decision");
                self.players[decision.player].picking = true;
                self.phase = Phase::AwaitingDecision(decision.clone());
                Ok(Outcome::Pending(decision))
            }
            Step::Won(winner) => Ok(Outcome::GameOver(winner)),
        }
    }

    /// Abort on deck exhaustion and render whatever happened.
    fn conclude<T>(&mut self, result: Result<T, GameError>) -> Result<T, GameError> {
        if matches!(result, Err(GameError::DeckExhausted)) {
            self.abort();
        }
        self.render();
        result
    }

    fn end_turn(&mut self) -> Step {
        self.order.advance();
        Step::TurnOver
    }

    // =========================================================================
    // Playing cards
    // =========================================================================

    fn play(&mut self, player: PlayerId, card: Card) -> Result<Step, GameError> {
        let removed = self.players[player].take_from_hand(card);
        debug_assert!(removed, "{card} not in hand");

        let covered = std::mem::replace(&mut self.table, card);
        self.deck.retire(covered, self.config.discard, &mut self.rng);
        self.required_suit = None;

        self.count(Some(player), StatKind::CardsPlayed, 1);
        if card.is_special() {
            self.count(Some(player), StatKind::SpecialsPlayed, 1);
        }
        self.notify(GameEvent::Placed { player, card });

        match self.players[player].hand.len() {
            0 => {
                self.finish(player);
                return Ok(Step::Won(player));
            }
            1 => self.mark_low_card(player),
            _ => {}
        }

        match card.rank().ability() {
            Some(Ability::Stack { .. }) => self.grow_stack(player, card.rank()),
            Some(Ability::Skip) => self.skip_next(player),
            Some(Ability::Reverse) if self.order.len() == 2 => self.skip_next(player),
            Some(Ability::Reverse) => self.reverse(Some(player)),
            Some(Ability::ChooseSuit) if self.players[player].is_ai => {
                let suit = ai::pick_suit(&self.players[player].hand, &mut self.ai_rng);
                self.choose_suit(player, suit, false);
            }
            Some(Ability::ChooseSuit) => {
                return Ok(Step::Pending(PendingDecision {
                    player,
                    kind: DecisionKind::ChooseSuit,
                }));
            }
            None => {}
        }

        Ok(self.end_turn())
    }

    fn draw_step(&mut self, player: PlayerId) -> Result<Step, GameError> {
        if self.resolve_stack()? {
            return Ok(Step::TurnOver);
        }

        let card = self.deck.take_card(&mut self.rng)?;
        self.give(player, vec![card]);

        if card.can_place_on(self.table_target(), false) {
            if self.players[player].is_ai {
                return self.play(player, card);
            }
            return Ok(Step::Pending(PendingDecision {
                player,
                kind: DecisionKind::ConfirmPlacement { card },
            }));
        }

        Ok(self.end_turn())
    }

    fn apply_response(&mut self, player: PlayerId, kind: DecisionKind, response: Response) -> Result<Step, GameError> {
        match (kind, response) {
            (DecisionKind::ChooseSuit, Response::Suit(suit)) => {
                self.choose_suit(player, suit, false);
                Ok(self.end_turn())
            }
            (DecisionKind::ChooseSuit, _) => {
                let suit = ai::random_suit(&mut self.rng);
                self.choose_suit(player, suit, true);
                Ok(self.end_turn())
            }
            (DecisionKind::ConfirmPlacement { card }, Response::Confirm(true))
            | (DecisionKind::ChooseCard { .. }, Response::Card(Some(card))) => self.play(player, card),
            (DecisionKind::ConfirmPlacement { .. }, _) => Ok(self.end_turn()),
            (DecisionKind::ChooseCard { .. }, _) => self.draw_step(player),
        }
    }

    fn choose_suit(&mut self, player: PlayerId, suit: Suit, defaulted: bool) {
        self.required_suit = Some(suit);
        self.notify(GameEvent::SuitChosen { player, suit, defaulted });
    }

    fn skip_next(&mut self, player: PlayerId) {
        let next = self.next_after(player);
        self.players[next].skip_for += 1;
    }

    fn reverse(&mut self, player: Option<PlayerId>) {
        self.order.reverse();
        self.count(player, StatKind::Reversals, 1);
        self.notify(GameEvent::Reversed {
            direction: self.order.direction(),
        });
    }

    // =========================================================================
    // Stacking
    // =========================================================================

    fn grow_stack(&mut self, player: PlayerId, rank: Rank) {
        let opening = self.stack.is_none();
        if opening && rank == Rank::Nine {
            self.reverse(Some(player));
        }

        let target = self.next_after(player);
        let chain = match self.stack {
            Some(mut chain) => {
                chain.extend(target);
                chain
            }
            None => StackingContext::open(rank, target, (rank == Rank::Nine).then_some(player)),
        };
        self.stack = Some(chain);

        self.notify(GameEvent::StackGrew {
            rank,
            count: chain.count(),
            target,
        });
    }

    /// Pay out the open chain. Returns false if there is none.
    ///
    /// Nothing changes when the deck cannot cover the penalty.
    fn resolve_stack(&mut self) -> Result<bool, GameError> {
        let Some(chain) = self.stack else {
            return Ok(false);
        };
        let cards = self.deck.take_cards(chain.penalty() as usize, &mut self.rng)?;
        self.stack = None;

        let target = chain.target();
        self.count(Some(target), StatKind::StacksResolved, 1);
        self.stats.add(Stat::record(
            StatKind::LongestStack,
            u64::from(chain.count()),
            None,
            Some(chain.rank()),
        ));
        self.notify(GameEvent::StackResolved {
            target,
            rank: chain.rank(),
            links: chain.count(),
            cards: chain.penalty(),
        });
        self.give(target, cards);

        self.order.set_current(&target);
        self.order.advance();
        if chain.rank() == Rank::Nine {
            self.reverse(None);
        }

        Ok(true)
    }

    // =========================================================================
    // Low-card declarations
    // =========================================================================

    fn mark_low_card(&mut self, player: PlayerId) {
        let until = self.order.cycles() + self.config.report_window;
        let seat = &mut self.players[player];
        if seat.declared {
            self.declare_low_card(player);
            return;
        }
        seat.reportable_until = Some(until);

        if seat.is_ai && ai::declares(self.config.ai_declare_chance, &mut self.ai_rng) {
            self.declare_low_card(player);
        }
    }

    fn declare_low_card(&mut self, player: PlayerId) {
        let seat = &mut self.players[player];
        seat.reportable_until = None;
        seat.declared = false;
        self.count(Some(player), StatKind::Declarations, 1);
        self.notify(GameEvent::Declared { player });
    }

    fn file_report(&mut self, reporter: PlayerId, accused: PlayerId) -> Result<bool, GameError> {
        let upheld = self.players[accused].is_reportable(self.order.cycles());
        let penalized = if upheld { accused } else { reporter };
        let cards = self.deck.take_cards(self.config.report_penalty, &mut self.rng)?;

        if upheld {
            self.players[accused].reportable_until = None;
            self.count(Some(reporter), StatKind::Reports, 1);
        } else {
            self.count(Some(reporter), StatKind::FalseReports, 1);
        }
        self.notify(GameEvent::Reported {
            reporter,
            accused,
            upheld,
        });
        self.give(penalized, cards);

        Ok(upheld)
    }

    // =========================================================================
    // Bookkeeping
    // =========================================================================

    fn check_running(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Idle => Err(GameError::NotStarted),
            Phase::Finished(winner) => Err(GameError::Finished(winner)),
            Phase::Aborted => Err(GameError::DeckExhausted),
            _ => Ok(()),
        }
    }

    /// Validate that `player` may take a turn action right now.
    fn check_actor(&self, player: PlayerId) -> Result<(), GameError> {
        self.check_running()?;
        if self.seated(player)?.picking {
            return Err(GameError::AlreadyPicking(player));
        }
        if self.current_player() != Some(player) {
            return Err(GameError::NotYourTurn(player));
        }
        Ok(())
    }

    fn seated(&self, player: PlayerId) -> Result<&Player, GameError> {
        self.players
            .get(player)
            .filter(|seat| !seat.left)
            .ok_or(GameError::UnknownPlayer(player))
    }

    /// The card placements are checked against. A wished suit stands in as
    /// a Jack of that suit.
    fn table_target(&self) -> Card {
        match self.required_suit {
            Some(suit) => Card::new(Rank::Jack, suit),
            None => self.table,
        }
    }

    fn legal_cards(&self, player: PlayerId) -> Vec<Card> {
        let target = self.table_target();
        let stacking = self.stack.is_some();
        self.players[player]
            .hand
            .iter()
            .copied()
            .filter(|card| card.can_place_on(target, stacking))
            .collect()
    }

    fn next_after(&self, player: PlayerId) -> PlayerId {
        self.order.peek_after(&player).copied().unwrap_or(player)
    }

    fn give(&mut self, player: PlayerId, cards: Vec<Card>) {
        let count = cards.len();
        if count == 0 {
            return;
        }

        let recipient = &mut self.players[player];
        recipient.receive(cards);
        let held = recipient.hand.len() as u64;

        self.count(Some(player), StatKind::CardsDrawn, count as u64);
        self.stats
            .add(Stat::record(StatKind::LargestHand, held, Some(player), None));
        self.notify(GameEvent::Drew { player, count });
    }

    /// Add to a counter game-wide and, if given, for one player.
    fn count(&mut self, player: Option<PlayerId>, kind: StatKind, amount: u64) {
        self.stats.bump(kind, amount);
        if let Some(book) = player.and_then(|id| self.player_stats.get_mut(id)) {
            book.bump(kind, amount);
        }
    }

    fn finish(&mut self, winner: PlayerId) {
        self.phase = Phase::Finished(winner);
        for (_, player) in self.players.iter_mut() {
            player.picking = false;
        }
        self.player_stats[winner].bump(StatKind::Wins, 1);
        self.notify(GameEvent::Won { player: winner });
        tracing::info!(winner = %self.players[winner], round = self.order.round(), "game finished");
    }

    fn abort(&mut self) {
        self.phase = Phase::Aborted;
        for (_, player) in self.players.iter_mut() {
            player.picking = false;
        }
        self.notify(GameEvent::Aborted);
        tracing::warn!(
            deck = self.deck.len(),
            discard = self.deck.discard_len(),
            "deck exhausted, game aborted"
        );
    }

    fn notify(&mut self, event: GameEvent) {
        let message = event.describe(|id| self.player_name(id));
        let round = self.order.round();
        tracing::debug!(round, "{message}");
        self.log.push(Notification {
            round,
            player: event.player(),
            event,
            message,
        });
    }

    fn render(&mut self) {
        if let Some(mut renderer) = self.renderer.take() {
            renderer.render(&self.snapshot(None));
            self.renderer = Some(renderer);
        }
    }

    fn player_name(&self, id: PlayerId) -> String {
        self.players
            .get(id)
            .map_or_else(|| id.to_string(), |player| player.name.clone())
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("table", &self.table)
            .field("required_suit", &self.required_suit)
            .field("stack", &self.stack)
            .field("order", &self.order)
            .field("deck", &self.deck.len())
            .field("players", &self.players)
            .finish_non_exhaustive()
    }
}
