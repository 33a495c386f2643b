//! Game events and the bounded notification log.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, Direction, PlayerId, Rank, Suit};

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started { players: usize, table: Card },
    Drew { player: PlayerId, count: usize },
    Placed { player: PlayerId, card: Card },
    StackGrew { rank: Rank, count: u32, target: PlayerId },
    StackResolved { target: PlayerId, rank: Rank, links: u32, cards: u32 },
    Skipped { player: PlayerId },
    Reversed { direction: Direction },
    SuitChosen { player: PlayerId, suit: Suit, defaulted: bool },
    Declared { player: PlayerId },
    Reported { reporter: PlayerId, accused: PlayerId, upheld: bool },
    Left { player: PlayerId },
    Won { player: PlayerId },
    Aborted,
}

impl GameEvent {
    /// The player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match *self {
            GameEvent::Drew { player, .. }
            | GameEvent::Placed { player, .. }
            | GameEvent::Skipped { player }
            | GameEvent::SuitChosen { player, .. }
            | GameEvent::Declared { player }
            | GameEvent::Left { player }
            | GameEvent::Won { player } => Some(player),
            GameEvent::StackGrew { target, .. } | GameEvent::StackResolved { target, .. } => Some(target),
            GameEvent::Reported { reporter, .. } => Some(reporter),
            GameEvent::Started { .. } | GameEvent::Reversed { .. } | GameEvent::Aborted => None,
        }
    }

    /// Human-readable message, resolving player names through `name`.
    pub fn describe(&self, name: impl Fn(PlayerId) -> String) -> String {
        match *self {
            GameEvent::Started { players, table } => {
                format!("Game started with {players} players, {table} on the table")
            }
            GameEvent::Drew { player, count: 1 } => format!("{} drew a card", name(player)),
            GameEvent::Drew { player, count } => format!("{} drew {count} cards", name(player)),
            GameEvent::Placed { player, card } => format!("{} placed {card}", name(player)),
            GameEvent::StackGrew { rank, count, target } => {
                format!("{rank} stack is now {count} long, {} must answer", name(target))
            }
            GameEvent::StackResolved { target, rank, links, cards } => {
                format!("{} takes {cards} cards from a {links}-card {rank} stack", name(target))
            }
            GameEvent::Skipped { player } => format!("{} was skipped", name(player)),
            GameEvent::Reversed { direction } => format!("Direction reversed ({direction:?})"),
            GameEvent::SuitChosen { player, suit, defaulted: false } => {
                format!("{} wished for {suit}", name(player))
            }
            GameEvent::SuitChosen { player, suit, defaulted: true } => {
                format!("{} took too long, {suit} was picked at random", name(player))
            }
            GameEvent::Declared { player } => format!("{} declared their last card", name(player)),
            GameEvent::Reported { reporter, accused, upheld: true } => {
                format!("{} caught {} with an undeclared last card", name(reporter), name(accused))
            }
            GameEvent::Reported { reporter, accused, upheld: false } => {
                format!("{} falsely reported {}", name(reporter), name(accused))
            }
            GameEvent::Left { player } => format!("{} left the game", name(player)),
            GameEvent::Won { player } => format!("{} won the game!", name(player)),
            GameEvent::Aborted => "The deck ran out of cards, game aborted".to_string(),
        }
    }
}

/// One log entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub round: u64,
    pub player: Option<PlayerId>,
    pub event: GameEvent,
    pub message: String,
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[R{}] {}", self.round, self.message)
    }
}

/// Append-only scrolling log that keeps the newest `capacity` entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventLog {
    entries: Vector<Notification>,
    capacity: usize,
}

impl EventLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.entries.push_back(notification);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Entries, newest first.
    pub fn recent(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().rev()
    }

    /// Newest-first lines that fit in `budget` characters (newlines included).
    #[must_use]
    pub fn render(&self, budget: usize) -> Vec<String> {
        let mut used = 0;
        let mut lines = Vec::new();
        for entry in self.recent() {
            let line = entry.to_string();
            let cost = line.chars().count() + usize::from(!lines.is_empty());
            if used + cost > budget {
                break;
            }
            used += cost;
            lines.push(line);
        }
        lines
    }
}
