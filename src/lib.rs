//! # maumau
//!
//! A turn-based stacking card game engine (a MauMau variant) with AI
//! players.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The engine never blocks or does I/O. Hosts post
//!    actions, answer pending decisions, and receive snapshots through a
//!    render callback.
//!
//! 2. **N-Player First**: Any number of seats from 2 to 255. Turn order is a
//!    reversible ring and players can leave mid-game.
//!
//! 3. **Deterministic**: All randomness flows from a seeded `GameRng`, so a
//!    seed replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, turn order, players, RNG, configuration
//! - `stack`: Stacking chains of Sevens, Nines and Jokers
//! - `stats`: Mergeable statistics and the scrolling event log
//! - `game`: The turn controller, AI players, decisions and snapshots
//! - `error`: Errors returned by engine actions

pub mod core;
pub mod error;
pub mod game;
pub mod stack;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    Ability, Card, Rank, Suit,
    Deck, DiscardPolicy,
    Cycler, Direction,
    Player, PlayerId, PlayerMap,
    GameRng, GameConfig,
};

pub use crate::error::GameError;

pub use crate::game::{
    Game, GameBuilder, Outcome, Phase,
    ChoiceHost, DecisionKind, PendingDecision, Renderer, Response,
    PlayerView, Snapshot,
};

pub use crate::stack::StackingContext;

pub use crate::stats::{EventLog, GameEvent, Notification, Stat, StatBook, StatKind};
