//! Core value types: cards, deck, turn order, players, RNG, configuration.
//!
//! Nothing in this module knows about turns or abilities being resolved;
//! the game engine in [`crate::game`] composes these pieces.

pub mod card;
pub mod deck;
pub mod cycler;
pub mod player;
pub mod rng;
pub mod config;

pub use card::{Ability, Card, Rank, Suit};
pub use deck::{Deck, DiscardPolicy};
pub use cycler::{Cycler, Direction, Order};
pub use player::{Hand, Player, PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::GameRng;
pub use config::GameConfig;
