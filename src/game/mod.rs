//! The turn controller.
//!
//! A [`Game`] owns the deck, the hands, the turn order and any open
//! stacking chain. Hosts drive it with a handful of actions (`draw`,
//! `place_card`, `begin_selection`, `respond`, `declare`, `report`,
//! `leave`); each runs to completion, appends notifications, and returns an
//! [`Outcome`].
//!
//! After every turn the engine advances on its own: players with pending
//! skips are passed over, chains nobody can answer are paid out, and AI
//! players take their turns, until a human has to act or someone wins.
//!
//! ## Example
//!
//! ```
//! use maumau::core::GameConfig;
//! use maumau::game::{GameBuilder, Outcome};
//!
//! let mut game = GameBuilder::new(GameConfig::default().with_seed(7))
//!     .ai("alice")
//!     .ai("bob")
//!     .build()
//!     .unwrap();
//!
//! // With only AI players the whole game plays out during `start`.
//! if let Ok(Outcome::GameOver(winner)) = game.start() {
//!     assert!(game.hand(winner).unwrap().is_empty());
//! }
//! ```

mod ai;
mod builder;
mod decision;
mod engine;
mod snapshot;

pub use builder::GameBuilder;
pub use decision::{ChoiceHost, DecisionKind, PendingDecision, Renderer, Response};
pub use engine::Game;
pub use snapshot::{PlayerView, Snapshot, LOG_BUDGET};

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Where the game is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Built but not started.
    Idle,
    /// Waiting for the current player to draw or place.
    AwaitingAction(PlayerId),
    /// The current player is liable for a chain they could answer.
    ResolvingStack(PlayerId),
    /// Waiting for a host answer.
    AwaitingDecision(PendingDecision),
    Finished(PlayerId),
    /// The deck ran out. No further actions are accepted.
    Aborted,
}

/// Result of an accepted action.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The game goes on; the current player may act.
    Continue,
    /// A host answer is needed before anything else can happen.
    Pending(PendingDecision),
    /// The action ended the game.
    GameOver(PlayerId),
}

impl Outcome {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Outcome::GameOver(_))
    }
}
