//! Host-facing decision points.
//!
//! The engine never blocks. When it needs a human choice it stops in
//! [`Phase::AwaitingDecision`](super::Phase::AwaitingDecision) and hands the
//! host a [`PendingDecision`]. The host answers later through
//! [`Game::respond`](super::Game::respond). `Response::Timeout` stands for
//! both a timeout and a cancelled prompt and always applies the default:
//!
//! | Decision           | Default on timeout             |
//! |--------------------|--------------------------------|
//! | `ChooseSuit`       | uniformly random suit          |
//! | `ConfirmPlacement` | keep the card, end the turn    |
//! | `ChooseCard`       | draw a card instead            |

use serde::{Deserialize, Serialize};

use super::snapshot::Snapshot;
use crate::core::{Card, PlayerId, Suit};

/// A choice the engine is waiting on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDecision {
    pub player: PlayerId,
    pub kind: DecisionKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionKind {
    /// A Jack was placed; pick the suit to follow.
    ChooseSuit,
    /// The card just drawn fits; place it right away?
    ConfirmPlacement { card: Card },
    /// Pick one of the legal cards, or nothing to draw instead.
    ChooseCard { legal: Vec<Card> },
}

/// The host's answer to a [`PendingDecision`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    Suit(Suit),
    Confirm(bool),
    Card(Option<Card>),
    /// No answer in time, or the prompt was cancelled.
    Timeout,
}

/// Synchronous source of answers, used by
/// [`Game::resolve_pending_with`](super::Game::resolve_pending_with).
///
/// Returning `None` means the wait timed out.
pub trait ChoiceHost {
    fn choose_suit(&mut self, player: PlayerId) -> Option<Suit>;

    fn confirm_placement(&mut self, player: PlayerId, card: Card) -> Option<bool>;

    /// `Some(None)` declines to pick a card.
    fn choose_card(&mut self, player: PlayerId, legal: &[Card]) -> Option<Option<Card>>;
}

/// Receives a public snapshot after every state-changing action.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

impl<F> Renderer for F
where
    F: FnMut(&Snapshot),
{
    fn render(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}
