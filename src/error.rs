//! Errors returned by engine actions.
//!
//! A finished game is not an error: actions report it through
//! [`crate::game::Outcome::GameOver`]. `GameError::Finished` only rejects
//! actions posted after that signal.

use crate::core::{Card, PlayerId};

/// Why an action was rejected. Rejected actions never mutate the game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("{0} is already picking")]
    AlreadyPicking(PlayerId),

    #[error("{player} cannot place {card}")]
    IllegalCard { player: PlayerId, card: Card },

    /// The deck (and any recyclable discard pile) cannot cover a draw.
    ///
    /// A correctly sized, recycling deck never reaches this. The game is
    /// aborted when it happens.
    #[error("the deck is exhausted")]
    DeckExhausted,

    #[error("the game has not started")]
    NotStarted,

    #[error("the game is over, {0} won")]
    Finished(PlayerId),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("{0} has no pending decision")]
    NoPendingDecision(PlayerId),

    #[error("the response does not answer the pending decision")]
    InvalidResponse,

    #[error("a game needs at least two players")]
    NotEnoughPlayers,

    #[error("{0} seats requested, at most {max} are supported", max = crate::core::MAX_PLAYERS)]
    TooManyPlayers(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    #[test]
    fn test_messages() {
        assert_eq!(GameError::NotYourTurn(PlayerId(1)).to_string(), "it is not Player 1's turn");
        assert_eq!(
            GameError::IllegalCard { player: PlayerId(0), card: Card::new(Rank::Five, Suit::Clubs) }.to_string(),
            "Player 0 cannot place 5♣"
        );
        assert_eq!(GameError::Finished(PlayerId(2)).to_string(), "the game is over, Player 2 won");
    }
}
