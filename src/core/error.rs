//! Engine error types.

use thiserror::Error;

use super::seat::Seat;
use crate::cards::Rank;

/// Why a request was refused. The state is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("the game is over")]
    GameOver,

    #[error("it is not the {0}'s turn")]
    NotYourTurn(Seat),

    #[error("cannot ask for {0}s without holding one")]
    RankNotHeld(Rank),
}

/// A broken state invariant. Always a bug in the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("card conservation broken: {found} cards accounted for, expected {expected}")]
    Conservation { found: usize, expected: usize },

    #[error("{count} cards of rank {rank} outside books")]
    RankOverflow { rank: Rank, count: usize },

    #[error("book of {rank}s exists but {holder} still holds that rank")]
    BookRankStillHeld { rank: Rank, holder: Seat },

    #[error("more than one book of {0}s")]
    DuplicateBook(Rank),
}
