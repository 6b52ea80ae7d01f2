//! Outcome events surfaced to the presentation layer.
//!
//! Every rule step that a human should see is recorded as a `GameEvent`.
//! The event is structured so tests and renderers can match on it; `text()`
//! gives the message shown on screen.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::core::{GameResult, Seat};

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game was dealt.
    Welcome,
    /// The turn was handed to this seat.
    TurnStarted(Seat),
    /// The seat has no cards and the pool is empty; its turn is skipped.
    NoCardsToAsk(Seat),
    /// The seat's empty hand was refilled with one card from the pool.
    Replenished(Seat),
    /// The seat asked its opponent for a rank.
    Asked { seat: Seat, rank: Rank },
    /// The seat received cards from its opponent.
    Received { seat: Seat, count: usize },
    /// The seat keeps the turn after a successful ask.
    ExtraTurn(Seat),
    /// The opponent had none of the asked rank.
    GoFish,
    /// The seat drew a card from the pool.
    Drew(Seat),
    /// The drawn card matched the asked rank; the seat goes again.
    DrewAskedRank(Seat),
    /// Nothing left to draw.
    PoolEmpty,
    /// The seat laid down all four cards of a rank.
    BookCompleted { seat: Seat, rank: Rank },
    /// The human asked for a rank they do not hold.
    RankNotHeld(Rank),
    /// Final result.
    GameOver(GameResult),
}

impl GameEvent {
    /// Message text for display.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            GameEvent::Welcome => {
                "Welcome to Go Fish! Pick a rank from your hand to ask for it.".to_string()
            }
            GameEvent::TurnStarted(Seat::Player) => {
                "Your turn. Pick a rank to ask for.".to_string()
            }
            GameEvent::TurnStarted(Seat::Opponent) => "Computer's turn.".to_string(),
            GameEvent::NoCardsToAsk(Seat::Player) => {
                "You have no cards to ask with, so the turn returns to the computer.".to_string()
            }
            GameEvent::NoCardsToAsk(Seat::Opponent) => {
                "The computer has no cards to ask with, passing back to you.".to_string()
            }
            GameEvent::Replenished(Seat::Player) => {
                "You drew a card to replenish your hand.".to_string()
            }
            GameEvent::Replenished(Seat::Opponent) => {
                "The computer drew a card to keep playing.".to_string()
            }
            GameEvent::Asked { seat, rank } => format!("{} asked for {}s.", seat.subject(), rank),
            GameEvent::Received { seat, count } => format!(
                "{} received {} card{}.",
                seat.subject(),
                count,
                if *count == 1 { "" } else { "s" }
            ),
            GameEvent::ExtraTurn(Seat::Player) => "You get another turn.".to_string(),
            GameEvent::ExtraTurn(Seat::Opponent) => "The computer gets another turn.".to_string(),
            GameEvent::GoFish => "Go fish!".to_string(),
            GameEvent::Drew(seat) => format!("{} drew a card.", seat.subject()),
            GameEvent::DrewAskedRank(Seat::Player) => {
                "You drew the rank you asked for and go again!".to_string()
            }
            GameEvent::DrewAskedRank(Seat::Opponent) => {
                "The computer drew the rank it asked for and goes again!".to_string()
            }
            GameEvent::PoolEmpty => "The pond is empty.".to_string(),
            GameEvent::BookCompleted { seat, rank } => {
                format!("{} completed a book of {}s!", seat.subject(), rank)
            }
            GameEvent::RankNotHeld(_) => {
                "You need to hold at least one card of that rank to ask for it.".to_string()
            }
            GameEvent::GameOver(GameResult::PlayerWins) => "You win!".to_string(),
            GameEvent::GameOver(GameResult::OpponentWins) => {
                "The computer wins. Better luck next time!".to_string()
            }
            GameEvent::GameOver(GameResult::Tie) => "It's a tie!".to_string(),
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}
