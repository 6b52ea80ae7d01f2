//! Read-only snapshot for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::core::{GameResult, GameState, Seat};
use crate::notify::Notification;

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// Sorted by rank.
    pub player_hand: Vec<Card>,
    /// Sorted by rank. The renderer decides whether to show faces.
    pub opponent_hand: Vec<Card>,
    pub player_books: Vec<Rank>,
    pub opponent_books: Vec<Rank>,
    pub deck_count: usize,
    pub turn_owner: Option<Seat>,
    pub terminal: bool,
    pub result: Option<GameResult>,
    /// `None` while the game runs and on a tie.
    pub winner: Option<Seat>,
    pub notification: Option<Notification>,
    /// A scripted move for the live game is waiting to fire.
    pub opponent_thinking: bool,
}

impl TableView {
    #[must_use]
    pub fn from_state(state: &GameState, opponent_thinking: bool) -> Self {
        let book_ranks =
            |seat: Seat| -> Vec<Rank> { state.books(seat).iter().map(|b| b.rank).collect() };

        Self {
            player_hand: state.hand(Seat::Player).sorted(),
            opponent_hand: state.hand(Seat::Opponent).sorted(),
            player_books: book_ranks(Seat::Player),
            opponent_books: book_ranks(Seat::Opponent),
            deck_count: state.deck().len(),
            turn_owner: state.turn_owner(),
            terminal: state.is_terminal(),
            result: state.result(),
            winner: state.result().and_then(GameResult::winner),
            notification: state.notifications().active().cloned(),
            opponent_thinking,
        }
    }
}
