//! Game state: the single aggregate every rule function reads and mutates.
//!
//! ## GameState
//!
//! - Shared deck (draw pool)
//! - One hand and one book list per seat
//! - Phase: whose turn it is, or the final result
//! - Pending notifications
//!
//! The state is an explicit value. Rule functions in [`crate::rules`] take
//! `&mut GameState`, so any position can be built and tested in isolation.
//! A new game replaces the whole value.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::{BOOK_SIZE, DECK_SIZE, HAND_SIZE};
use super::error::StateError;
use super::rng::GameRng;
use super::seat::{Seat, SeatMap};
use crate::cards::{Deck, Hand, Rank};
use crate::notify::NotificationQueue;

/// Result of a completed game, by strict book count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    PlayerWins,
    OpponentWins,
    Tie,
}

impl GameResult {
    /// Compare book counts.
    #[must_use]
    pub fn from_books(player: usize, opponent: usize) -> Self {
        match player.cmp(&opponent) {
            std::cmp::Ordering::Greater => GameResult::PlayerWins,
            std::cmp::Ordering::Less => GameResult::OpponentWins,
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// The winning seat, or `None` for a tie.
    #[must_use]
    pub fn winner(self) -> Option<Seat> {
        match self {
            GameResult::PlayerWins => Some(Seat::Player),
            GameResult::OpponentWins => Some(Seat::Opponent),
            GameResult::Tie => None,
        }
    }
}

/// Turn state machine position. `GameOver` is absorbing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Turn(Seat),
    GameOver(GameResult),
}

/// A completed set of four cards of one rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub owner: Seat,
    pub rank: Rank,
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) deck: Deck,
    pub(crate) hands: SeatMap<Hand>,
    pub(crate) books: SeatMap<Vec<Book>>,
    pub(crate) phase: Phase,
    pub(crate) notifications: NotificationQueue,
}

impl GameState {
    /// Shuffle a fresh deck and deal seven cards to each seat, human first.
    ///
    /// This only lays out the cards. [`crate::rules::start_game`] adds the
    /// welcome notification and runs the opening turn sequence.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        let mut deck = Deck::shuffled(rng);
        let player = Hand::from_cards(deck.deal(HAND_SIZE));
        let opponent = Hand::from_cards(deck.deal(HAND_SIZE));

        Self::arranged(deck, player, opponent, Seat::Player)
    }

    /// Build a position from explicit parts, with no books and no
    /// notifications. Intended for scenarios and tests.
    #[must_use]
    pub fn arranged(deck: Deck, player: Hand, opponent: Hand, turn: Seat) -> Self {
        let mut hands = SeatMap::default();
        hands[Seat::Player] = player;
        hands[Seat::Opponent] = opponent;

        Self {
            deck,
            hands,
            books: SeatMap::default(),
            phase: Phase::Turn(turn),
            notifications: NotificationQueue::new(),
        }
    }

    /// Credit books to a seat. Intended for scenarios and tests.
    #[must_use]
    pub fn with_books(mut self, owner: Seat, ranks: &[Rank]) -> Self {
        self.books[owner].extend(ranks.iter().map(|&rank| Book { owner, rank }));
        self
    }

    // === Queries ===

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat]
    }

    #[must_use]
    pub fn books(&self, seat: Seat) -> &[Book] {
        &self.books[seat]
    }

    #[must_use]
    pub fn book_count(&self, seat: Seat) -> usize {
        self.books[seat].len()
    }

    #[must_use]
    pub fn total_books(&self) -> usize {
        self.books.iter().map(|(_, b)| b.len()).sum()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose turn it is; `None` once the game is over.
    #[must_use]
    pub fn turn_owner(&self) -> Option<Seat> {
        match self.phase {
            Phase::Turn(seat) => Some(seat),
            Phase::GameOver(_) => None,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            Phase::Turn(_) => None,
        }
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    // === Invariants ===

    /// Cards in the deck, both hands and all books.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hands.iter().map(|(_, h)| h.len()).sum::<usize>()
            + BOOK_SIZE * self.total_books()
    }

    /// Check conservation, per-rank limits and book exclusivity.
    pub fn verify(&self) -> Result<(), StateError> {
        let found = self.card_count();
        if found != DECK_SIZE {
            return Err(StateError::Conservation { found, expected: DECK_SIZE });
        }

        let mut live: FxHashMap<Rank, usize> = FxHashMap::default();
        let loose = self
            .deck
            .cards()
            .iter()
            .chain(self.hands[Seat::Player].cards())
            .chain(self.hands[Seat::Opponent].cards());
        for card in loose {
            *live.entry(card.rank).or_insert(0) += 1;
        }
        if let Some((&rank, &count)) = live.iter().find(|&(_, &count)| count > BOOK_SIZE) {
            return Err(StateError::RankOverflow { rank, count });
        }

        let mut booked: Vec<Rank> = Vec::with_capacity(self.total_books());
        for (_, books) in self.books.iter() {
            for book in books {
                if booked.contains(&book.rank) {
                    return Err(StateError::DuplicateBook(book.rank));
                }
                booked.push(book.rank);

                let holder = Seat::ALL.into_iter().find(|&s| self.hands[s].has_rank(book.rank));
                if let Some(holder) = holder {
                    return Err(StateError::BookRankStillHeld { rank: book.rank, holder });
                }
            }
        }

        Ok(())
    }
}
