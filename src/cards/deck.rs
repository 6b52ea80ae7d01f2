//! The shared draw pool.
//!
//! Cards are drawn from the tail of the vector. The deck only ever shrinks
//! after it is built; a new game builds a new deck.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::config::DECK_SIZE;
use crate::core::GameRng;

/// Ordered stack of undealt cards (draw end = last element).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The 52-card set, unshuffled: each rank in display order, four suits
    /// per rank.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Rank::ALL
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
            .collect::<Vec<_>>();
        debug_assert_eq!(cards.len(), DECK_SIZE);
        Self { cards }
    }

    /// A standard deck in uniformly random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// A deck with an explicit order; the last card is drawn first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in draw order reversed (last element is the next draw).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove up to `n` cards from the draw end.
    ///
    /// The returned cards keep their deck order.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(n);
        self.cards.split_off(at)
    }

    /// Remove the next card, or `None` when the pool is empty.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}
