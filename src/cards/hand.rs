//! A seat's hand: an unordered multiset of cards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank};

/// Cards held by one seat.
///
/// Mutated only by transfers, draws and book removal; order carries no
/// meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

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

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards sorted by rank, for display.
    #[must_use]
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_by_key(|c| c.rank);
        cards
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|c| c.rank == rank)
    }

    /// Number of cards of one rank.
    #[must_use]
    pub fn count_of(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank == rank).count()
    }

    /// Rank → count for every rank present. Absent ranks have no entry.
    #[must_use]
    pub fn counts_by_rank(&self) -> FxHashMap<Rank, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        counts
    }

    /// Remove and return every card of `rank`.
    pub fn take_rank(&mut self, rank: Rank) -> Vec<Card> {
        let (taken, kept): (Vec<Card>, Vec<Card>) =
            self.cards.drain(..).partition(|c| c.rank == rank);
        self.cards = kept;
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn hand(cards: &[(Rank, Suit)]) -> Hand {
        Hand::from_cards(cards.iter().map(|&(r, s)| Card::new(r, s)).collect())
    }

    #[test]
    fn test_counts_by_rank() {
        let h = hand(&[
            (Rank::Seven, Suit::Clubs),
            (Rank::Seven, Suit::Hearts),
            (Rank::Queen, Suit::Spades),
        ]);

        let counts = h.counts_by_rank();
        assert_eq!(counts.get(&Rank::Seven), Some(&2));
        assert_eq!(counts.get(&Rank::Queen), Some(&1));
        assert_eq!(counts.get(&Rank::Ace), None);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_counts_of_empty_hand() {
        assert!(Hand::new().counts_by_rank().is_empty());
    }

    #[test]
    fn test_take_rank() {
        let mut h = hand(&[
            (Rank::Two, Suit::Clubs),
            (Rank::Five, Suit::Hearts),
            (Rank::Two, Suit::Spades),
        ]);

        let taken = h.take_rank(Rank::Two);

        assert_eq!(taken.len(), 2);
        assert!(taken.iter().all(|c| c.rank == Rank::Two));
        assert_eq!(h.cards(), &[Card::new(Rank::Five, Suit::Hearts)]);
        assert!(h.take_rank(Rank::Two).is_empty());
    }

    #[test]
    fn test_has_rank_and_count() {
        let h = hand(&[(Rank::Jack, Suit::Diamonds), (Rank::Jack, Suit::Clubs)]);
        assert!(h.has_rank(Rank::Jack));
        assert!(!h.has_rank(Rank::Ten));
        assert_eq!(h.count_of(Rank::Jack), 2);
    }

    #[test]
    fn test_sorted() {
        let h = hand(&[
            (Rank::King, Suit::Clubs),
            (Rank::Ace, Suit::Hearts),
            (Rank::Five, Suit::Clubs),
        ]);
        let ranks: Vec<_> = h.sorted().iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::Five, Rank::King]);
    }
}
