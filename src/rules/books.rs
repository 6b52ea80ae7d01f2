//! Book detection.

use crate::cards::Rank;
use crate::core::{Book, GameState, Seat, BOOK_SIZE};
use crate::notify::GameEvent;

use super::turn::check_game_over;

/// Lay down every complete rank in `seat`'s hand.
///
/// All qualifying ranks found in one scan are extracted, lowest rank first.
/// Returns whether at least one book was formed; when one was, the terminal
/// check runs before returning.
pub fn detect_and_extract_books(state: &mut GameState, seat: Seat) -> bool {
    let mut complete: Vec<Rank> = state.hands[seat]
        .counts_by_rank()
        .into_iter()
        .filter(|&(_, count)| count == BOOK_SIZE)
        .map(|(rank, _)| rank)
        .collect();

    if complete.is_empty() {
        return false;
    }
    complete.sort_unstable();

    for rank in complete {
        let removed = state.hands[seat].take_rank(rank);
        debug_assert_eq!(removed.len(), BOOK_SIZE);
        state.books[seat].push(Book { owner: seat, rank });
        state.notifications.push(GameEvent::BookCompleted { seat, rank });
        log::debug!("{} completed a book of {}s", seat, rank);
    }

    check_game_over(state);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Deck, Hand, Suit};

    fn four(rank: Rank) -> Vec<Card> {
        Suit::ALL.iter().map(|&s| Card::new(rank, s)).collect()
    }

    #[test]
    fn test_no_book_is_noop() {
        let hand = Hand::from_cards(four(Rank::Nine)[..3].to_vec());
        let mut state =
            GameState::arranged(Deck::standard(), hand.clone(), Hand::new(), Seat::Player);

        assert!(!detect_and_extract_books(&mut state, Seat::Player));
        assert_eq!(state.hand(Seat::Player), &hand);
        assert!(state.notifications().is_empty());
    }

    #[test]
    fn test_single_book_extracted() {
        let mut cards = four(Rank::Nine);
        cards.push(Card::new(Rank::Two, Suit::Clubs));
        let mut state = GameState::arranged(
            Deck::default(),
            Hand::from_cards(cards),
            Hand::new(),
            Seat::Player,
        );

        assert!(detect_and_extract_books(&mut state, Seat::Player));

        assert_eq!(state.books(Seat::Player), &[Book { owner: Seat::Player, rank: Rank::Nine }]);
        assert_eq!(state.hand(Seat::Player).cards(), &[Card::new(Rank::Two, Suit::Clubs)]);
        assert_eq!(
            state.notifications().events().cloned().collect::<Vec<_>>(),
            vec![GameEvent::BookCompleted { seat: Seat::Player, rank: Rank::Nine }]
        );
    }

    #[test]
    fn test_two_books_in_one_scan() {
        let mut cards = four(Rank::King);
        cards.extend(four(Rank::Three));
        cards.push(Card::new(Rank::Five, Suit::Hearts));
        let mut state = GameState::arranged(
            Deck::default(),
            Hand::new(),
            Hand::from_cards(cards),
            Seat::Opponent,
        );

        assert!(detect_and_extract_books(&mut state, Seat::Opponent));

        let ranks: Vec<_> = state.books(Seat::Opponent).iter().map(|b| b.rank).collect();
        assert_eq!(ranks, vec![Rank::Three, Rank::King]);
        assert_eq!(state.hand(Seat::Opponent).len(), 1);
    }

    #[test]
    fn test_last_book_ends_game() {
        let booked: Vec<Rank> = Rank::ALL.iter().copied().filter(|&r| r != Rank::Ace).collect();
        let mut state = GameState::arranged(
            Deck::default(),
            Hand::from_cards(four(Rank::Ace)),
            Hand::new(),
            Seat::Player,
        )
        .with_books(Seat::Opponent, &booked[..6])
        .with_books(Seat::Player, &booked[6..]);

        assert!(detect_and_extract_books(&mut state, Seat::Player));

        assert!(state.is_terminal());
        assert_eq!(state.total_books(), 13);
        assert!(state.verify().is_ok());
    }
}
