//! The "ask for a rank" protocol.
//!
//! 1. The asker must hold the rank (the human gets a rejection notice).
//! 2. Every card of that rank moves over from the other seat.
//! 3. Cards received: book check, refill the emptied seat, extra turn.
//! 4. Nothing received ("go fish"): draw one. A card of the asked rank earns
//!    an extra turn; anything else, or an empty pool, passes the turn.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::core::{GameState, Phase, RequestError, Seat};
use crate::notify::GameEvent;

use super::books::detect_and_extract_books;
use super::turn::{begin_turn, check_game_over, pass_turn, replenish, TurnEntry};

/// What the ask produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The other seat handed over this many cards.
    Received(usize),
    /// Go fish: the asker drew `card`.
    Drew { card: Card, matched: bool },
    /// Go fish with nothing left to draw.
    PoolEmpty,
}

/// Result of a resolved request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOutcome {
    pub asker: Seat,
    pub rank: Rank,
    pub resolution: Resolution,
    /// Whether the asker completed at least one book during the request.
    pub books_formed: bool,
    /// Whether the rules granted the asker another turn.
    pub extra_turn: bool,
    /// Whose turn it is now; `None` if the request ended the game.
    pub next_turn: Option<Seat>,
}

/// Resolve `asker` asking the other seat for `rank`.
///
/// Rejected requests change nothing except for the human's rejection
/// notification.
pub fn resolve_request(
    state: &mut GameState,
    asker: Seat,
    rank: Rank,
) -> Result<RequestOutcome, RequestError> {
    match state.phase {
        Phase::GameOver(_) => return Err(RequestError::GameOver),
        Phase::Turn(owner) if owner != asker => return Err(RequestError::NotYourTurn(asker)),
        Phase::Turn(_) => {}
    }

    if !state.hands[asker].has_rank(rank) {
        if asker == Seat::Player {
            state.notifications.push(GameEvent::RankNotHeld(rank));
        }
        log::debug!("{} asked for {}s without holding one", asker, rank);
        return Err(RequestError::RankNotHeld(rank));
    }

    state.notifications.push(GameEvent::Asked { seat: asker, rank });

    let (hand, other) = state.hands.pair_mut(asker);
    let taken = other.take_rank(rank);
    let received = taken.len();
    hand.extend(taken);

    let (resolution, books_formed, extra_turn) = if received > 0 {
        log::trace!("{} took {} {}s", asker, received, rank);
        state.notifications.push(GameEvent::Received { seat: asker, count: received });

        let books_formed = detect_and_extract_books(state, asker);
        if !state.is_terminal() {
            let giver = asker.other();
            if state.hands[giver].is_empty() {
                replenish(state, giver);
            }
            if !books_formed && !state.is_terminal() {
                state.notifications.push(GameEvent::ExtraTurn(asker));
            }
        }
        (Resolution::Received(received), books_formed, true)
    } else {
        state.notifications.push(GameEvent::GoFish);
        match state.deck.draw_one() {
            Some(card) => {
                log::trace!("{} drew {}", asker, card);
                state.hands[asker].push(card);
                state.notifications.push(GameEvent::Drew(asker));

                let books_formed = detect_and_extract_books(state, asker);
                let matched = card.rank == rank;
                if matched && !state.is_terminal() {
                    state.notifications.push(GameEvent::DrewAskedRank(asker));
                }
                (Resolution::Drew { card, matched }, books_formed, matched)
            }
            None => {
                state.notifications.push(GameEvent::PoolEmpty);
                (Resolution::PoolEmpty, false, false)
            }
        }
    };

    let over = check_game_over(state);
    let extra_turn = extra_turn && !over;
    if extra_turn {
        begin_turn(state, asker, TurnEntry::Continue);
    } else if !over {
        pass_turn(state, asker);
    }

    Ok(RequestOutcome {
        asker,
        rank,
        resolution,
        books_formed,
        extra_turn,
        next_turn: state.turn_owner(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, Hand, Suit};

    fn cards(list: &[(Rank, Suit)]) -> Hand {
        Hand::from_cards(list.iter().map(|&(r, s)| Card::new(r, s)).collect())
    }

    #[test]
    fn test_rank_not_held_changes_nothing() {
        let mut state = GameState::arranged(
            Deck::standard(),
            cards(&[(Rank::Two, Suit::Clubs)]),
            cards(&[(Rank::Three, Suit::Clubs)]),
            Seat::Player,
        );
        let before_deck = state.deck().clone();

        let err = resolve_request(&mut state, Seat::Player, Rank::Three).unwrap_err();

        assert_eq!(err, RequestError::RankNotHeld(Rank::Three));
        assert_eq!(state.deck(), &before_deck);
        assert_eq!(state.turn_owner(), Some(Seat::Player));
        let events: Vec<_> = state.notifications().events().cloned().collect();
        assert_eq!(events, vec![GameEvent::RankNotHeld(Rank::Three)]);
    }

    #[test]
    fn test_opponent_rejection_is_silent() {
        let mut state = GameState::arranged(
            Deck::standard(),
            cards(&[(Rank::Two, Suit::Clubs)]),
            cards(&[(Rank::Three, Suit::Clubs)]),
            Seat::Opponent,
        );

        let err = resolve_request(&mut state, Seat::Opponent, Rank::Two).unwrap_err();

        assert_eq!(err, RequestError::RankNotHeld(Rank::Two));
        assert!(state.notifications().is_empty());
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let mut state = GameState::arranged(
            Deck::standard(),
            cards(&[(Rank::Two, Suit::Clubs)]),
            cards(&[(Rank::Two, Suit::Hearts)]),
            Seat::Opponent,
        );

        let err = resolve_request(&mut state, Seat::Player, Rank::Two).unwrap_err();

        assert_eq!(err, RequestError::NotYourTurn(Seat::Player));
        assert_eq!(state.hand(Seat::Player).len(), 1);
        assert!(state.notifications().is_empty());
    }

    #[test]
    fn test_transfer_grants_extra_turn() {
        let mut state = GameState::arranged(
            Deck::from_cards(vec![Card::new(Rank::Ace, Suit::Clubs)]),
            cards(&[(Rank::Five, Suit::Clubs)]),
            cards(&[
                (Rank::Five, Suit::Hearts),
                (Rank::Five, Suit::Spades),
                (Rank::Nine, Suit::Clubs),
            ]),
            Seat::Player,
        );

        let outcome = resolve_request(&mut state, Seat::Player, Rank::Five).unwrap();

        assert_eq!(outcome.resolution, Resolution::Received(2));
        assert!(outcome.extra_turn);
        assert_eq!(outcome.next_turn, Some(Seat::Player));
        assert_eq!(state.hand(Seat::Player).count_of(Rank::Five), 3);
        assert!(!state.hand(Seat::Opponent).has_rank(Rank::Five));
        let events: Vec<_> = state.notifications().events().cloned().collect();
        assert_eq!(
            events,
            vec![
                GameEvent::Asked { seat: Seat::Player, rank: Rank::Five },
                GameEvent::Received { seat: Seat::Player, count: 2 },
                GameEvent::ExtraTurn(Seat::Player),
            ]
        );
    }

    #[test]
    fn test_go_fish_non_matching_passes_turn() {
        let mut state = GameState::arranged(
            Deck::from_cards(vec![Card::new(Rank::Jack, Suit::Clubs)]),
            cards(&[(Rank::Five, Suit::Clubs)]),
            cards(&[(Rank::Nine, Suit::Clubs)]),
            Seat::Player,
        );

        let outcome = resolve_request(&mut state, Seat::Player, Rank::Five).unwrap();

        assert_eq!(
            outcome.resolution,
            Resolution::Drew { card: Card::new(Rank::Jack, Suit::Clubs), matched: false }
        );
        assert!(!outcome.extra_turn);
        assert_eq!(outcome.next_turn, Some(Seat::Opponent));
        let events: Vec<_> = state.notifications().events().cloned().collect();
        assert_eq!(
            events,
            vec![
                GameEvent::Asked { seat: Seat::Player, rank: Rank::Five },
                GameEvent::GoFish,
                GameEvent::Drew(Seat::Player),
                GameEvent::TurnStarted(Seat::Opponent),
            ]
        );
    }

    #[test]
    fn test_go_fish_matching_draw_keeps_turn() {
        let mut state = GameState::arranged(
            Deck::from_cards(vec![Card::new(Rank::Five, Suit::Diamonds)]),
            cards(&[(Rank::Nine, Suit::Clubs)]),
            cards(&[(Rank::Five, Suit::Clubs)]),
            Seat::Opponent,
        );

        let outcome = resolve_request(&mut state, Seat::Opponent, Rank::Five).unwrap();

        assert!(outcome.extra_turn);
        assert_eq!(outcome.next_turn, Some(Seat::Opponent));
        assert_eq!(
            state.notifications().events().last(),
            Some(&GameEvent::DrewAskedRank(Seat::Opponent))
        );
    }

    #[test]
    fn test_pool_empty_passes_turn() {
        let mut state = GameState::arranged(
            Deck::default(),
            cards(&[(Rank::Five, Suit::Clubs)]),
            cards(&[(Rank::Nine, Suit::Clubs)]),
            Seat::Player,
        );

        let outcome = resolve_request(&mut state, Seat::Player, Rank::Five).unwrap();

        assert_eq!(outcome.resolution, Resolution::PoolEmpty);
        assert_eq!(outcome.next_turn, Some(Seat::Opponent));
        assert!(state.notifications().events().any(|e| *e == GameEvent::PoolEmpty));
    }

    #[test]
    fn test_emptied_giver_is_replenished() {
        let mut state = GameState::arranged(
            Deck::from_cards(vec![Card::new(Rank::Queen, Suit::Clubs)]),
            cards(&[(Rank::Five, Suit::Clubs), (Rank::Six, Suit::Clubs)]),
            cards(&[(Rank::Five, Suit::Hearts)]),
            Seat::Player,
        );

        resolve_request(&mut state, Seat::Player, Rank::Five).unwrap();

        assert_eq!(state.hand(Seat::Opponent).cards(), &[Card::new(Rank::Queen, Suit::Clubs)]);
        assert!(state.deck().is_empty());
        let events: Vec<_> = state.notifications().events().cloned().collect();
        assert_eq!(events[2], GameEvent::Replenished(Seat::Opponent));
        assert_eq!(events[3], GameEvent::ExtraTurn(Seat::Player));
    }
}
