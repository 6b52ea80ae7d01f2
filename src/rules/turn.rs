//! Turn controller: turn entry, replenishment, skips and the terminal check.
//!
//! ```text
//!            +--------------------------------------+
//!            v                                      |
//!   PlayerTurn <----------> OpponentTurn            | extra turn
//!        \                     /                    |
//!         +--> GameOver <-----+---------------------+
//! ```
//!
//! Entering a turn replenishes an empty hand from the pool. A seat that is
//! still empty afterwards (pool exhausted) is skipped and the other seat's
//! turn begins. `GameOver` is absorbing.

use crate::core::{GameResult, GameRng, GameState, Phase, Seat, TOTAL_BOOKS};
use crate::notify::GameEvent;

use super::books::detect_and_extract_books;

/// How a turn is being entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEntry {
    /// The turn moved to this seat; it is announced.
    Handoff,
    /// The same seat continues (opening turn or extra turn); not announced.
    Continue,
}

/// Deal a new game: welcome notification, books dealt straight into a
/// hand, then the human's opening turn.
#[must_use]
pub fn start_game(rng: &mut GameRng) -> GameState {
    let mut state = GameState::deal(rng);
    state.notifications.push(GameEvent::Welcome);
    log::info!("new game dealt, {} cards left in the pool", state.deck.len());

    for seat in Seat::ALL {
        detect_and_extract_books(&mut state, seat);
    }
    begin_turn(&mut state, Seat::Player, TurnEntry::Continue);
    state
}

/// End the game if every book is made or nothing is left to play.
///
/// On the transition the notification queue is replaced by exactly one
/// persistent result notification. Returns whether the game is over.
pub fn check_game_over(state: &mut GameState) -> bool {
    if state.is_terminal() {
        return true;
    }

    let all_booked = state.total_books() == TOTAL_BOOKS;
    let exhausted = state.deck.is_empty() && Seat::ALL.iter().all(|&s| state.hands[s].is_empty());
    if !all_booked && !exhausted {
        return false;
    }

    let player = state.book_count(Seat::Player);
    let opponent = state.book_count(Seat::Opponent);
    let result = GameResult::from_books(player, opponent);

    state.phase = Phase::GameOver(result);
    state.notifications.clear();
    state.notifications.push_persistent(GameEvent::GameOver(result));
    log::info!("game over: {:?} ({} books to {})", result, player, opponent);
    true
}

/// Refill an empty hand with one card from the pool.
///
/// No-op when the hand still has cards or the pool is empty. Returns whether
/// a card was drawn.
pub fn replenish(state: &mut GameState, seat: Seat) -> bool {
    if !state.hands[seat].is_empty() {
        return false;
    }
    let Some(card) = state.deck.draw_one() else {
        return false;
    };

    log::trace!("{} replenished with {}", seat, card);
    state.hands[seat].push(card);
    state.notifications.push(GameEvent::Replenished(seat));
    detect_and_extract_books(state, seat);
    true
}

/// Run the turn-begin sequence for `seat`.
///
/// Replenishes the seat's hand; if it is still empty the turn is skipped to
/// the other seat. At most one skip happens: an empty pool with both hands
/// empty is terminal.
pub fn begin_turn(state: &mut GameState, seat: Seat, entry: TurnEntry) {
    let mut seat = seat;
    let mut entry = entry;

    for _ in Seat::ALL {
        if state.is_terminal() {
            return;
        }
        state.phase = Phase::Turn(seat);

        replenish(state, seat);
        if state.is_terminal() {
            return;
        }

        if !state.hands[seat].is_empty() {
            if entry == TurnEntry::Handoff {
                state.notifications.push(GameEvent::TurnStarted(seat));
            }
            log::debug!("{}'s turn ({:?})", seat, entry);
            return;
        }

        if check_game_over(state) {
            return;
        }
        log::debug!("{} has no cards and the pool is empty, skipping", seat);
        state.notifications.push(GameEvent::NoCardsToAsk(seat));
        seat = seat.other();
        entry = TurnEntry::Handoff;
    }

    // Both seats skipped means nothing is left to play.
    check_game_over(state);
}

/// Hand the turn to the seat across from `from`.
pub fn pass_turn(state: &mut GameState, from: Seat) {
    begin_turn(state, from.other(), TurnEntry::Handoff);
}
