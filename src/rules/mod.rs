//! Game rules.
//!
//! Every rule is a free function over `&mut GameState`:
//! - `books`: four-of-a-kind detection and extraction
//! - `turn`: turn entry, replenishment, skips, terminal check
//! - `request`: the ask / transfer / go-fish protocol
//!
//! Book detection runs immediately after any hand mutation that can complete
//! a rank, and the terminal check runs after any book and after every
//! request. Notifications are appended in the order the steps happen.

pub mod books;
pub mod request;
pub mod turn;

pub use books::detect_and_extract_books;
pub use request::{resolve_request, RequestOutcome, Resolution};
pub use turn::{begin_turn, check_game_over, pass_turn, replenish, start_game, TurnEntry};
