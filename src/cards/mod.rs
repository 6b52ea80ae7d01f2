//! Card values, the shared deck, and per-seat hands.
//!
//! - `Card`: immutable rank + suit value
//! - `Deck`: the 52-card draw pool, shuffled with a `GameRng`
//! - `Hand`: a seat's unordered cards with rank counting

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::Hand;
