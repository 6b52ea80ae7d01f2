//! Core engine types: seats, RNG, configuration, state, errors.
//!
//! Everything else in the crate builds on these. Nothing here knows the
//! rules of the game beyond the fixed constants in [`config`].

pub mod config;
pub mod error;
pub mod rng;
pub mod seat;
pub mod state;

pub use config::{TableConfig, BOOK_SIZE, DECK_SIZE, HAND_SIZE, TOTAL_BOOKS};
pub use error::{RequestError, StateError};
pub use rng::GameRng;
pub use seat::{Seat, SeatMap};
pub use state::{Book, GameResult, GameState, Phase};
