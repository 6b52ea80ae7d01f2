//! # go-fish
//!
//! Rules engine for two-seat Go Fish: a human against a scripted opponent.
//! Ask the other seat for a rank; on success keep asking, on failure draw
//! from the pool; collect four-of-a-kind books to win.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: every rule is a function over `&mut GameState`.
//!    Any position can be built with `GameState::arranged` and tested alone.
//!
//! 2. **Injected randomness**: the shuffle and the opponent's tie-break take
//!    a seeded `GameRng`, so games are reproducible.
//!
//! 3. **Presentation stays outside**: a renderer submits commands to a
//!    `Session` and polls `Session::view()` every frame. Time comes from the
//!    renderer's clock through `Session::tick`.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, game state, errors
//! - `cards`: cards, deck, hands
//! - `notify`: outcome events and the notification queue
//! - `rules`: books, the request protocol, the turn controller
//! - `policy`: the scripted opponent's rank choice
//! - `session`: command/query surface and delayed scripted moves

pub mod core;
pub mod cards;
pub mod notify;
pub mod rules;
pub mod policy;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Book, GameResult, GameRng, GameState, Phase, RequestError, Seat, SeatMap, StateError,
    TableConfig,
};

pub use crate::cards::{Card, Deck, Hand, Rank, Suit};

pub use crate::notify::{GameEvent, Notification, NotificationQueue};

pub use crate::rules::{RequestOutcome, Resolution, TurnEntry};

pub use crate::policy::{GreedyPolicy, OpponentPolicy};

pub use crate::session::{Session, TableView};
