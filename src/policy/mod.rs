//! Opponent decision policies.
//!
//! The scripted seat asks for whatever its [`OpponentPolicy`] picks. The
//! default [`GreedyPolicy`] asks for its most-held rank.

mod greedy;

pub use greedy::{choose_rank, GreedyPolicy};

use crate::cards::{Hand, Rank};
use crate::core::GameRng;

/// Picks the rank the scripted opponent asks for.
pub trait OpponentPolicy: Send + Sync {
    /// Choose a rank from `hand`.
    ///
    /// Must return a rank present in `hand`, or `None` if the hand is empty.
    fn choose_rank(&self, hand: &Hand, rng: &mut GameRng) -> Option<Rank>;
}
