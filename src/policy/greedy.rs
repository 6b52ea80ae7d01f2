//! Greedy most-held-rank policy.

use crate::cards::{Hand, Rank};
use crate::core::GameRng;

use super::OpponentPolicy;

/// Ask for the rank held most often, breaking ties uniformly at random.
///
/// No lookahead and no memory of earlier asks.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl OpponentPolicy for GreedyPolicy {
    fn choose_rank(&self, hand: &Hand, rng: &mut GameRng) -> Option<Rank> {
        choose_rank(hand, rng)
    }
}

/// The greedy choice as a plain function.
///
/// Candidates come from the hand's own counts, so the result is always a
/// held rank.
pub fn choose_rank(hand: &Hand, rng: &mut GameRng) -> Option<Rank> {
    let counts = hand.counts_by_rank();
    let top = counts.values().copied().max()?;

    let mut best: Vec<Rank> = counts
        .into_iter()
        .filter(|&(_, count)| count == top)
        .map(|(rank, _)| rank)
        .collect();
    // Hash order is not meaningful; sort so a seed fixes the pick.
    best.sort_unstable();

    rng.choose(&best).copied()
}
