//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! The table has exactly two seats: the human `Player` and the scripted
//! `Opponent`. Every rule that talks about "the other side" goes through
//! [`Seat::other`].
//!
//! ## SeatMap
//!
//! Fixed two-entry storage indexed by `Seat`, used for hands and books.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The human, driven by external commands.
    Player,
    /// The scripted opponent, driven by an `OpponentPolicy`.
    Opponent,
}

impl Seat {
    /// Both seats, human first.
    pub const ALL: [Seat; 2] = [Seat::Player, Seat::Opponent];

    /// The seat across the table.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::Player => Seat::Opponent,
            Seat::Opponent => Seat::Player,
        }
    }

    /// Storage index (0 for the human, 1 for the opponent).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Player => 0,
            Seat::Opponent => 1,
        }
    }

    /// Subject used when rendering notification text.
    #[must_use]
    pub const fn subject(self) -> &'static str {
        match self {
            Seat::Player => "You",
            Seat::Opponent => "The computer",
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Player => write!(f, "player"),
            Seat::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use go_fish::core::{Seat, SeatMap};
///
/// let mut books: SeatMap<u32> = SeatMap::with_value(0);
/// books[Seat::Opponent] += 2;
///
/// assert_eq!(books[Seat::Player], 0);
/// assert_eq!(books[Seat::Opponent], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Player), factory(Seat::Opponent)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Borrow both entries mutably: `(seat's data, other seat's data)`.
    pub fn pair_mut(&mut self, seat: Seat) -> (&mut T, &mut T) {
        let [player, opponent] = &mut self.data;
        match seat {
            Seat::Player => (player, opponent),
            Seat::Opponent => (opponent, player),
        }
    }

    /// Iterate over (Seat, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involution() {
        for seat in Seat::ALL {
            assert_ne!(seat.other(), seat);
            assert_eq!(seat.other().other(), seat);
        }
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<usize> = SeatMap::new(|s| s.index() * 10);

        assert_eq!(map[Seat::Player], 0);
        assert_eq!(map[Seat::Opponent], 10);
    }

    #[test]
    fn test_pair_mut() {
        let mut map: SeatMap<Vec<i32>> = SeatMap::default();

        let (mine, theirs) = map.pair_mut(Seat::Opponent);
        mine.push(1);
        theirs.push(2);

        assert_eq!(map[Seat::Opponent], vec![1]);
        assert_eq!(map[Seat::Player], vec![2]);
    }

    #[test]
    fn test_iter_order() {
        let map: SeatMap<i32> = SeatMap::new(|s| s.index() as i32);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Seat::Player, &0), (Seat::Opponent, &1)]);
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<u32> = SeatMap::new(|s| s.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
