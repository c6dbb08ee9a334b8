//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index in turn order. The first player to roll is `PlayerId(0)`.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a `Vec` for O(1) access, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::{Cell, START};

/// Seat index in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The seat after this one, wrapping around at `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A seated player: display name and board position.
///
/// Position 0 means the token has not entered the board yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: Cell,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: START,
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use snakes_ladders::core::{PlayerId, PlayerMap};
///
/// let mut laps: PlayerMap<u32> = PlayerMap::new(3, |_| 0);
/// laps[PlayerId::new(1)] += 1;
/// assert_eq!(laps[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Build a map from values already in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.index(), 0);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    }

    #[test]
    fn test_new_player_starts_off_board() {
        let player = Player::new("Ada");
        assert_eq!(player.position, START);
        assert_eq!(player.name, "Ada");
    }

    #[test]
    fn test_player_map_from_vec() {
        let map = PlayerMap::from_vec(vec!["a", "b", "c"]);
        assert_eq!(map.player_count(), 3);
        assert_eq!(map[PlayerId::new(2)], "c");

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[1], (PlayerId::new(1), &"b"));
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32);
        map[PlayerId::new(1)] = 20;
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![0, 20]);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::from_vec(Vec::new());
    }
}
