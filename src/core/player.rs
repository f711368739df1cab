//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two combatants.
//!
//! ## PlayerPair
//!
//! Fixed-size per-player storage backed by `[T; 2]` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of combatants in a match.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first player.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The second player.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Player index must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other combatant.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs in seat order.
    ///
    /// ```
    /// use word_combat::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::both().collect();
    /// assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use word_combat::core::{PlayerId, PlayerPair};
///
/// let mut health: PlayerPair<u32> = PlayerPair::with_value(100);
/// health[PlayerId::SECOND] -= 35;
///
/// assert_eq!(health[PlayerId::FIRST], 100);
/// assert_eq!(health[PlayerId::SECOND], 65);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerPair<T> {
    /// Create a pair from explicit values in seat order.
    pub fn from_values(first: T, second: T) -> Self {
        Self { data: [first, second] }
    }

    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self::from_values(factory(PlayerId::FIRST), factory(PlayerId::SECOND))
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_values(value.clone(), value)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Transform each entry, keeping seat order.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerPair<U> {
        PlayerPair::from_values(f(&self.data[0]), f(&self.data[1]))
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
