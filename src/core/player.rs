//! Player identification and seat-ordered storage.
//!
//! ## PlayerId
//!
//! Seat index into the roster. Seats are assigned in registration order and
//! never change for the lifetime of a session, so a `PlayerId` stays valid
//! across eliminations and reactivations.
//!
//! ## Roster
//!
//! Seat-indexed storage backed by `Vec` for O(1) access. Grows only while
//! the session is being set up; once the game starts no seat is added or
//! removed.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::account::PlayerAccount;

/// Seat identifier. The first registered player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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

    /// Iterate over all seats of a roster with `player_count` players.
    ///
    /// ```
    /// use coup_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Seat-ordered player accounts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    seats: Vec<PlayerAccount>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Append an account and return its seat, `None` once every `u8` seat
    /// is taken.
    pub(crate) fn push(&mut self, account: PlayerAccount) -> Option<PlayerId> {
        let id = PlayerId(u8::try_from(self.seats.len()).ok()?);
        self.seats.push(account);
        Some(id)
    }

    pub(crate) fn clear(&mut self) {
        self.seats.clear();
    }

    /// Get an account, `None` if the seat does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&PlayerAccount> {
        self.seats.get(player.index())
    }

    pub(crate) fn get_mut(&mut self, player: PlayerId) -> Option<&mut PlayerAccount> {
        self.seats.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &PlayerAccount) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &PlayerAccount)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(i, account)| (PlayerId(i as u8), account))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut PlayerAccount)> {
        self.seats
            .iter_mut()
            .enumerate()
            .map(|(i, account)| (PlayerId(i as u8), account))
    }

    /// Iterate over all seats.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.seats.len())
    }

    /// Seats after `from` in circular order, ending with `from` itself.
    pub fn seats_after(&self, from: PlayerId) -> impl Iterator<Item = PlayerId> {
        let len = self.seats.len();
        (1..=len).map(move |step| PlayerId(((from.index() + step) % len) as u8))
    }
}

impl Index<PlayerId> for Roster {
    type Output = PlayerAccount;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.seats[player.index()]
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.seats[player.index()]
    }
}
