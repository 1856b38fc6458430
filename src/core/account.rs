//! Per-player mutable state.
//!
//! A `PlayerAccount` is the record the session keeps for each seat: coin
//! balance and the status flags the actions read and write. Name and role
//! are fixed at registration. Elimination is `active = false`; the account
//! itself lives as long as the session.
//!
//! Fields are only mutated from inside the crate. Callers read them through
//! the accessors and change them by performing actions on the session.

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Coins and status flags of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAccount {
    name: String,
    role: Role,
    coins: u32,
    active: bool,
    /// Blocked from economic actions until the end of the player's next turn.
    sanctioned: bool,
    /// Target of the most recent arrest.
    last_arrested: bool,
    /// Cleared by a Spy; restored when this player's turn ends.
    can_arrest: bool,
    /// Paid a bribe that has not been consumed by a turn change yet.
    bribed: bool,
}

impl PlayerAccount {
    pub(crate) fn new(name: impl Into<String>, role: Role, starting_coins: u32) -> Self {
        Self {
            name: name.into(),
            role,
            coins: starting_coins,
            active: true,
            sanctioned: false,
            last_arrested: false,
            can_arrest: true,
            bribed: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// False once the player has been couped.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_sanctioned(&self) -> bool {
        self.sanctioned
    }

    #[must_use]
    pub fn was_last_arrested(&self) -> bool {
        self.last_arrested
    }

    #[must_use]
    pub fn can_arrest(&self) -> bool {
        self.can_arrest
    }

    #[must_use]
    pub fn is_bribed(&self) -> bool {
        self.bribed
    }

    /// True when the must-coup rule restricts this player to Coup or Cancel.
    #[must_use]
    pub fn must_coup(&self, threshold: u32) -> bool {
        self.coins >= threshold
    }

    // === Crate-internal mutation ===

    /// Add coins, saturating at `u32::MAX`.
    pub(crate) fn credit(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Remove coins. Callers check the balance first; the floor at zero keeps
    /// the non-negative invariant even if they did not.
    pub(crate) fn debit(&mut self, amount: u32) {
        debug_assert!(self.coins >= amount, "{} overdrawn", self.name);
        self.coins = self.coins.saturating_sub(amount);
    }

    pub(crate) fn set_coins(&mut self, coins: u32) {
        self.coins = coins;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) fn set_sanctioned(&mut self, sanctioned: bool) {
        self.sanctioned = sanctioned;
    }

    pub(crate) fn set_last_arrested(&mut self, arrested: bool) {
        self.last_arrested = arrested;
    }

    pub(crate) fn set_can_arrest(&mut self, can_arrest: bool) {
        self.can_arrest = can_arrest;
    }

    pub(crate) fn set_bribed(&mut self, bribed: bool) {
        self.bribed = bribed;
    }
}
