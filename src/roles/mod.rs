//! The six roles and their dispatch table.
//!
//! A role changes the rules in three ways:
//! - a special action (Baron's invest, Spy's spy-on, a cancel for Governor,
//!   General and Judge) or an override (Governor's tax)
//! - which action kind its cancel may undo
//! - passive modifiers applied inside shared actions when a player of this
//!   role is the *target* (arrest, sanction), or when their turn ends
//!
//! Each role module holds its `TRAITS` entry plus its special action.
//! `Role::traits` maps every variant to its entry, so adding a role is a
//! compile error until the table knows about it.
//!
//! Accounts are created only through `create_account`, keyed by role name.

pub mod governor;
pub mod spy;
pub mod baron;
pub mod general;
pub mod judge;
pub mod merchant;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::core::account::PlayerAccount;
use crate::core::action::ActionKind;
use crate::core::config::RulesConfig;
use crate::core::error::CoupError;

/// A player's role, fixed at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Governor,
    Spy,
    Baron,
    General,
    Judge,
    Merchant,
}

/// What an arrest does to a target of some role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrestPenalty {
    /// The target pays the configured amount to the arresting player.
    Standard,
    /// The target pays nothing; the arresting player is still paid.
    Immune { mover_gains: u32 },
    /// The target pays the bank; the arresting player gets nothing.
    ToBank { target_loses: u32 },
}

/// Coin bonus granted when a player's turn ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnEndBonus {
    /// Balance the player must hold after their action.
    pub min_coins: u32,
    pub amount: u32,
}

/// One row of the role table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleTraits {
    pub role: Role,

    /// Action only this role can perform, if any.
    pub special: Option<ActionKind>,

    /// Action kind this role's cancel undoes.
    pub cancels: Option<ActionKind>,

    /// Tax yield overriding the configured one.
    pub tax_yield: Option<u32>,

    /// Applied when this role is arrested.
    pub when_arrested: ArrestPenalty,

    /// Extra price paid by whoever sanctions this role.
    pub sanction_surcharge: u32,

    /// Coins this role receives when sanctioned.
    pub sanction_compensation: u32,

    pub turn_end_bonus: Option<TurnEndBonus>,
}

impl RoleTraits {
    /// Entry for a role with no modifiers; role modules override fields.
    pub(crate) const fn plain(role: Role) -> Self {
        Self {
            role,
            special: None,
            cancels: None,
            tax_yield: None,
            when_arrested: ArrestPenalty::Standard,
            sanction_surcharge: 0,
            sanction_compensation: 0,
            turn_end_bonus: None,
        }
    }
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Governor,
        Role::Spy,
        Role::Baron,
        Role::General,
        Role::Judge,
        Role::Merchant,
    ];

    /// This role's row in the table.
    #[must_use]
    pub fn traits(self) -> &'static RoleTraits {
        match self {
            Role::Governor => &governor::TRAITS,
            Role::Spy => &spy::TRAITS,
            Role::Baron => &baron::TRAITS,
            Role::General => &general::TRAITS,
            Role::Judge => &judge::TRAITS,
            Role::Merchant => &merchant::TRAITS,
        }
    }

    /// Registration name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Governor => "Governor",
            Role::Spy => "Spy",
            Role::Baron => "Baron",
            Role::General => "General",
            Role::Judge => "Judge",
            Role::Merchant => "Merchant",
        }
    }

    /// Action kind this role may cancel, `None` for roles without a cancel.
    #[must_use]
    pub fn cancels(self) -> Option<ActionKind> {
        self.traits().cancels
    }

    /// Can a player of this role cancel an action of `kind`?
    #[must_use]
    pub fn can_cancel(self, kind: ActionKind) -> bool {
        self.cancels() == Some(kind)
    }

    /// May this role perform `kind` at all?
    #[must_use]
    pub fn has_action(self, kind: ActionKind) -> bool {
        ActionKind::BASE.contains(&kind) || self.traits().special == Some(kind)
    }

    /// Base actions followed by the role's special one.
    #[must_use]
    pub fn available_actions(self) -> SmallVec<[ActionKind; 7]> {
        let mut actions = SmallVec::from_slice(&ActionKind::BASE);
        if let Some(special) = self.traits().special {
            actions.push(special);
        }
        actions
    }

    /// Coins this role receives from tax.
    #[must_use]
    pub fn tax_yield(self, config: &RulesConfig) -> u32 {
        self.traits().tax_yield.unwrap_or(config.tax_yield)
    }

    /// Price of sanctioning a player of this role.
    #[must_use]
    pub fn sanction_price(self, config: &RulesConfig) -> u32 {
        config.sanction_cost + self.traits().sanction_surcharge
    }

    /// (coins the target loses, coins the arresting player gains).
    #[must_use]
    pub fn arrest_transfer(self, config: &RulesConfig) -> (u32, u32) {
        match self.traits().when_arrested {
            ArrestPenalty::Standard => (config.arrest_take, config.arrest_take),
            ArrestPenalty::Immune { mover_gains } => (0, mover_gains),
            ArrestPenalty::ToBank { target_loses } => (target_loses, 0),
        }
    }

    /// Bonus owed at the end of this player's turn, given the balance they
    /// hold after their action.
    #[must_use]
    pub fn turn_end_bonus(self, coins: u32) -> Option<u32> {
        self.traits()
            .turn_end_bonus
            .filter(|bonus| coins >= bonus.min_coins)
            .map(|bonus| bonus.amount)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = CoupError;

    /// Exact, case-sensitive role names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| CoupError::UnknownRole(s.to_string()))
    }
}

/// The only way to create an account: name plus role name.
pub(crate) fn create_account(
    name: &str,
    role_name: &str,
    starting_coins: u32,
) -> Result<PlayerAccount, CoupError> {
    let role: Role = role_name.parse()?;
    Ok(PlayerAccount::new(name, role, starting_coins))
}
