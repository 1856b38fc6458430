//! Rule constants shared by every role.
//!
//! Role-specific numbers (Governor's tax, Judge's sanction surcharge, ...)
//! live in the role table next to the role they belong to. `RulesConfig`
//! holds only what applies to everyone: roster bounds, base yields and
//! base costs.
//!
//! `RulesConfig::default()` is the standard game.
//!
//! Deserialization goes through `validate`, so a config read from JSON
//! keeps the same bounds the builders assert.

use serde::{Deserialize, Serialize};

use super::error::ConfigViolation;

/// Fewest players any game can have.
pub const MIN_PLAYERS: usize = 2;

/// Most players any game can have, one per role.
pub const MAX_PLAYERS: usize = 6;

/// Roster bounds, base yields and base costs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedRulesConfig")]
pub struct RulesConfig {
    /// Fewest players a game can start with.
    pub min_players: usize,

    /// Most seats a roster can hold.
    pub max_players: usize,

    /// Coins each account starts with.
    pub starting_coins: u32,

    /// At or above this balance only Coup and Cancel are allowed.
    pub must_coup_threshold: u32,

    pub gather_yield: u32,

    /// Tax yield for roles without their own.
    pub tax_yield: u32,

    pub bribe_cost: u32,

    /// Sanction price before the target's surcharge.
    pub sanction_cost: u32,

    pub coup_cost: u32,

    /// Coins moved from target to mover by a standard arrest.
    pub arrest_take: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 6,
            starting_coins: 0,
            must_coup_threshold: 10,
            gather_yield: 1,
            tax_yield: 2,
            bribe_cost: 4,
            sanction_cost: 3,
            coup_cost: 7,
            arrest_take: 1,
        }
    }
}

impl RulesConfig {
    /// Standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the roster bounds, within 2 to 6 players.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min >= MIN_PLAYERS, "A game needs at least 2 players");
        assert!(min <= max, "min_players must not exceed max_players");
        assert!(max <= MAX_PLAYERS, "At most 6 players supported");
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_starting_coins(mut self, coins: u32) -> Self {
        self.starting_coins = coins;
        self
    }

    #[must_use]
    pub fn with_must_coup_threshold(mut self, threshold: u32) -> Self {
        assert!(
            threshold >= self.coup_cost,
            "must-coup threshold below coup cost would force an unaffordable coup"
        );
        self.must_coup_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_coup_cost(mut self, cost: u32) -> Self {
        self.coup_cost = cost;
        self
    }

    #[must_use]
    pub fn with_bribe_cost(mut self, cost: u32) -> Self {
        self.bribe_cost = cost;
        self
    }

    #[must_use]
    pub fn with_sanction_cost(mut self, cost: u32) -> Self {
        self.sanction_cost = cost;
        self
    }

    /// Seats a roster may hold. Never more than `MAX_PLAYERS`, even if the
    /// public field was set past it.
    #[must_use]
    pub fn max_seats(&self) -> usize {
        self.max_players.min(MAX_PLAYERS)
    }

    /// Is `count` a legal number of players to start with?
    #[must_use]
    pub fn allows_player_count(&self, count: usize) -> bool {
        (self.min_players.max(MIN_PLAYERS)..=self.max_seats()).contains(&count)
    }

    /// Check the bounds the builders assert.
    pub fn validate(&self) -> Result<(), ConfigViolation> {
        if self.min_players < MIN_PLAYERS
            || self.max_players > MAX_PLAYERS
            || self.min_players > self.max_players
        {
            return Err(ConfigViolation::PlayerRange {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if self.must_coup_threshold < self.coup_cost {
            return Err(ConfigViolation::MustCoupBelowCoupCost {
                threshold: self.must_coup_threshold,
                coup_cost: self.coup_cost,
            });
        }
        Ok(())
    }
}

/// Wire form of `RulesConfig`: missing fields take the standard values,
/// then the result is validated.
#[derive(Deserialize)]
#[serde(default)]
struct UncheckedRulesConfig {
    min_players: usize,
    max_players: usize,
    starting_coins: u32,
    must_coup_threshold: u32,
    gather_yield: u32,
    tax_yield: u32,
    bribe_cost: u32,
    sanction_cost: u32,
    coup_cost: u32,
    arrest_take: u32,
}

impl Default for UncheckedRulesConfig {
    fn default() -> Self {
        let RulesConfig {
            min_players,
            max_players,
            starting_coins,
            must_coup_threshold,
            gather_yield,
            tax_yield,
            bribe_cost,
            sanction_cost,
            coup_cost,
            arrest_take,
        } = RulesConfig::default();
        Self {
            min_players,
            max_players,
            starting_coins,
            must_coup_threshold,
            gather_yield,
            tax_yield,
            bribe_cost,
            sanction_cost,
            coup_cost,
            arrest_take,
        }
    }
}

impl TryFrom<UncheckedRulesConfig> for RulesConfig {
    type Error = ConfigViolation;

    fn try_from(raw: UncheckedRulesConfig) -> Result<Self, Self::Error> {
        let config = RulesConfig {
            min_players: raw.min_players,
            max_players: raw.max_players,
            starting_coins: raw.starting_coins,
            must_coup_threshold: raw.must_coup_threshold,
            gather_yield: raw.gather_yield,
            tax_yield: raw.tax_yield,
            bribe_cost: raw.bribe_cost,
            sanction_cost: raw.sanction_cost,
            coup_cost: raw.coup_cost,
            arrest_take: raw.arrest_take,
        };
        config.validate()?;
        Ok(config)
    }
}
