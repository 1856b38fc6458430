//! Baron: invests 3 coins for a return of 6, and is compensated when
//! sanctioned.

use log::debug;
use smallvec::SmallVec;

use super::{Role, RoleTraits};
use crate::core::action::{Action, ActionKind, ActionOutcome};
use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::core::state::GameSession;
use crate::rules::actions::TurnEnd;

/// Coins a Baron must hold to invest.
pub const INVEST_STAKE: u32 = 3;

/// Net coins an investment adds.
pub const INVEST_GAIN: u32 = 3;

pub static TRAITS: RoleTraits = RoleTraits {
    special: Some(ActionKind::Invest),
    sanction_compensation: 1,
    ..RoleTraits::plain(Role::Baron)
};

impl GameSession {
    pub(crate) fn check_invest(&self, actor: PlayerId) -> Result<()> {
        let baron = self.check_guards(actor, ActionKind::Invest)?;
        self.check_funds(baron, INVEST_STAKE)
    }

    /// Stake 3 coins and get 6 back.
    pub fn invest(&mut self, actor: PlayerId) -> Result<ActionOutcome> {
        self.check_invest(actor)?;

        self.roster[actor].credit(INVEST_GAIN);
        debug!("{} invests, now {}", self.roster[actor].name(), self.roster[actor].coins());

        self.conclude(
            actor,
            Action::Invest,
            SmallVec::new(),
            TurnEnd::Pass {
                clears_sanction: true,
            },
        )
    }
}
