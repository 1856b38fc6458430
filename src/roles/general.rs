//! General: pays 5 to reverse a coup, and keeps their coins when arrested.

use log::info;
use smallvec::smallvec;

use super::{ArrestPenalty, Role, RoleTraits};
use crate::core::action::{Action, ActionKind, ActionOutcome, SideEffect};
use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::core::state::GameSession;
use crate::rules::actions::TurnEnd;

/// Price of reversing a coup.
pub const CANCEL_COST: u32 = 5;

pub static TRAITS: RoleTraits = RoleTraits {
    special: Some(ActionKind::Cancel),
    cancels: Some(ActionKind::Coup),
    when_arrested: ArrestPenalty::Immune { mover_gains: 1 },
    ..RoleTraits::plain(Role::General)
};

impl GameSession {
    pub(crate) fn check_undo_coup(&self, actor: PlayerId) -> Result<()> {
        self.check_funds(self.player(actor)?, CANCEL_COST)
    }

    /// Bring the couped `target` back into the game. The turn stays where
    /// the coup left it.
    pub(crate) fn undo_coup(&mut self, actor: PlayerId, target: PlayerId) -> Result<ActionOutcome> {
        self.roster[actor].debit(CANCEL_COST);
        self.roster[target].set_active(true);
        self.active_count += 1;
        info!("{} reverses the coup on {}", self.roster[actor].name(), self.roster[target].name());

        self.conclude(
            actor,
            Action::Cancel(target),
            smallvec![SideEffect::PlayerRestored(target)],
            TurnEnd::Keep,
        )
    }
}
