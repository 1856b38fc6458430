//! Spy: looks at a player's coins and stops them arresting until their
//! turn ends.

use log::debug;
use smallvec::smallvec;

use super::{Role, RoleTraits};
use crate::core::action::{Action, ActionKind, ActionOutcome, SideEffect};
use crate::core::error::{Result, TargetViolation};
use crate::core::player::PlayerId;
use crate::core::state::GameSession;
use crate::rules::actions::TurnEnd;

pub static TRAITS: RoleTraits = RoleTraits {
    special: Some(ActionKind::SpyOn),
    ..RoleTraits::plain(Role::Spy)
};

impl GameSession {
    pub(crate) fn check_spy_on(&self, actor: PlayerId, target: PlayerId) -> Result<()> {
        self.check_guards(actor, ActionKind::SpyOn)?;
        let watched = self.check_target(actor, target)?;
        if !watched.can_arrest() {
            return Err(TargetViolation::AlreadyCannotArrest.into());
        }
        Ok(())
    }

    /// Reveal `target`'s coins and clear their ability to arrest. Consumes
    /// the turn like any other action.
    pub fn spy_on(&mut self, actor: PlayerId, target: PlayerId) -> Result<ActionOutcome> {
        self.check_spy_on(actor, target)?;

        let watched = &mut self.roster[target];
        let coins = watched.coins();
        watched.set_can_arrest(false);
        debug!("{} spies on {}: {} coins", self.roster[actor].name(), self.roster[target].name(), coins);

        self.conclude(
            actor,
            Action::SpyOn(target),
            smallvec![SideEffect::CoinsRevealed {
                player: target,
                coins,
            }],
            TurnEnd::Pass {
                clears_sanction: true,
            },
        )
    }
}
