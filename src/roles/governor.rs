//! Governor: collects 3 in tax and can cancel another player's tax.

use log::debug;
use smallvec::smallvec;

use super::{Role, RoleTraits};
use crate::core::action::{Action, ActionKind, ActionOutcome, SideEffect};
use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::core::state::GameSession;
use crate::rules::actions::TurnEnd;

pub static TRAITS: RoleTraits = RoleTraits {
    special: Some(ActionKind::Cancel),
    cancels: Some(ActionKind::Tax),
    tax_yield: Some(3),
    ..RoleTraits::plain(Role::Governor)
};

impl GameSession {
    /// Take back the coins the last tax paid `target`: what their role
    /// collects in tax, 3 for a Governor and 2 otherwise. The turn stays
    /// where it is.
    pub(crate) fn undo_tax(&mut self, actor: PlayerId, target: PlayerId) -> Result<ActionOutcome> {
        let refund = self.roster[target].role().tax_yield(self.config());
        let taxed = &mut self.roster[target];
        let refund = refund.min(taxed.coins());
        taxed.debit(refund);
        debug!("{} cancels {}'s tax (-{})", self.roster[actor].name(), self.roster[target].name(), refund);

        self.conclude(
            actor,
            Action::Cancel(target),
            smallvec![SideEffect::TaxRefunded {
                player: target,
                amount: refund,
            }],
            TurnEnd::Keep,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{CancelViolation, CoupError};

    const GOV: PlayerId = PlayerId::new(0);
    const OTHER: PlayerId = PlayerId::new(1);

    fn session(other_role: &str) -> GameSession {
        let mut session = GameSession::new();
        session.add_player("Gov", "Governor").unwrap();
        session.add_player("Other", other_role).unwrap();
        session.start_game().unwrap();
        session
    }

    #[test]
    fn test_governor_tax_yields_three() {
        let mut session = session("Spy");
        session.tax(GOV).unwrap();
        assert_eq!(session.player(GOV).unwrap().coins(), 3);
    }

    #[test]
    fn test_cancel_refunds_and_keeps_turn() {
        let mut session = session("Spy");
        session.gather(GOV).unwrap();
        session.tax(OTHER).unwrap();
        assert_eq!(session.current_id(), GOV);

        let outcome = session.cancel(GOV, OTHER).unwrap();

        assert!(!outcome.turn_advanced);
        assert_eq!(session.player(OTHER).unwrap().coins(), 0);
        assert_eq!(session.current_id(), GOV);
        assert_eq!(session.last_action_kind(), Some(ActionKind::Cancel));
    }

    #[test]
    fn test_cancel_other_governor_refunds_three() {
        let mut session = session("Governor");
        session.gather(GOV).unwrap();
        session.tax(OTHER).unwrap();
        assert_eq!(session.player(OTHER).unwrap().coins(), 3);

        session.cancel(GOV, OTHER).unwrap();
        assert_eq!(session.player(OTHER).unwrap().coins(), 0);
    }

    #[test]
    fn test_cancel_requires_tax() {
        let mut session = session("Spy");
        session.gather(GOV).unwrap();
        session.gather(OTHER).unwrap();

        assert_eq!(
            session.cancel(GOV, OTHER).unwrap_err(),
            CoupError::InvalidCancellation(CancelViolation::WrongAction {
                expected: ActionKind::Tax,
                found: Some(ActionKind::Gather),
            })
        );
    }

    #[test]
    fn test_cancel_own_tax() {
        let mut session = session("Spy");
        session.tax(GOV).unwrap();

        assert_eq!(
            session.cancel(GOV, GOV).unwrap_err(),
            CoupError::InvalidCancellation(CancelViolation::OwnAction)
        );
        assert_eq!(session.player(GOV).unwrap().coins(), 3);
    }
}
