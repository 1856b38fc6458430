//! Judge: revokes a bribe, forcing the turn on, and costs an extra coin to
//! sanction.

use log::debug;
use smallvec::smallvec;

use super::{Role, RoleTraits};
use crate::core::action::{Action, ActionKind, ActionOutcome, ActionRecord, SideEffect};
use crate::core::error::{Result, RosterViolation};
use crate::core::player::PlayerId;
use crate::core::state::GameSession;

pub static TRAITS: RoleTraits = RoleTraits {
    special: Some(ActionKind::Cancel),
    cancels: Some(ActionKind::Bribe),
    sanction_surcharge: 1,
    ..RoleTraits::plain(Role::Judge)
};

impl GameSession {
    pub(crate) fn check_undo_bribe(&self) -> Result<()> {
        if self.active_count() < 2 {
            return Err(RosterViolation::NotEnoughActive {
                active: self.active_count(),
            }
            .into());
        }
        Ok(())
    }

    /// Revoke `target`'s bribe. The bribing player loses the extra action:
    /// the turn passes immediately.
    pub(crate) fn undo_bribe(&mut self, actor: PlayerId, target: PlayerId) -> Result<ActionOutcome> {
        self.roster[target].set_bribed(false);
        debug!("{} revokes {}'s bribe", self.roster[actor].name(), self.roster[target].name());

        let record = ActionRecord::new(actor, Action::Cancel(target), self.turn_number, self.next_sequence());
        let change = self.advance_turn()?;
        self.record(record);

        let mut effects = smallvec![SideEffect::BribeRevoked(target)];
        if let Some(amount) = change.bonus {
            effects.push(SideEffect::MerchantBonus {
                player: change.from,
                amount,
            });
        }
        effects.push(SideEffect::TurnPassed {
            from: change.from,
            to: change.to,
        });

        Ok(ActionOutcome {
            record,
            turn_advanced: true,
            effects,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{CancelViolation, CoupError, ErrorKind};

    const BRIBER: PlayerId = PlayerId::new(0);
    const JUDGE: PlayerId = PlayerId::new(1);

    fn session() -> GameSession {
        let mut session = GameSession::new();
        session.add_player("Briber", "Spy").unwrap();
        session.add_player("Judge", "Judge").unwrap();
        session.start_game().unwrap();
        session
    }

    #[test]
    fn test_cancel_bribe_passes_turn() {
        let mut session = session();
        session.set_coins(BRIBER, 5).unwrap();
        session.bribe(BRIBER).unwrap();
        assert!(session.player(BRIBER).unwrap().is_bribed());

        let outcome = session.cancel(JUDGE, BRIBER).unwrap();

        assert!(outcome.turn_advanced);
        assert!(!session.player(BRIBER).unwrap().is_bribed());
        assert_eq!(session.player(BRIBER).unwrap().coins(), 1);
        assert_eq!(session.current_id(), JUDGE);
        assert_eq!(session.last_action_kind(), Some(ActionKind::Cancel));
    }

    #[test]
    fn test_cancel_requires_bribe() {
        let mut session = session();
        session.gather(BRIBER).unwrap();

        assert_eq!(
            session.cancel(JUDGE, BRIBER).unwrap_err(),
            CoupError::InvalidCancellation(CancelViolation::WrongAction {
                expected: ActionKind::Bribe,
                found: Some(ActionKind::Gather),
            })
        );
    }

    #[test]
    fn test_sanctioning_judge_costs_four() {
        let mut session = session();
        session.set_coins(BRIBER, 3).unwrap();
        assert_eq!(session.sanction(BRIBER, JUDGE).unwrap_err().kind(), ErrorKind::InsufficientFunds);
        assert_eq!(session.player(BRIBER).unwrap().coins(), 3);

        session.set_coins(BRIBER, 4).unwrap();
        session.sanction(BRIBER, JUDGE).unwrap();
        assert_eq!(session.player(BRIBER).unwrap().coins(), 0);
        assert!(session.player(JUDGE).unwrap().is_sanctioned());
    }
}
