//! Guard checks run before any action touches state.
//!
//! Order is fixed and each guard fails fast:
//! 1. game started and not yet decided
//! 2. actor active
//! 3. actor not sanctioned (only for kinds a sanction blocks)
//! 4. actor's turn
//! 5. must-coup (balance below threshold unless the kind is Coup or Cancel)
//!
//! Guards take `&self`, so a failing check cannot leave a partial mutation.

use log::trace;

use crate::core::account::PlayerAccount;
use crate::core::action::ActionKind;
use crate::core::error::{CoupError, Result, StateViolation, TargetViolation};
use crate::core::player::PlayerId;
use crate::core::state::GameSession;

impl GameSession {
    /// Run the guard sequence for `actor` performing `kind` on their turn.
    pub(crate) fn check_guards(&self, actor: PlayerId, kind: ActionKind) -> Result<&PlayerAccount> {
        let result = self.guard_sequence(actor, kind);
        if let Err(err) = &result {
            trace!("{} by {} refused: {}", kind, actor, err);
        }
        result
    }

    fn guard_sequence(&self, actor: PlayerId, kind: ActionKind) -> Result<&PlayerAccount> {
        if !self.is_started() {
            return Err(StateViolation::NotStarted.into());
        }
        if self.active_count() < 2 {
            return Err(StateViolation::GameOver.into());
        }

        let account = self.player(actor)?;
        if !account.role().has_action(kind) {
            return Err(StateViolation::NotInRole(kind).into());
        }
        if !account.is_active() {
            return Err(StateViolation::Inactive.into());
        }
        if kind.blocked_by_sanction() && account.is_sanctioned() {
            return Err(StateViolation::Sanctioned.into());
        }
        if self.current_id() != actor {
            return Err(StateViolation::OutOfTurn.into());
        }
        if !kind.allowed_when_must_coup() && account.must_coup(self.config().must_coup_threshold) {
            return Err(StateViolation::MustCoup.into());
        }
        Ok(account)
    }

    /// Target must exist, be someone else, and still be in the game.
    pub(crate) fn check_target(&self, actor: PlayerId, target: PlayerId) -> Result<&PlayerAccount> {
        let account = self.player(target)?;
        if target == actor {
            return Err(TargetViolation::SelfTarget.into());
        }
        if !account.is_active() {
            return Err(TargetViolation::Inactive.into());
        }
        Ok(account)
    }

    /// Actor must hold at least `need` coins.
    pub(crate) fn check_funds(&self, actor: &PlayerAccount, need: u32) -> Result<()> {
        if actor.coins() < need {
            return Err(CoupError::insufficient(actor.name(), actor.coins(), need));
        }
        Ok(())
    }
}
