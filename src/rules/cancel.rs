//! The cancellation window.
//!
//! After any action, each other active player whose role cancels that kind
//! of action may try to undo it. The caller chooses who tries and in what
//! order; the session only decides whether an attempt is legal. The first
//! accepted cancel closes the window, since the last action becomes
//! `Cancel` and matches no role.
//!
//! | Canceller | Undoes | Target            | Turn      |
//! |-----------|--------|-------------------|-----------|
//! | Governor  | Tax    | the taxing player | stays     |
//! | General   | Coup   | the couped player | stays     |
//! | Judge     | Bribe  | the briber        | passes    |

use log::{debug, trace};

use crate::core::action::{ActionKind, ActionOutcome, ActionRecord};
use crate::core::error::{CancelViolation, Result, StateViolation, TargetViolation};
use crate::core::player::PlayerId;
use crate::core::state::GameSession;
use crate::roles::Role;

/// The player a cancel of `record` must name: the victim of a coup, the
/// actor otherwise.
fn cancel_subject(record: &ActionRecord) -> PlayerId {
    match record.kind() {
        ActionKind::Coup => record.target().unwrap_or(record.actor),
        _ => record.actor,
    }
}

impl GameSession {
    pub(crate) fn check_cancel(&self, actor: PlayerId, target: PlayerId) -> Result<()> {
        let result = self.cancel_checks(actor, target);
        if let Err(err) = &result {
            trace!("cancel by {} refused: {}", actor, err);
        }
        result
    }

    fn cancel_checks(&self, actor: PlayerId, target: PlayerId) -> Result<()> {
        if !self.is_started() {
            return Err(StateViolation::NotStarted.into());
        }
        let canceller = self.player(actor)?;
        let cancels = canceller
            .role()
            .cancels()
            .ok_or(CancelViolation::NoAbility)?;

        let last = match self.last_action() {
            Some(record) if record.kind() == cancels => record,
            other => {
                return Err(CancelViolation::WrongAction {
                    expected: cancels,
                    found: other.map(ActionRecord::kind),
                }
                .into())
            }
        };
        if !canceller.is_active() {
            return Err(StateViolation::Inactive.into());
        }
        if target == actor || last.actor == actor {
            return Err(CancelViolation::OwnAction.into());
        }
        self.player(target)?;
        if cancel_subject(last) != target {
            return Err(TargetViolation::NotCancellable.into());
        }

        match canceller.role() {
            Role::General => self.check_undo_coup(actor),
            Role::Judge => self.check_undo_bribe(),
            _ => Ok(()),
        }
    }

    /// Cancel the last action. `target` is the couped player for a coup, or
    /// the player who taxed or bribed.
    pub fn cancel(&mut self, actor: PlayerId, target: PlayerId) -> Result<ActionOutcome> {
        self.check_cancel(actor, target)?;

        let outcome = match self.roster[actor].role() {
            Role::Governor => self.undo_tax(actor, target)?,
            Role::General => self.undo_coup(actor, target)?,
            Role::Judge => self.undo_bribe(actor, target)?,
            _ => return Err(CancelViolation::NoAbility.into()),
        };
        debug!("cancel by {} succeeded: {:?}", actor, outcome.effects);
        Ok(outcome)
    }

    /// Whether `player` could cancel the last action right now, against its
    /// proper target.
    #[must_use]
    pub fn can_cancel(&self, player: PlayerId) -> bool {
        self.last_action()
            .map(cancel_subject)
            .is_some_and(|subject| self.check_cancel(player, subject).is_ok())
    }

    /// Every `(canceller, target)` pair that may cancel the last action,
    /// in seating order starting after the player who acted.
    #[must_use]
    pub fn cancellation_candidates(&self) -> Vec<(PlayerId, PlayerId)> {
        let Some(last) = self.last_action() else {
            return Vec::new();
        };
        let subject = cancel_subject(last);
        self.roster
            .seats_after(last.actor)
            .filter(|&seat| self.check_cancel(seat, subject).is_ok())
            .map(|seat| (seat, subject))
            .collect()
    }
}
