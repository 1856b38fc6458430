//! Base actions available to every role.
//!
//! Each action is split in two: a `check_*` method on `&self` that runs the
//! guards and the action's own preconditions, and the public method that
//! calls it and then mutates. A failed action therefore changes nothing and
//! does not consume the turn.
//!
//! Turn-consuming actions end through `conclude`, which decides whether the
//! turn passes. It does not pass when the previous action was a bribe (the
//! bribe's extra action), and a coup never passes it into a decided game.

use log::{debug, info};
use smallvec::{smallvec, SmallVec};

use crate::core::action::{Action, ActionKind, ActionOutcome, ActionRecord, SideEffect};
use crate::core::error::{Result, StateViolation, TargetViolation};
use crate::core::player::PlayerId;
use crate::core::state::GameSession;

/// How an action ends the mover's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TurnEnd {
    /// The turn stays with the mover (bribe, Governor and General cancels).
    Keep,
    /// The turn passes unless a bribe is pending.
    Pass {
        /// Lift the mover's sanction once their turn is over.
        clears_sanction: bool,
    },
}

impl GameSession {
    /// Record a completed action and pass the turn if it should pass.
    pub(crate) fn conclude(
        &mut self,
        actor: PlayerId,
        action: Action,
        mut effects: SmallVec<[SideEffect; 2]>,
        end: TurnEnd,
    ) -> Result<ActionOutcome> {
        let record = ActionRecord::new(actor, action, self.turn_number, self.next_sequence());

        let mut turn_advanced = false;
        if let TurnEnd::Pass { clears_sanction } = end {
            if !self.extra_action_pending() && self.active_count > 1 {
                let change = self.advance_turn()?;
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

                let mover = &mut self.roster[actor];
                mover.set_can_arrest(true);
                if clears_sanction {
                    mover.set_sanctioned(false);
                }
                turn_advanced = true;
            }
        }

        self.record(record);
        Ok(ActionOutcome {
            record,
            turn_advanced,
            effects,
        })
    }

    // === Gather ===

    pub(crate) fn check_gather(&self, actor: PlayerId) -> Result<()> {
        self.check_guards(actor, ActionKind::Gather)?;
        Ok(())
    }

    /// Take one coin from the bank.
    pub fn gather(&mut self, actor: PlayerId) -> Result<ActionOutcome> {
        self.check_gather(actor)?;

        let amount = self.config().gather_yield;
        self.roster[actor].credit(amount);
        debug!("{} gathers {}", self.roster[actor].name(), amount);

        self.conclude(
            actor,
            Action::Gather,
            SmallVec::new(),
            TurnEnd::Pass {
                clears_sanction: false,
            },
        )
    }

    // === Tax ===

    pub(crate) fn check_tax(&self, actor: PlayerId) -> Result<()> {
        self.check_guards(actor, ActionKind::Tax)?;
        Ok(())
    }

    /// Take the role's tax yield from the bank (2, or 3 for a Governor).
    pub fn tax(&mut self, actor: PlayerId) -> Result<ActionOutcome> {
        self.check_tax(actor)?;

        let amount = self.roster[actor].role().tax_yield(self.config());
        self.roster[actor].credit(amount);
        debug!("{} taxes {}", self.roster[actor].name(), amount);

        self.conclude(
            actor,
            Action::Tax,
            SmallVec::new(),
            TurnEnd::Pass {
                clears_sanction: true,
            },
        )
    }

    // === Bribe ===

    pub(crate) fn check_bribe(&self, actor: PlayerId) -> Result<()> {
        let account = self.check_guards(actor, ActionKind::Bribe)?;
        self.check_funds(account, self.config().bribe_cost)
    }

    /// Pay for an extra action. The turn does not pass, and a Judge may
    /// revoke the bribe.
    pub fn bribe(&mut self, actor: PlayerId) -> Result<ActionOutcome> {
        self.check_bribe(actor)?;

        let cost = self.config().bribe_cost;
        let mover = &mut self.roster[actor];
        mover.debit(cost);
        mover.set_bribed(true);
        debug!("{} bribes for {}", mover.name(), cost);

        self.conclude(actor, Action::Bribe, SmallVec::new(), TurnEnd::Keep)
    }

    // === Arrest ===

    pub(crate) fn check_arrest(&self, actor: PlayerId, target: PlayerId) -> Result<()> {
        let mover = self.check_guards(actor, ActionKind::Arrest)?;
        let victim = self.check_target(actor, target)?;

        if victim.coins() == 0 {
            return Err(TargetViolation::NoCoins.into());
        }
        if victim.was_last_arrested() {
            return Err(TargetViolation::AlreadyArrested.into());
        }
        if !mover.can_arrest() {
            return Err(StateViolation::ArrestBlocked.into());
        }
        let (target_loses, _) = victim.role().arrest_transfer(self.config());
        if victim.coins() < target_loses {
            return Err(TargetViolation::NoCoins.into());
        }
        Ok(())
    }

    /// Take coins from another player. What moves depends on the target's
    /// role; a player cannot be arrested twice in a row.
    pub fn arrest(&mut self, actor: PlayerId, target: PlayerId) -> Result<ActionOutcome> {
        self.check_arrest(actor, target)?;

        for (_, account) in self.roster.iter_mut() {
            account.set_last_arrested(false);
        }

        let (target_loses, mover_gains) = self.roster[target].role().arrest_transfer(self.config());
        let victim = &mut self.roster[target];
        victim.debit(target_loses);
        victim.set_last_arrested(true);
        self.roster[actor].credit(mover_gains);
        debug!(
            "{} arrests {}: -{} / +{}",
            self.roster[actor].name(),
            self.roster[target].name(),
            target_loses,
            mover_gains
        );

        self.conclude(
            actor,
            Action::Arrest(target),
            SmallVec::new(),
            TurnEnd::Pass {
                clears_sanction: true,
            },
        )
    }

    // === Sanction ===

    pub(crate) fn check_sanction(&self, actor: PlayerId, target: PlayerId) -> Result<()> {
        let mover = self.check_guards(actor, ActionKind::Sanction)?;
        let victim = self.check_target(actor, target)?;

        self.check_funds(mover, victim.role().sanction_price(self.config()))?;
        if victim.is_sanctioned() {
            return Err(TargetViolation::AlreadySanctioned.into());
        }
        Ok(())
    }

    /// Block another player's economic actions until their turn ends.
    /// Costs 3, or 4 against a Judge; a Baron is compensated 1.
    pub fn sanction(&mut self, actor: PlayerId, target: PlayerId) -> Result<ActionOutcome> {
        self.check_sanction(actor, target)?;

        let role = self.roster[target].role();
        let price = role.sanction_price(self.config());
        let compensation = role.traits().sanction_compensation;

        self.roster[actor].debit(price);
        let victim = &mut self.roster[target];
        victim.credit(compensation);
        victim.set_sanctioned(true);
        debug!(
            "{} sanctions {} for {}",
            self.roster[actor].name(),
            self.roster[target].name(),
            price
        );

        self.conclude(
            actor,
            Action::Sanction(target),
            SmallVec::new(),
            TurnEnd::Pass {
                clears_sanction: true,
            },
        )
    }

    // === Coup ===

    pub(crate) fn check_coup(&self, actor: PlayerId, target: PlayerId) -> Result<()> {
        let mover = self.check_guards(actor, ActionKind::Coup)?;
        self.check_target(actor, target)?;
        self.check_funds(mover, self.config().coup_cost)
    }

    /// Eliminate another player for 7 coins.
    pub fn coup(&mut self, actor: PlayerId, target: PlayerId) -> Result<ActionOutcome> {
        self.check_coup(actor, target)?;

        let cost = self.config().coup_cost;
        self.roster[actor].debit(cost);
        self.roster[target].set_active(false);
        self.active_count -= 1;
        info!(
            "{} couped {}, {} players remain",
            self.roster[actor].name(),
            self.roster[target].name(),
            self.active_count
        );

        let outcome = self.conclude(
            actor,
            Action::Coup(target),
            smallvec![SideEffect::PlayerEliminated(target)],
            TurnEnd::Pass {
                clears_sanction: true,
            },
        )?;
        if let Ok(winner) = self.winner_name() {
            info!("{} wins", winner);
        }
        Ok(outcome)
    }
}
