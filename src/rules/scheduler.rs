//! Turn scheduler.
//!
//! `advance_turn` ends the current player's turn:
//! 1. refuse if fewer than two players are active (read the winner instead)
//! 2. consume the outgoing player's bribe
//! 3. pay a turn-end bonus (Merchant) against the balance the player holds
//!    *after* their action
//! 4. move the pointer to the next active seat, wrapping
//!
//! Resetting the outgoing player's arrest and sanction flags belongs to the
//! action that ended the turn, not to the scheduler.

use log::info;

use crate::core::error::{Result, RosterViolation};
use crate::core::player::PlayerId;
use crate::core::state::GameSession;

/// What happened when the turn passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnChange {
    pub from: PlayerId,
    pub to: PlayerId,
    /// Coins granted to `from` by a turn-end bonus.
    pub bonus: Option<u32>,
}

impl GameSession {
    /// Pass the turn to the next active player.
    pub fn advance_turn(&mut self) -> Result<TurnChange> {
        if self.active_count < 2 {
            return Err(RosterViolation::NotEnoughActive {
                active: self.active_count,
            }
            .into());
        }
        debug_assert_eq!(self.active_count, self.count_active());

        let from = self.current;
        let to = self
            .roster
            .seats_after(from)
            .find(|&seat| self.roster[seat].is_active() && seat != from)
            .ok_or(RosterViolation::NotEnoughActive {
                active: self.active_count,
            })?;

        let outgoing = &mut self.roster[from];
        outgoing.set_bribed(false);

        let bonus = outgoing.role().turn_end_bonus(outgoing.coins());
        if let Some(amount) = bonus {
            outgoing.credit(amount);
            info!("{} received {} extra coin as {}", outgoing.name(), amount, outgoing.role());
        }

        self.current = to;
        self.turn_number += 1;
        self.action_sequence = 0;

        info!("It's {}'s turn.", self.roster[to].name());
        Ok(TurnChange { from, to, bonus })
    }
}
