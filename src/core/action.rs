//! Action representation: kind + optional target.
//!
//! Every move in the game is an `Action`: a verb, plus the seat it is aimed
//! at for targeted verbs. For example:
//! - "Gather" = kind only
//! - "Arrest Bob" = kind + 1 target
//! - "Cancel Bob's tax" = Cancel + the taxing player as target
//!
//! `ActionKind` is what the session remembers as the last completed action.
//! It gates cancellation and bribe chaining.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// The verb of an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Gather,
    Tax,
    Bribe,
    Arrest,
    Sanction,
    Coup,
    /// Baron only.
    Invest,
    /// Spy only.
    SpyOn,
    /// Governor, General and Judge.
    Cancel,
}

impl ActionKind {
    /// Kinds every role can perform, in menu order.
    pub const BASE: [ActionKind; 6] = [
        ActionKind::Gather,
        ActionKind::Tax,
        ActionKind::Bribe,
        ActionKind::Arrest,
        ActionKind::Coup,
        ActionKind::Sanction,
    ];

    /// Does this kind take a target seat?
    #[must_use]
    pub const fn is_targeted(self) -> bool {
        matches!(
            self,
            ActionKind::Arrest
                | ActionKind::Sanction
                | ActionKind::Coup
                | ActionKind::SpyOn
                | ActionKind::Cancel
        )
    }

    /// Kinds a sanctioned player may not perform: the economic actions,
    /// plus spying.
    #[must_use]
    pub const fn blocked_by_sanction(self) -> bool {
        matches!(
            self,
            ActionKind::Gather | ActionKind::Tax | ActionKind::Invest | ActionKind::SpyOn
        )
    }

    /// Kinds still allowed to a player at or above the must-coup threshold.
    #[must_use]
    pub const fn allowed_when_must_coup(self) -> bool {
        matches!(self, ActionKind::Coup | ActionKind::Cancel)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::Gather => "gather",
            ActionKind::Tax => "tax",
            ActionKind::Bribe => "bribe",
            ActionKind::Arrest => "arrest",
            ActionKind::Sanction => "sanction",
            ActionKind::Coup => "coup",
            ActionKind::Invest => "invest",
            ActionKind::SpyOn => "spy on",
            ActionKind::Cancel => "cancel",
        };
        f.write_str(name)
    }
}

/// A complete action as a value: what callers pass to `GameSession::apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Gather,
    Tax,
    Bribe,
    Invest,
    Arrest(PlayerId),
    Sanction(PlayerId),
    Coup(PlayerId),
    SpyOn(PlayerId),
    Cancel(PlayerId),
}

impl Action {
    /// Build an action from its kind and target.
    ///
    /// Returns `None` when a targeted kind has no target, or an untargeted
    /// kind is given one.
    #[must_use]
    pub fn from_parts(kind: ActionKind, target: Option<PlayerId>) -> Option<Self> {
        let action = match (kind, target) {
            (ActionKind::Gather, None) => Action::Gather,
            (ActionKind::Tax, None) => Action::Tax,
            (ActionKind::Bribe, None) => Action::Bribe,
            (ActionKind::Invest, None) => Action::Invest,
            (ActionKind::Arrest, Some(t)) => Action::Arrest(t),
            (ActionKind::Sanction, Some(t)) => Action::Sanction(t),
            (ActionKind::Coup, Some(t)) => Action::Coup(t),
            (ActionKind::SpyOn, Some(t)) => Action::SpyOn(t),
            (ActionKind::Cancel, Some(t)) => Action::Cancel(t),
            _ => return None,
        };
        Some(action)
    }

    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            Action::Gather => ActionKind::Gather,
            Action::Tax => ActionKind::Tax,
            Action::Bribe => ActionKind::Bribe,
            Action::Invest => ActionKind::Invest,
            Action::Arrest(_) => ActionKind::Arrest,
            Action::Sanction(_) => ActionKind::Sanction,
            Action::Coup(_) => ActionKind::Coup,
            Action::SpyOn(_) => ActionKind::SpyOn,
            Action::Cancel(_) => ActionKind::Cancel,
        }
    }

    #[must_use]
    pub const fn target(self) -> Option<PlayerId> {
        match self {
            Action::Gather | Action::Tax | Action::Bribe | Action::Invest => None,
            Action::Arrest(t)
            | Action::Sanction(t)
            | Action::Coup(t)
            | Action::SpyOn(t)
            | Action::Cancel(t) => Some(t),
        }
    }
}

/// A completed action with metadata for history tracking.
///
/// The session keeps the most recent one as its last-action memory and
/// appends every one to its history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub actor: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(actor: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            actor,
            action,
            turn,
            sequence,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        self.action.kind()
    }

    #[must_use]
    pub fn target(&self) -> Option<PlayerId> {
        self.action.target()
    }
}

/// Something a caller may want to show after an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideEffect {
    /// A Spy looked at a player's purse.
    CoinsRevealed { player: PlayerId, coins: u32 },
    /// A Merchant ended their turn holding enough coins for the bonus.
    MerchantBonus { player: PlayerId, amount: u32 },
    /// The turn passed from one seat to another.
    TurnPassed { from: PlayerId, to: PlayerId },
    PlayerEliminated(PlayerId),
    PlayerRestored(PlayerId),
    /// A bribe's extra action was revoked.
    BribeRevoked(PlayerId),
    /// Coins taken back by a cancelled tax.
    TaxRefunded { player: PlayerId, amount: u32 },
}

/// Result of a successful action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    /// What was recorded as the session's last action.
    pub record: ActionRecord,

    /// Whether the turn moved to another player.
    pub turn_advanced: bool,

    /// Observable effects, in the order they happened.
    /// Most actions produce at most two.
    pub effects: SmallVec<[SideEffect; 2]>,
}

impl ActionOutcome {
    /// Coins revealed by a spy action, if any.
    #[must_use]
    pub fn revealed_coins(&self) -> Option<u32> {
        self.effects.iter().find_map(|e| match e {
            SideEffect::CoinsRevealed { coins, .. } => Some(*coins),
            _ => None,
        })
    }

    /// Merchant bonus granted while passing the turn, if any.
    #[must_use]
    pub fn merchant_bonus(&self) -> Option<u32> {
        self.effects.iter().find_map(|e| match e {
            SideEffect::MerchantBonus { amount, .. } => Some(*amount),
            _ => None,
        })
    }
}
