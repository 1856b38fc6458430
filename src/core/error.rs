//! Error taxonomy.
//!
//! Every failure is an expected, recoverable outcome that the caller shows
//! to the user. No operation mutates anything before it fails.
//!
//! `CoupError` carries the kind and a detail enum saying which check
//! failed; `CoupError::kind` collapses it to the kind alone.

use thiserror::Error;

use super::action::ActionKind;
use super::player::PlayerId;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, CoupError>;

/// Failure of a session or action operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoupError {
    #[error("roster error: {0}")]
    Roster(#[from] RosterViolation),

    #[error("illegal state: {0}")]
    IllegalState(#[from] StateViolation),

    #[error("{player} has {have} coins but needs {need}")]
    InsufficientFunds {
        player: String,
        have: u32,
        need: u32,
    },

    #[error("invalid target: {0}")]
    InvalidTarget(#[from] TargetViolation),

    #[error("invalid cancellation: {0}")]
    InvalidCancellation(#[from] CancelViolation),

    #[error("game is not over: {active} players remain")]
    GameNotOver { active: usize },

    #[error("unknown role `{0}`")]
    UnknownRole(String),

    #[error("no player in {0}")]
    UnknownPlayer(PlayerId),
}

/// Error kind without detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Roster,
    IllegalState,
    InsufficientFunds,
    InvalidTarget,
    InvalidCancellation,
    GameNotOver,
    InvalidArgument,
}

impl CoupError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoupError::Roster(_) => ErrorKind::Roster,
            CoupError::IllegalState(_) => ErrorKind::IllegalState,
            CoupError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            CoupError::InvalidTarget(_) => ErrorKind::InvalidTarget,
            CoupError::InvalidCancellation(_) => ErrorKind::InvalidCancellation,
            CoupError::GameNotOver { .. } => ErrorKind::GameNotOver,
            CoupError::UnknownRole(_) | CoupError::UnknownPlayer(_) => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn insufficient(player: &str, have: u32, need: u32) -> Self {
        CoupError::InsufficientFunds {
            player: player.to_string(),
            have,
            need,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RosterViolation {
    #[error("cannot add players after the game has started")]
    AlreadyStarted,
    #[error("roster is full ({max} players)")]
    Full { max: usize },
    #[error("a player named `{0}` already exists")]
    DuplicateName(String),
    #[error("cannot start with {count} players")]
    IllegalPlayerCount { count: usize },
    #[error("only {active} active players, cannot continue")]
    NotEnoughActive { active: usize },
    #[error("no players in the game")]
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StateViolation {
    #[error("game has not started")]
    NotStarted,
    #[error("game is already decided")]
    GameOver,
    #[error("player is not active")]
    Inactive,
    #[error("player is sanctioned")]
    Sanctioned,
    #[error("not this player's turn")]
    OutOfTurn,
    #[error("player must coup")]
    MustCoup,
    #[error("player cannot arrest this turn")]
    ArrestBlocked,
    #[error("role cannot perform {0}")]
    NotInRole(ActionKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TargetViolation {
    #[error("cannot target yourself")]
    SelfTarget,
    #[error("target is not active")]
    Inactive,
    #[error("target has no coins to lose")]
    NoCoins,
    #[error("target was arrested by the previous arrest")]
    AlreadyArrested,
    #[error("target is already sanctioned")]
    AlreadySanctioned,
    #[error("target already cannot arrest")]
    AlreadyCannotArrest,
    #[error("target is not the subject of the last action")]
    NotCancellable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CancelViolation {
    #[error("role has no cancel ability")]
    NoAbility,
    #[error("can only cancel {expected}, last action was {found:?}")]
    WrongAction {
        expected: ActionKind,
        found: Option<ActionKind>,
    },
    #[error("cannot undo your own action")]
    OwnAction,
}

/// A `RulesConfig` outside the bounds a game can run with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("player range {min}..={max} must lie within 2..=6")]
    PlayerRange { min: usize, max: usize },
    #[error("must-coup threshold {threshold} is below the coup cost {coup_cost}")]
    MustCoupBelowCoupCost { threshold: u32, coup_cost: u32 },
}
