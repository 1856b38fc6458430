//! # coup-engine
//!
//! Rules engine for a six-role variant of Coup: 2 to 6 players, one role
//! each, trading coins through a small set of actions until one remains.
//!
//! ## Design Principles
//!
//! 1. **Explicit Session**: All game state lives in a `GameSession` value the
//!    caller owns. `reset()` returns it to the empty state.
//!
//! 2. **Check, Then Mutate**: Every action validates on `&self` before it
//!    changes anything. A failed action leaves the session untouched and
//!    does not consume the turn.
//!
//! 3. **Closed Role Table**: Roles are an enum with one `RoleTraits` row
//!    each. Shared actions read the *target's* row for passive modifiers.
//!
//! ## Architecture
//!
//! - **Cancellation Window**: After any action, the caller offers other
//!   players the chance to cancel it. The session enforces what may be
//!   cancelled; the caller decides who tries. See `rules::cancel`.
//!
//! - **Persistent History**: Completed actions go into an `im::Vector`, so
//!   cloning a session to look ahead is cheap.
//!
//! ## Modules
//!
//! - `core`: Seats, accounts, actions, configuration, errors, the session
//! - `rules`: Guards, base actions, turn scheduler, cancellation, dispatch
//! - `roles`: Role table and role-specific actions

pub mod core;
pub mod roles;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Roster, PlayerAccount,
    Action, ActionKind, ActionOutcome, ActionRecord, SideEffect,
    RulesConfig,
    CancelViolation, ConfigViolation, CoupError, ErrorKind, Result, RosterViolation, StateViolation,
    TargetViolation,
    GameSession,
};

pub use crate::roles::{ArrestPenalty, Role, RoleTraits, TurnEndBonus};

pub use crate::rules::{GameResult, RulesEngine, TurnChange};
