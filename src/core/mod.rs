//! Core engine types: seats, accounts, actions, configuration, errors and
//! the session that owns them.

pub mod player;
pub mod account;
pub mod action;
pub mod config;
pub mod error;
pub mod state;

pub use player::{PlayerId, Roster};
pub use account::PlayerAccount;
pub use action::{Action, ActionKind, ActionOutcome, ActionRecord, SideEffect};
pub use config::{RulesConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{
    CancelViolation, ConfigViolation, CoupError, ErrorKind, Result, RosterViolation, StateViolation,
    TargetViolation,
};
pub use state::GameSession;
