//! Rules: the guard sequence, base actions, the turn scheduler, the
//! cancellation window and generic dispatch.
//!
//! Everything here is implemented as methods on `GameSession`. Role-specific
//! actions live next to their role in `roles`.

pub mod guards;
pub mod actions;
pub mod scheduler;
pub mod cancel;
pub mod engine;

pub use engine::{GameResult, RulesEngine};
pub use scheduler::TurnChange;
