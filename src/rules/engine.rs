//! Generic action dispatch.
//!
//! Callers that hold actions as values (menus, scripted games, random
//! playouts) go through `RulesEngine` instead of the per-action methods:
//! - `validate` answers "would this succeed?" without touching state
//! - `apply` performs it
//! - `legal_actions` enumerates everything `validate` accepts
//! - `is_terminal` reports the result once the game is decided

use crate::core::action::{Action, ActionKind, ActionOutcome};
use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::core::state::GameSession;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The last active player.
    Winner(PlayerId),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate` must agree with `apply`: `apply` fails exactly when
///   `validate` does, with the same error
/// - `apply` must be deterministic
/// - `is_terminal`: return None while the game continues
pub trait RulesEngine {
    /// Check an action without performing it.
    fn validate(&self, actor: PlayerId, action: &Action) -> Result<()>;

    /// Perform an action.
    fn apply(&mut self, actor: PlayerId, action: Action) -> Result<ActionOutcome>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    /// Every action worth trying for `actor`, legal or not.
    fn candidate_actions(&self, actor: PlayerId) -> Vec<Action>;

    // === Convenience Methods ===

    /// Enumerate all legal actions for a player.
    ///
    /// Default implementation filters `candidate_actions` through
    /// `validate`.
    fn legal_actions(&self, actor: PlayerId) -> Vec<Action> {
        self.candidate_actions(actor)
            .into_iter()
            .filter(|action| self.validate(actor, action).is_ok())
            .collect()
    }
}

impl RulesEngine for GameSession {
    fn validate(&self, actor: PlayerId, action: &Action) -> Result<()> {
        match *action {
            Action::Gather => self.check_gather(actor),
            Action::Tax => self.check_tax(actor),
            Action::Bribe => self.check_bribe(actor),
            Action::Invest => self.check_invest(actor),
            Action::Arrest(target) => self.check_arrest(actor, target),
            Action::Sanction(target) => self.check_sanction(actor, target),
            Action::Coup(target) => self.check_coup(actor, target),
            Action::SpyOn(target) => self.check_spy_on(actor, target),
            Action::Cancel(target) => self.check_cancel(actor, target),
        }
    }

    fn apply(&mut self, actor: PlayerId, action: Action) -> Result<ActionOutcome> {
        match action {
            Action::Gather => self.gather(actor),
            Action::Tax => self.tax(actor),
            Action::Bribe => self.bribe(actor),
            Action::Invest => self.invest(actor),
            Action::Arrest(target) => self.arrest(actor, target),
            Action::Sanction(target) => self.sanction(actor, target),
            Action::Coup(target) => self.coup(actor, target),
            Action::SpyOn(target) => self.spy_on(actor, target),
            Action::Cancel(target) => self.cancel(actor, target),
        }
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result()
    }

    fn candidate_actions(&self, actor: PlayerId) -> Vec<Action> {
        let Ok(account) = self.player(actor) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        for kind in account.role().available_actions() {
            if kind.is_targeted() {
                actions.extend(
                    self.roster
                        .player_ids()
                        .filter(|&seat| seat != actor)
                        .filter_map(|seat| Action::from_parts(kind, Some(seat))),
                );
            } else if let Some(action) = Action::from_parts(kind, None) {
                actions.push(action);
            }
        }
        actions
    }
}

impl GameSession {
    /// Kinds `actor` could perform right now, in menu order.
    #[must_use]
    pub fn legal_kinds(&self, actor: PlayerId) -> Vec<ActionKind> {
        let mut kinds: Vec<ActionKind> = Vec::new();
        for action in self.legal_actions(actor) {
            if !kinds.contains(&action.kind()) {
                kinds.push(action.kind());
            }
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(roles: &[&str]) -> GameSession {
        let mut session = GameSession::new();
        for (i, role) in roles.iter().enumerate() {
            session.add_player(&format!("P{i}"), role).unwrap();
        }
        session.start_game().unwrap();
        session
    }

    const A: PlayerId = PlayerId::new(0);
    const B: PlayerId = PlayerId::new(1);
    const C: PlayerId = PlayerId::new(2);

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
    }

    #[test]
    fn test_opening_moves_with_no_coins() {
        let session = started(&["Spy", "Baron", "Judge"]);

        let actions = session.legal_actions(A);

        assert_eq!(
            actions,
            vec![Action::Gather, Action::Tax, Action::SpyOn(B), Action::SpyOn(C)]
        );
        assert!(session.legal_actions(B).is_empty());
    }

    #[test]
    fn test_must_coup_leaves_only_coups() {
        let mut session = started(&["Baron", "Spy", "Judge"]);
        session.set_coins(A, 10).unwrap();

        assert_eq!(session.legal_actions(A), vec![Action::Coup(B), Action::Coup(C)]);
        assert_eq!(session.legal_kinds(A), vec![ActionKind::Coup]);
    }

    #[test]
    fn test_apply_matches_validate() {
        let mut session = started(&["Baron", "Spy"]);
        session.set_coins(A, 2).unwrap();

        let invest = Action::Invest;
        let expected = session.validate(A, &invest).unwrap_err();
        assert_eq!(session.apply(A, invest).unwrap_err(), expected);

        let outcome = session.apply(A, Action::Tax).unwrap();
        assert_eq!(outcome.record.action, Action::Tax);
        assert_eq!(session.player(A).unwrap().coins(), 4);
    }

    #[test]
    fn test_cancel_appears_for_canceller() {
        let mut session = started(&["Spy", "Governor"]);
        session.tax(A).unwrap();

        let actions = session.legal_actions(B);
        assert!(actions.contains(&Action::Cancel(A)));
        assert!(actions.contains(&Action::Gather));
    }

    #[test]
    fn test_is_terminal() {
        let mut session = started(&["Spy", "Judge"]);
        assert_eq!(session.is_terminal(), None);

        session.set_coins(A, 7).unwrap();
        session.apply(A, Action::Coup(B)).unwrap();

        assert_eq!(session.is_terminal(), Some(GameResult::Winner(A)));
        assert!(session.legal_actions(A).is_empty());
    }
}
