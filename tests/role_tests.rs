//! Role tests: special actions, passive modifiers, cancels.

use coup_engine::core::{
    ActionKind, CancelViolation, CoupError, ErrorKind, GameSession, PlayerId, SideEffect,
    StateViolation,
};
use coup_engine::roles::Role;

const A: PlayerId = PlayerId::new(0);
const B: PlayerId = PlayerId::new(1);
const C: PlayerId = PlayerId::new(2);

fn started(roles: &[&str]) -> GameSession {
    let mut session = GameSession::new();
    for (i, role) in roles.iter().enumerate() {
        session.add_player(&format!("P{i}"), role).unwrap();
    }
    session.start_game().unwrap();
    session
}

fn coins(session: &GameSession, player: PlayerId) -> u32 {
    session.player(player).unwrap().coins()
}

// === Scenarios ===

#[test]
fn test_governor_cancels_spy_tax() {
    let mut session = started(&["Governor", "Spy"]);
    session.gather(A).unwrap();

    session.tax(B).unwrap();
    assert_eq!(coins(&session, B), 2);

    session.cancel(A, B).unwrap();
    assert_eq!(coins(&session, B), 0);
}

#[test]
fn test_coup_in_three_player_game() {
    let mut session = started(&["Spy", "Baron", "Judge"]);
    session.set_coins(A, 7).unwrap();

    session.coup(A, C).unwrap();

    assert!(!session.player(C).unwrap().is_active());
    assert_eq!(coins(&session, A), 0);
    assert_eq!(session.active_count(), 2);
    assert_eq!(session.current_id(), B);
}

#[test]
fn test_baron_invests_three() {
    let mut session = started(&["Baron", "Spy"]);
    session.set_coins(A, 3).unwrap();

    let outcome = session.invest(A).unwrap();

    assert_eq!(coins(&session, A), 6);
    assert!(outcome.turn_advanced);
    assert_eq!(session.current_id(), B);
}

#[test]
fn test_sanctioning_judge() {
    let mut session = started(&["Spy", "Judge"]);
    session.set_coins(A, 3).unwrap();

    assert_eq!(session.sanction(A, B).unwrap_err().kind(), ErrorKind::InsufficientFunds);

    session.set_coins(A, 4).unwrap();
    session.sanction(A, B).unwrap();
    assert_eq!(coins(&session, A), 0);
    assert!(session.player(B).unwrap().is_sanctioned());
}

#[test]
fn test_merchant_bonus_at_turn_end() {
    let mut session = started(&["Merchant", "Spy", "Judge"]);
    session.set_coins(A, 3).unwrap();
    session.set_coins(B, 1).unwrap();

    let outcome = session.arrest(A, B).unwrap();

    assert_eq!(outcome.merchant_bonus(), Some(1));
    assert_eq!(coins(&session, A), 5);
    assert_eq!(
        outcome.effects.last(),
        Some(&SideEffect::TurnPassed { from: A, to: B })
    );
}

#[test]
fn test_merchant_bonus_after_gather_from_two() {
    let mut session = started(&["Merchant", "Spy"]);
    session.set_coins(A, 2).unwrap();

    session.gather(A).unwrap();

    assert_eq!(coins(&session, A), 4);
}

#[test]
fn test_merchant_keeps_turn_without_bonus_during_bribe() {
    let mut session = started(&["Merchant", "Spy"]);
    session.set_coins(A, 7).unwrap();

    session.bribe(A).unwrap();
    let outcome = session.gather(A).unwrap();
    assert_eq!(outcome.merchant_bonus(), None);
    assert_eq!(coins(&session, A), 4);

    let outcome = session.gather(A).unwrap();
    assert_eq!(outcome.merchant_bonus(), Some(1));
    assert_eq!(coins(&session, A), 6);
}

// === Round trips ===

#[test]
fn test_general_cancel_restores_pre_coup_state() {
    let mut session = started(&["Spy", "Baron", "General"]);
    session.set_coins(A, 7).unwrap();
    session.set_coins(C, 6).unwrap();
    let active_before = session.active_count();

    session.coup(A, B).unwrap();
    session.cancel(C, B).unwrap();

    assert_eq!(session.active_count(), active_before);
    assert!(session.player(B).unwrap().is_active());
    assert_eq!(coins(&session, C), 1);
    assert_eq!(session.active_player_names(), vec!["P0", "P1", "P2"]);
}

#[test]
fn test_couped_general_cannot_revive_self() {
    let mut session = started(&["Spy", "General"]);
    session.set_coins(A, 7).unwrap();
    session.set_coins(B, 5).unwrap();
    session.coup(A, B).unwrap();

    assert_eq!(
        session.cancel(B, B).unwrap_err(),
        CoupError::IllegalState(StateViolation::Inactive)
    );
    assert!(session.result().unwrap().is_winner(A));
}

#[test]
fn test_governor_cancel_restores_exact_balance() {
    for (role, refund) in [("Governor", 3), ("Spy", 2), ("Baron", 2)] {
        let mut session = started(&["Judge", role, "Governor"]);
        session.gather(A).unwrap();
        session.set_coins(B, 1).unwrap();

        session.tax(B).unwrap();
        assert_eq!(coins(&session, B), 1 + refund, "{role}");

        session.cancel(C, B).unwrap();
        assert_eq!(coins(&session, B), 1, "{role}");
    }
}

#[test]
fn test_judge_cancel_ends_bribe_turn() {
    let mut session = started(&["Spy", "Baron", "Judge"]);
    session.set_coins(A, 4).unwrap();
    session.bribe(A).unwrap();

    let outcome = session.cancel(C, A).unwrap();

    assert!(outcome.turn_advanced);
    assert_eq!(outcome.effects[0], SideEffect::BribeRevoked(A));
    assert_eq!(session.current_id(), B);
    assert!(!session.player(A).unwrap().is_bribed());
    assert_eq!(coins(&session, A), 0);

    session.gather(B).unwrap();
    assert_eq!(session.current_id(), C);
}

#[test]
fn test_only_matching_role_cancels() {
    let mut session = started(&["Spy", "Governor", "General", "Judge"]);
    session.set_coins(C, 5).unwrap();
    session.tax(A).unwrap();

    for (canceller, expected) in [(C, ActionKind::Coup), (PlayerId::new(3), ActionKind::Bribe)] {
        assert_eq!(
            session.cancel(canceller, A).unwrap_err(),
            CoupError::InvalidCancellation(CancelViolation::WrongAction {
                expected,
                found: Some(ActionKind::Tax),
            })
        );
    }
    assert_eq!(session.cancellation_candidates(), vec![(B, A)]);
}

#[test]
fn test_spy_reveal_side_effect() {
    let mut session = started(&["Spy", "Merchant"]);
    session.set_coins(B, 6).unwrap();

    let outcome = session.spy_on(A, B).unwrap();

    assert_eq!(
        outcome.effects[0],
        SideEffect::CoinsRevealed { player: B, coins: 6 }
    );
}

#[test]
fn test_role_names_round_trip() {
    for role in Role::ALL {
        let mut session = GameSession::new();
        let id = session.add_player_with_role("P", role).unwrap();
        assert_eq!(session.player(id).unwrap().role(), role);
        assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
    }
}
