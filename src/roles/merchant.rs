//! Merchant: earns a coin at the end of any turn finished with 3 or more,
//! and pays 2 to the bank when arrested.

use super::{ArrestPenalty, Role, RoleTraits, TurnEndBonus};

pub static TRAITS: RoleTraits = RoleTraits {
    when_arrested: ArrestPenalty::ToBank { target_loses: 2 },
    turn_end_bonus: Some(TurnEndBonus {
        min_coins: 3,
        amount: 1,
    }),
    ..RoleTraits::plain(Role::Merchant)
};

#[cfg(test)]
mod tests {
    use crate::core::error::{CoupError, TargetViolation};
    use crate::core::player::PlayerId;
    use crate::core::state::GameSession;

    const MERCHANT: PlayerId = PlayerId::new(0);
    const OTHER: PlayerId = PlayerId::new(1);

    fn session() -> GameSession {
        let mut session = GameSession::new();
        session.add_player("Merchant", "Merchant").unwrap();
        session.add_player("Other", "Spy").unwrap();
        session.start_game().unwrap();
        session
    }

    #[test]
    fn test_bonus_counts_balance_after_action() {
        for (start, end) in [(1, 2), (2, 4), (3, 5), (4, 6)] {
            let mut session = session();
            session.set_coins(MERCHANT, start).unwrap();

            session.gather(MERCHANT).unwrap();

            assert_eq!(session.player(MERCHANT).unwrap().coins(), end, "from {start}");
        }
    }

    #[test]
    fn test_arrested_merchant_pays_bank() {
        let mut session = session();
        session.gather(MERCHANT).unwrap();
        session.set_coins(MERCHANT, 3).unwrap();
        session.set_coins(OTHER, 1).unwrap();

        session.arrest(OTHER, MERCHANT).unwrap();

        assert_eq!(session.player(MERCHANT).unwrap().coins(), 1);
        assert_eq!(session.player(OTHER).unwrap().coins(), 1);
    }

    #[test]
    fn test_merchant_with_one_coin_cannot_be_arrested() {
        let mut session = session();
        session.gather(MERCHANT).unwrap();
        session.set_coins(MERCHANT, 1).unwrap();

        assert_eq!(
            session.arrest(OTHER, MERCHANT).unwrap_err(),
            CoupError::InvalidTarget(TargetViolation::NoCoins)
        );
        assert!(!session.player(MERCHANT).unwrap().was_last_arrested());
    }
}
