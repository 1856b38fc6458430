//! The game session: roster, turn pointer and last-action memory.
//!
//! ## GameSession
//!
//! One value per game, created by the embedding application and passed by
//! reference to every operation. It owns:
//! - The roster (seating order = registration order)
//! - The turn pointer and the started flag
//! - The count of active players
//! - The last completed action, which gates cancellation and bribe chaining
//! - The full action history
//!
//! Lifecycle operations and introspection live here. Actions are in
//! `rules::actions` and `roles`; the turn scheduler is in `rules::scheduler`.
//!
//! ## Cloning
//!
//! The history is an `im::Vector`, so cloning a session to look ahead
//! shares it instead of copying it.

use im::Vector;
use log::{debug, info};
use rustc_hash::FxHashMap;

use super::account::PlayerAccount;
use super::action::{ActionKind, ActionRecord};
use super::config::RulesConfig;
use super::error::{CoupError, Result, RosterViolation};
use super::player::{PlayerId, Roster};
use crate::roles::Role;
use crate::rules::GameResult;

/// A single game of Coup.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: RulesConfig,

    pub(crate) roster: Roster,

    /// Name lookup; also enforces unique names.
    names: FxHashMap<String, PlayerId>,

    /// Whose turn it is.
    pub(crate) current: PlayerId,

    started: bool,

    pub(crate) active_count: usize,

    /// Most recent successful action.
    pub(crate) last_action: Option<ActionRecord>,

    /// Turn number (starts at 1).
    pub(crate) turn_number: u32,

    /// Action sequence within the turn.
    pub(crate) action_sequence: u32,

    history: Vector<ActionRecord>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_config(RulesConfig::default())
    }
}

impl GameSession {
    /// Create an empty session with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with custom rules.
    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            config,
            roster: Roster::new(),
            names: FxHashMap::default(),
            current: PlayerId::new(0),
            started: false,
            active_count: 0,
            last_action: None,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Return to the empty, not-started state. The rules are kept.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.names.clear();
        self.current = PlayerId::new(0);
        self.started = false;
        self.active_count = 0;
        self.last_action = None;
        self.turn_number = 1;
        self.action_sequence = 0;
        self.history = Vector::new();
        debug!("session reset");
    }

    // === Roster ===

    /// Register a player under a role name ("Governor", "Spy", "Baron",
    /// "General", "Judge", "Merchant").
    ///
    /// Only legal before the game starts. Names must be unique.
    pub fn add_player(&mut self, name: &str, role_name: &str) -> Result<PlayerId> {
        if self.started {
            return Err(RosterViolation::AlreadyStarted.into());
        }
        let max = self.config.max_seats();
        if self.roster.len() >= max {
            return Err(RosterViolation::Full { max }.into());
        }
        if self.names.contains_key(name) {
            return Err(RosterViolation::DuplicateName(name.to_string()).into());
        }

        let account = crate::roles::create_account(name, role_name, self.config.starting_coins)?;
        let role = account.role();
        let id = self.roster.push(account).ok_or(RosterViolation::Full { max })?;
        self.names.insert(name.to_string(), id);
        self.active_count += 1;

        debug!("{} joins as {} in {}", name, role, id);
        Ok(id)
    }

    /// Register a player with an already-parsed role.
    pub fn add_player_with_role(&mut self, name: &str, role: Role) -> Result<PlayerId> {
        self.add_player(name, role.name())
    }

    /// Start the game. The first registered player moves first.
    pub fn start_game(&mut self) -> Result<()> {
        if !self.config.allows_player_count(self.active_count) {
            return Err(RosterViolation::IllegalPlayerCount {
                count: self.active_count,
            }
            .into());
        }
        self.started = true;
        info!("game started with {} players", self.active_count);
        if let Ok(announcement) = self.turn_announcement() {
            info!("{}", announcement);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of seats, eliminated players included.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Look up an account.
    pub fn player(&self, player: PlayerId) -> Result<&PlayerAccount> {
        self.roster.get(player).ok_or(CoupError::UnknownPlayer(player))
    }

    pub(crate) fn player_mut(&mut self, player: PlayerId) -> Result<&mut PlayerAccount> {
        self.roster
            .get_mut(player)
            .ok_or(CoupError::UnknownPlayer(player))
    }

    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<PlayerId> {
        self.names.get(name).copied()
    }

    /// Overwrite a player's balance, for table setup and tests.
    pub fn set_coins(&mut self, player: PlayerId, coins: u32) -> Result<()> {
        self.player_mut(player)?.set_coins(coins);
        Ok(())
    }

    // === Turn introspection ===

    /// The player whose turn it is.
    pub fn current_player(&self) -> Result<&PlayerAccount> {
        self.roster
            .get(self.current)
            .ok_or(CoupError::Roster(RosterViolation::Empty))
    }

    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        self.current
    }

    /// Seat index of the current player.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current.index()
    }

    /// "It's <name>'s turn."
    pub fn turn_announcement(&self) -> Result<String> {
        let player = self.current_player()?;
        Ok(format!("It's {}'s turn.", player.name()))
    }

    /// Names of active players in seating order.
    #[must_use]
    pub fn active_player_names(&self) -> Vec<&str> {
        self.roster
            .iter()
            .filter(|(_, p)| p.is_active())
            .map(|(_, p)| p.name())
            .collect()
    }

    /// Seats of active players in seating order.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.roster
            .iter()
            .filter(|(_, p)| p.is_active())
            .map(|(id, _)| id)
            .collect()
    }

    /// Name of the last active player. Fails while more than one remains.
    pub fn winner_name(&self) -> Result<&str> {
        let mut active = self.roster.iter().filter(|(_, p)| p.is_active());
        match (active.next(), active.next()) {
            (Some((_, winner)), None) => Ok(winner.name()),
            _ => Err(CoupError::GameNotOver {
                active: self.active_count,
            }),
        }
    }

    /// `Some` once the game is decided.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.started || self.active_count != 1 {
            return None;
        }
        self.roster
            .iter()
            .find(|(_, p)| p.is_active())
            .map(|(id, _)| GameResult::Winner(id))
    }

    // === Last action ===

    #[must_use]
    pub fn last_action(&self) -> Option<&ActionRecord> {
        self.last_action.as_ref()
    }

    #[must_use]
    pub fn last_action_kind(&self) -> Option<ActionKind> {
        self.last_action.map(|r| r.kind())
    }

    /// A bribe was the last action, so the next action keeps the turn.
    #[must_use]
    pub fn extra_action_pending(&self) -> bool {
        self.last_action_kind() == Some(ActionKind::Bribe)
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every successful action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Store a completed action as the last action and in the history.
    pub(crate) fn record(&mut self, record: ActionRecord) {
        self.last_action = Some(record);
        self.history.push_back(record);
    }

    /// Number the next action within the current turn.
    pub(crate) fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }

    /// Recount active players. The maintained count must always agree.
    pub(crate) fn count_active(&self) -> usize {
        self.roster.iter().filter(|(_, p)| p.is_active()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    fn two_player() -> GameSession {
        let mut session = GameSession::new();
        session.add_player("Alice", "Governor").unwrap();
        session.add_player("Bob", "Spy").unwrap();
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = GameSession::new();

        assert_eq!(session.player_count(), 0);
        assert_eq!(session.active_count(), 0);
        assert!(!session.is_started());
        assert!(session.last_action().is_none());
        assert!(session.active_player_names().is_empty());
    }

    #[test]
    fn test_add_player_assigns_seats() {
        let session = two_player();

        assert_eq!(session.player_by_name("Alice"), Some(PlayerId::new(0)));
        assert_eq!(session.player_by_name("Bob"), Some(PlayerId::new(1)));
        assert_eq!(session.player_by_name("Carol"), None);
        assert_eq!(session.player(PlayerId::new(1)).unwrap().role(), Role::Spy);
        assert_eq!(session.active_count(), 2);
    }

    #[test]
    fn test_add_player_unknown_role() {
        let mut session = GameSession::new();
        let err = session.add_player("Alice", "King").unwrap_err();
        assert_eq!(err, CoupError::UnknownRole("King".into()));
        assert_eq!(session.player_count(), 0);
    }

    #[test]
    fn test_start_requires_two_players() {
        let mut session = GameSession::new();
        session.add_player("Alice", "Judge").unwrap();

        let err = session.start_game().unwrap_err();
        assert_eq!(
            err,
            CoupError::Roster(RosterViolation::IllegalPlayerCount { count: 1 })
        );
        assert!(!session.is_started());
    }

    #[test]
    fn test_turn_announcement() {
        let session = two_player();
        assert_eq!(session.turn_announcement().unwrap(), "It's Alice's turn.");

        let empty = GameSession::new();
        assert_eq!(empty.turn_announcement().unwrap_err().kind(), ErrorKind::Roster);
    }

    #[test]
    fn test_winner_requires_single_active() {
        let mut session = two_player();
        session.start_game().unwrap();

        assert_eq!(
            session.winner_name().unwrap_err(),
            CoupError::GameNotOver { active: 2 }
        );
        assert!(session.result().is_none());
    }

    #[test]
    fn test_reset_keeps_config() {
        let mut session = GameSession::with_config(RulesConfig::new().with_starting_coins(3));
        session.add_player("Alice", "Baron").unwrap();
        session.add_player("Bob", "Merchant").unwrap();
        session.start_game().unwrap();

        session.reset();

        assert_eq!(session.player_count(), 0);
        assert!(!session.is_started());
        assert_eq!(session.current_id(), PlayerId::new(0));
        assert_eq!(session.config().starting_coins, 3);

        let id = session.add_player("Alice", "Baron").unwrap();
        assert_eq!(session.player(id).unwrap().coins(), 3);
    }

    #[test]
    fn test_roster_capped_even_if_field_raised() {
        let mut config = RulesConfig::new();
        config.max_players = 300;
        let mut session = GameSession::with_config(config);
        for i in 0..6 {
            session.add_player(&format!("P{i}"), "Spy").unwrap();
        }

        assert_eq!(
            session.add_player("P6", "Spy").unwrap_err(),
            CoupError::Roster(RosterViolation::Full { max: 6 })
        );
        assert_eq!(session.player_count(), 6);
        assert_eq!(session.player_by_name("P5"), Some(PlayerId::new(5)));
        assert_eq!(session.player_by_name("P6"), None);
    }

    #[test]
    fn test_set_coins_unknown_player() {
        let mut session = two_player();
        assert_eq!(
            session.set_coins(PlayerId::new(5), 3).unwrap_err(),
            CoupError::UnknownPlayer(PlayerId::new(5))
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut session = two_player();
        let snapshot = session.clone();

        session.set_coins(PlayerId::new(0), 9).unwrap();

        assert_eq!(snapshot.player(PlayerId::new(0)).unwrap().coins(), 0);
    }
}
