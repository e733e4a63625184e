use anchor_lang::prelude::*;

use crate::state::{Raffle, RaffleState};

/// Bits of `UpkeepStatus::conditions`, one per satisfied condition.
pub mod conditions {
    pub const OPEN: u8 = 1 << 0;
    pub const INTERVAL_ELAPSED: u8 = 1 << 1;
    pub const HAS_PLAYERS: u8 = 1 << 2;
    pub const HAS_BALANCE: u8 = 1 << 3;

    pub const ALL: u8 = OPEN | INTERVAL_ELAPSED | HAS_PLAYERS | HAS_BALANCE;
}

/// Answer to the crank's "may this round close?".
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub conditions: u8,
}

impl UpkeepStatus {
    /// Conditions that are still blocking the close.
    pub fn missing(&self) -> u8 {
        conditions::ALL & !self.conditions
    }
}

/// Evaluates every close condition independently.
///
/// `balance` is what the raffle account holds above its rent-exempt reserve.
/// It is checked on its own rather than derived from the player count so a
/// ledger that drifted from the real lamports never closes.
pub fn check_upkeep(raffle: &Raffle, now: i64, balance: u64) -> UpkeepStatus {
    let mut met = 0u8;

    if raffle.state == RaffleState::Open {
        met |= conditions::OPEN;
    }
    if interval_elapsed(raffle.last_timestamp, raffle.interval, now) {
        met |= conditions::INTERVAL_ELAPSED;
    }
    if !raffle.players.is_empty() {
        met |= conditions::HAS_PLAYERS;
    }
    if balance > 0 {
        met |= conditions::HAS_BALANCE;
    }

    UpkeepStatus {
        upkeep_needed: met == conditions::ALL,
        conditions: met,
    }
}

/// A clock behind `since` never counts as elapsed.
fn interval_elapsed(since: i64, interval: u64, now: i64) -> bool {
    now.checked_sub(since)
        .and_then(|elapsed| u64::try_from(elapsed).ok())
        .map_or(false, |elapsed| elapsed >= interval)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEE: u64 = 100;
    const INTERVAL: u64 = 30;
    const START: i64 = 1_000;

    fn raffle_with_players(count: usize) -> Raffle {
        let mut raffle = Raffle::new(255, FEE, INTERVAL, START).unwrap();
        for _ in 0..count {
            raffle.admit(Pubkey::new_unique(), FEE).unwrap();
        }
        raffle
    }

    #[test]
    fn test_upkeep_needed_when_all_conditions_hold() {
        let raffle = raffle_with_players(1);
        let status = check_upkeep(&raffle, START + INTERVAL as i64 + 1, FEE);

        assert!(status.upkeep_needed);
        assert_eq!(status.conditions, conditions::ALL);
        assert_eq!(status.missing(), 0);
    }

    #[test]
    fn test_exact_interval_is_enough() {
        let raffle = raffle_with_players(1);
        let status = check_upkeep(&raffle, START + INTERVAL as i64, FEE);
        assert!(status.upkeep_needed);
    }

    #[test]
    fn test_no_players_never_needs_upkeep() {
        let raffle = raffle_with_players(0);

        for elapsed in [0, INTERVAL as i64, 10 * INTERVAL as i64, i64::MAX - START] {
            let status = check_upkeep(&raffle, START + elapsed, 0);
            assert!(!status.upkeep_needed);
            assert_ne!(status.missing() & conditions::HAS_PLAYERS, 0);
        }
    }

    #[test]
    fn test_interval_not_elapsed() {
        let raffle = raffle_with_players(3);
        let status = check_upkeep(&raffle, START + INTERVAL as i64 - 1, 3 * FEE);

        assert!(!status.upkeep_needed);
        assert_eq!(status.missing(), conditions::INTERVAL_ELAPSED);
    }

    #[test]
    fn test_clock_behind_round_start() {
        let raffle = raffle_with_players(1);
        let status = check_upkeep(&raffle, START - 1, FEE);

        assert!(!status.upkeep_needed);
        assert_eq!(status.missing(), conditions::INTERVAL_ELAPSED);
    }

    #[test]
    fn test_calculating_round_is_not_eligible() {
        let mut raffle = raffle_with_players(1);
        raffle.state = RaffleState::Calculating;

        let status = check_upkeep(&raffle, START + INTERVAL as i64 + 1, FEE);
        assert!(!status.upkeep_needed);
        assert_eq!(status.missing(), conditions::OPEN);
    }

    #[test]
    fn test_empty_balance_blocks_even_with_players() {
        let raffle = raffle_with_players(2);
        let status = check_upkeep(&raffle, START + INTERVAL as i64 + 1, 0);

        assert!(!status.upkeep_needed);
        assert_eq!(status.missing(), conditions::HAS_BALANCE);
    }

    #[test]
    fn test_zero_interval_closes_immediately() {
        let mut raffle = Raffle::new(255, FEE, 0, START).unwrap();
        raffle.admit(Pubkey::new_unique(), FEE).unwrap();

        assert!(check_upkeep(&raffle, START, FEE).upkeep_needed);
    }

    #[test]
    fn test_repeated_checks_agree_and_change_nothing() {
        let raffle = raffle_with_players(2);
        let before = raffle.clone();
        let now = START + INTERVAL as i64 + 5;

        let first = check_upkeep(&raffle, now, 2 * FEE);
        for _ in 0..10 {
            assert_eq!(check_upkeep(&raffle, now, 2 * FEE), first);
        }
        assert_eq!(raffle, before);
    }
}
