use anchor_lang::prelude::*;

use crate::constants::MAX_PLAYERS;
use crate::error::RaffleError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RaffleState {
    /// Accepting entries.
    Open,
    /// Entries closed, waiting for the oracle to reveal randomness.
    Calculating,
}

/// The single in-flight randomness request of a closed round.
///
/// A randomness account can be committed again under the same address, so
/// the request is the pair of address and seed slot. Nothing cancels or
/// expires it. If the oracle never reveals, the round
/// stays `Calculating` until an operator intervenes outside this program.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct PendingRequest {
    /// Address of the randomness account committed when the round closed.
    pub request_id: Pubkey,
    /// Slot of the commitment the round was bound to.
    pub seed_slot: u64,
}

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Raffle {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Current position in the round lifecycle.
    pub state: RaffleState,

    /// The exact amount (in lamports) required for one entry.
    /// Fixed at initialization.
    pub entrance_fee: u64,

    /// Minimum number of seconds a round stays open before it may be closed.
    pub interval: u64,

    /// The UNIX timestamp at which the current round opened.
    pub last_timestamp: i64,

    /// Entries of the current round, in entry order.
    /// A player entering twice holds two slots.
    /// The `max_len` is `MAX_PLAYERS`, which `admit` enforces.
    #[max_len(100)]
    pub players: Vec<Pubkey>,

    /// Lamports collected from entries of the current round.
    /// Always `entrance_fee * players.len()`.
    pub pot: u64,

    /// Set while `state == Calculating`, empty otherwise.
    pub pending_request: Option<PendingRequest>,

    /// Winner of the last settled round.
    pub recent_winner: Option<Pubkey>,
}

/// Read-only view of the round ledger.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub players: u64,
    pub pot: u64,
}

/// Everything a client can read about the raffle in one call.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleInfo {
    pub state: RaffleState,
    pub entrance_fee: u64,
    pub interval: u64,
    pub last_timestamp: i64,
    pub recent_winner: Option<Pubkey>,
    pub players: u64,
    pub pot: u64,
}

impl Raffle {
    /// A fresh raffle with its first round open at `now`.
    pub fn new(bump: u8, entrance_fee: u64, interval: u64, now: i64) -> Result<Self> {
        require!(entrance_fee > 0, RaffleError::InvalidEntranceFee);

        Ok(Self {
            bump,
            state: RaffleState::Open,
            entrance_fee,
            interval,
            last_timestamp: now,
            players: Vec::new(),
            pot: 0,
            pending_request: None,
            recent_winner: None,
        })
    }

    /// Admits one entry for `player` paying `paid` lamports.
    /// Every check runs before the ledger is touched. Returns the new entry count.
    pub fn admit(&mut self, player: Pubkey, paid: u64) -> Result<u64> {
        require!(self.state == RaffleState::Open, RaffleError::RoundNotOpen);
        require!(paid >= self.entrance_fee, RaffleError::InsufficientPayment);
        require!(paid <= self.entrance_fee, RaffleError::ExcessPayment);
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        let pot = self.pot.checked_add(paid).ok_or(RaffleError::MathOverflow)?;

        self.players.push(player);
        self.pot = pot;

        Ok(self.players.len() as u64)
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            players: self.players.len() as u64,
            pot: self.pot,
        }
    }

    /// Empties the ledger. Only settlement calls this, after the payout went through.
    pub(crate) fn clear(&mut self) {
        self.players.clear();
        self.pot = 0;
    }

    /// True when the pot equals `entrance_fee * players.len()`.
    pub fn is_reconciled(&self) -> bool {
        (self.players.len() as u64).checked_mul(self.entrance_fee) == Some(self.pot)
    }

    pub fn player(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.players.get(i))
            .copied()
            .ok_or_else(|| error!(RaffleError::PlayerIndexOutOfRange))
    }

    pub fn info(&self) -> RaffleInfo {
        let LedgerSnapshot { players, pot } = self.snapshot();
        RaffleInfo {
            state: self.state,
            entrance_fee: self.entrance_fee,
            interval: self.interval,
            last_timestamp: self.last_timestamp,
            recent_winner: self.recent_winner,
            players,
            pot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEE: u64 = 100;

    fn open_raffle() -> Raffle {
        Raffle::new(255, FEE, 30, 1_000).unwrap()
    }

    #[test]
    fn test_new_raffle_is_open_and_empty() {
        let raffle = open_raffle();

        assert_eq!(raffle.state, RaffleState::Open);
        assert_eq!(raffle.last_timestamp, 1_000);
        assert_eq!(raffle.snapshot(), LedgerSnapshot { players: 0, pot: 0 });
        assert!(raffle.pending_request.is_none());
        assert!(raffle.recent_winner.is_none());
    }

    #[test]
    fn test_new_rejects_zero_fee() {
        let result = Raffle::new(255, 0, 30, 1_000);
        assert_eq!(result.err(), Some(RaffleError::InvalidEntranceFee.into()));
    }

    #[test]
    fn test_pot_tracks_entries() {
        let mut raffle = open_raffle();

        for expected in 1..=5u64 {
            let entries = raffle.admit(Pubkey::new_unique(), FEE).unwrap();
            assert_eq!(entries, expected);
            assert_eq!(raffle.pot, FEE * expected);
            assert!(raffle.is_reconciled());
        }
    }

    #[test]
    fn test_wrong_payment_leaves_ledger_untouched() {
        let mut raffle = open_raffle();
        raffle.admit(Pubkey::new_unique(), FEE).unwrap();

        let low = raffle.admit(Pubkey::new_unique(), FEE - 1);
        assert_eq!(low.err(), Some(RaffleError::InsufficientPayment.into()));

        let high = raffle.admit(Pubkey::new_unique(), FEE + 1);
        assert_eq!(high.err(), Some(RaffleError::ExcessPayment.into()));

        let nothing = raffle.admit(Pubkey::new_unique(), 0);
        assert_eq!(nothing.err(), Some(RaffleError::InsufficientPayment.into()));

        assert_eq!(raffle.snapshot(), LedgerSnapshot { players: 1, pot: FEE });
    }

    #[test]
    fn test_entry_rejected_while_calculating() {
        let mut raffle = open_raffle();
        raffle.state = RaffleState::Calculating;

        let result = raffle.admit(Pubkey::new_unique(), FEE);
        assert_eq!(result.err(), Some(RaffleError::RoundNotOpen.into()));
        assert!(raffle.players.is_empty());
        assert_eq!(raffle.pot, 0);
    }

    #[test]
    fn test_same_player_holds_one_slot_per_entry() {
        let mut raffle = open_raffle();
        let player = Pubkey::new_unique();

        raffle.admit(player, FEE).unwrap();
        raffle.admit(player, FEE).unwrap();

        assert_eq!(raffle.players, vec![player, player]);
        assert_eq!(raffle.pot, 2 * FEE);
    }

    #[test]
    fn test_full_raffle_rejects_entry() {
        let mut raffle = open_raffle();
        for _ in 0..MAX_PLAYERS {
            raffle.admit(Pubkey::new_unique(), FEE).unwrap();
        }

        let result = raffle.admit(Pubkey::new_unique(), FEE);
        assert_eq!(result.err(), Some(RaffleError::RaffleFull.into()));
        assert_eq!(raffle.players.len(), MAX_PLAYERS);
        assert!(raffle.is_reconciled());
    }

    #[test]
    fn test_player_lookup() {
        let mut raffle = open_raffle();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        raffle.admit(first, FEE).unwrap();
        raffle.admit(second, FEE).unwrap();

        assert_eq!(raffle.player(0).unwrap(), first);
        assert_eq!(raffle.player(1).unwrap(), second);
        assert_eq!(
            raffle.player(2).err(),
            Some(RaffleError::PlayerIndexOutOfRange.into())
        );
    }

    #[test]
    fn test_account_space_fits_max_players() {
        assert!(Raffle::INIT_SPACE >= 4 + 32 * MAX_PLAYERS);
    }

    #[test]
    fn test_clear_resets_ledger() {
        let mut raffle = open_raffle();
        raffle.admit(Pubkey::new_unique(), FEE).unwrap();

        raffle.clear();

        assert_eq!(raffle.snapshot(), LedgerSnapshot { players: 0, pot: 0 });
        assert!(raffle.is_reconciled());
    }
}
