use anchor_lang::prelude::*;

use crate::constants::RANDOM_WORD_BYTES;
use crate::error::RaffleError;
use crate::state::{PendingRequest, Raffle, RaffleState};

/// Moves the pot to the winner. An `Err` means no funds moved.
pub trait Payout {
    fn pay(&mut self, winner: Pubkey, amount: u64) -> Result<()>;
}

/// Winner of a round and the amount owed to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementReceipt {
    pub request_id: Pubkey,
    pub winner: Pubkey,
    pub winner_index: u64,
    pub payout: u64,
}

/// Folds the first bytes of a revealed value into one random word.
pub fn random_word(revealed: &[u8; 32]) -> u64 {
    let mut word = [0u8; RANDOM_WORD_BYTES];
    word.copy_from_slice(&revealed[..RANDOM_WORD_BYTES]);
    u64::from_le_bytes(word)
}

/// Index of the winning entry. Always below `entries` when `entries > 0`.
pub fn winner_index(random_value: u64, entries: u64) -> Result<u64> {
    random_value
        .checked_rem(entries)
        .ok_or_else(|| error!(RaffleError::InvariantViolation))
}

impl Raffle {
    /// Fails with `UnknownRequest` unless `request` is the pending request of
    /// a calculating round, address and commitment slot both.
    pub fn check_request(&self, request: PendingRequest) -> Result<()> {
        let pending = match (self.state, self.pending_request) {
            (RaffleState::Calculating, Some(pending)) => pending,
            _ => return err!(RaffleError::UnknownRequest),
        };
        require_keys_eq!(pending.request_id, request.request_id, RaffleError::UnknownRequest);
        require_eq!(pending.seed_slot, request.seed_slot, RaffleError::UnknownRequest);
        Ok(())
    }

    /// Validates a fulfillment against the pending round and picks the
    /// winning entry without touching any state.
    pub fn draw(&self, request: PendingRequest, random_value: u64) -> Result<SettlementReceipt> {
        self.check_request(request)?;

        // A closed round always had players and a matching pot.
        require!(!self.players.is_empty(), RaffleError::InvariantViolation);
        require!(self.is_reconciled(), RaffleError::InvariantViolation);

        let winner_index = winner_index(random_value, self.players.len() as u64)?;

        Ok(SettlementReceipt {
            request_id: request.request_id,
            winner: self.player(winner_index)?,
            winner_index,
            payout: self.pot,
        })
    }

    /// Picks the winner of the pending round, pays the pot and reopens.
    ///
    /// Fulfillments for any request other than the pending one fail with
    /// `UnknownRequest`. If the payout fails the round stays `Calculating`
    /// with its players, pot and pending request intact.
    pub fn settle<P: Payout>(
        &mut self,
        request: PendingRequest,
        random_value: u64,
        now: i64,
        payout: &mut P,
    ) -> Result<SettlementReceipt> {
        let receipt = self.draw(request, random_value)?;

        payout
            .pay(receipt.winner, receipt.payout)
            .map_err(|_| error!(RaffleError::PayoutFailed))?;

        self.recent_winner = Some(receipt.winner);
        self.clear();
        self.last_timestamp = now;
        self.pending_request = None;
        self.state = RaffleState::Open;

        Ok(receipt)
    }
}
