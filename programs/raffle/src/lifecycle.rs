use anchor_lang::prelude::*;

use crate::error::RaffleError;
use crate::state::{PendingRequest, Raffle, RaffleState};
use crate::upkeep::{check_upkeep, UpkeepStatus};

/// Request side of the randomness oracle.
///
/// `request` acknowledges one randomness request and returns what identifies
/// it. The revealed value comes back later through `fulfill_random_words`,
/// never through this trait.
pub trait RandomnessOracle {
    fn request(&mut self) -> Result<PendingRequest>;
}

impl Raffle {
    /// Closes the current round and binds it to a single oracle request.
    ///
    /// Eligibility is re-evaluated here, so a crank acting on a stale
    /// `check_upkeep` answer gets `UpkeepNotNeeded` and nothing changes.
    /// The state is written only after the oracle accepted the request.
    pub fn close_round<O: RandomnessOracle>(
        &mut self,
        oracle: &mut O,
        now: i64,
        balance: u64,
    ) -> Result<PendingRequest> {
        let status = check_upkeep(self, now, balance);
        require!(status.upkeep_needed, RaffleError::UpkeepNotNeeded);

        // Open rounds never carry a request.
        require!(self.pending_request.is_none(), RaffleError::InvariantViolation);

        let request = oracle.request()?;

        self.state = RaffleState::Calculating;
        self.pending_request = Some(request);

        Ok(request)
    }

    pub fn upkeep_status(&self, now: i64, balance: u64) -> UpkeepStatus {
        check_upkeep(self, now, balance)
    }
}
