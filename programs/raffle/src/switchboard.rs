use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::SWITCHBOARD_PROGRAM_ID;
use crate::error::RaffleError;
use crate::lifecycle::RandomnessOracle;
use crate::state::PendingRequest;

/// Rejects accounts not owned by the Switchboard On-Demand program.
/// `RandomnessAccountData::parse` only looks at the bytes.
fn check_owner(account: &AccountInfo) -> Result<()> {
    require_keys_eq!(
        *account.owner,
        SWITCHBOARD_PROGRAM_ID,
        RaffleError::InvalidRandomnessAccount
    );
    Ok(())
}

/// The commitment a randomness account holds right now.
pub fn committed_request(account: &AccountInfo) -> Result<PendingRequest> {
    check_owner(account)?;
    let randomness_data = RandomnessAccountData::parse(account.data.borrow())
        .map_err(|_| RaffleError::InvalidRandomnessAccount)?;

    Ok(PendingRequest {
        request_id: *account.key,
        seed_slot: randomness_data.seed_slot,
    })
}

/// The revealed 32-byte value, once the oracle has published it.
pub fn revealed_value(account: &AccountInfo, clock: &Clock) -> Result<[u8; 32]> {
    check_owner(account)?;
    let randomness_data = RandomnessAccountData::parse(account.data.borrow())
        .map_err(|_| RaffleError::InvalidRandomnessAccount)?;

    randomness_data
        .get_value(clock)
        .map_err(|_| error!(RaffleError::RandomnessNotResolved))
}

/// A Switchboard randomness commitment seen as an oracle request.
///
/// Only a commitment made in the previous slot counts. Its value is not yet
/// known to anyone, the crank included.
pub struct SwitchboardCommit<'a, 'info> {
    pub account: &'a AccountInfo<'info>,
    pub clock: &'a Clock,
}

impl RandomnessOracle for SwitchboardCommit<'_, '_> {
    fn request(&mut self) -> Result<PendingRequest> {
        let request = committed_request(self.account)?;

        if request.seed_slot != self.clock.slot.saturating_sub(1) {
            msg!("Seed slot: {}", request.seed_slot);
            msg!("Current slot: {}", self.clock.slot);
            return err!(RaffleError::RandomnessAlreadyRevealed);
        }

        Ok(request)
    }
}
