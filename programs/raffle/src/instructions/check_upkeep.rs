use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::Raffle;
use crate::upkeep::UpkeepStatus;

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Side-effect free eligibility check for the crank.
pub fn process_check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
    let clock = Clock::get()?;
    let balance = pool_balance(&ctx.accounts.raffle.to_account_info(), &Rent::get()?);
    let status = ctx.accounts.raffle.upkeep_status(clock.unix_timestamp, balance);

    msg!(
        "Upkeep needed: {} (missing conditions {:#06b})",
        status.upkeep_needed,
        status.missing()
    );

    Ok(status)
}

/// Lamports held by the raffle above its rent-exempt reserve.
pub(crate) fn pool_balance(raffle: &AccountInfo, rent: &Rent) -> u64 {
    raffle
        .lamports()
        .saturating_sub(rent.minimum_balance(raffle.data_len()))
}
