use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::{Raffle, RaffleInfo};

#[derive(Accounts)]
pub struct ReadRaffle<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

pub fn process_get_raffle_info(ctx: Context<ReadRaffle>) -> Result<RaffleInfo> {
    Ok(ctx.accounts.raffle.info())
}

pub fn process_get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player(index)
}
