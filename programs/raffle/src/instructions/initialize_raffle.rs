use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::events::RaffleInitialized;
use crate::state::Raffle;

/// Accounts required to create the raffle.
/// The raffle PDA holds both the round state and the pot.
#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    /// The account paying for account creation.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    pub system_program: Program<'info, System>,
}

/// Creates the raffle and opens its first round.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeRaffle accounts
/// * `entrance_fee` - Exact lamports required per entry, must be positive
/// * `interval` - Seconds a round stays open before it may be closed
pub fn process_initialize_raffle(
    ctx: Context<InitializeRaffle>,
    entrance_fee: u64,
    interval: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = Raffle::new(ctx.bumps.raffle, entrance_fee, interval, clock.unix_timestamp)?;
    ctx.accounts.raffle.set_inner(raffle);

    msg!("Raffle opened: fee {} lamports, interval {}s", entrance_fee, interval);

    emit!(RaffleInitialized {
        entrance_fee,
        interval,
        opened_at: clock.unix_timestamp,
    });

    Ok(())
}
