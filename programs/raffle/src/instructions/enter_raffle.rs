use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::RAFFLE_SEED;
use crate::events::RaffleEnter;
use crate::state::Raffle;

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The entrant, paying the entrance fee.
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round.
///
/// `amount` must equal the entrance fee exactly. The ledger checks run
/// before any lamports move; a failed transfer aborts the whole instruction.
pub fn process_enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    let entries = ctx.accounts.raffle.admit(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Entry #{} by {}", entries, player);

    emit!(RaffleEnter {
        player,
        entries,
        pot: ctx.accounts.raffle.pot,
    });

    Ok(())
}
