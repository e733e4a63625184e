use anchor_lang::prelude::*;

use super::check_upkeep::pool_balance;
use crate::constants::{RAFFLE_SEED, SWITCHBOARD_PROGRAM_ID};
use crate::error::RaffleError;
use crate::events::RequestedRaffleWinner;
use crate::state::Raffle;
use crate::switchboard::SwitchboardCommit;

/// Accounts required to close the round and bind it to a randomness request.
///
/// Any crank may call this. The randomness account must have been committed
/// in the previous slot, which makes its address a fresh request id.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The crank submitting the transaction.
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Randomness account from Switchboard.
    /// CHECK: Owner checked here, commitment parsed in the handler.
    #[account(owner = SWITCHBOARD_PROGRAM_ID @ RaffleError::InvalidRandomnessAccount)]
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Closes the round and returns the id of the randomness request it is now
/// bound to.
pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<Pubkey> {
    let clock = Clock::get()?;
    let balance = pool_balance(&ctx.accounts.raffle.to_account_info(), &Rent::get()?);

    let randomness_account = ctx.accounts.randomness_account_data.to_account_info();
    let mut oracle = SwitchboardCommit {
        account: &randomness_account,
        clock: &clock,
    };
    let raffle = &mut ctx.accounts.raffle;

    let status = raffle.upkeep_status(clock.unix_timestamp, balance);
    if !status.upkeep_needed {
        msg!(
            "Upkeep not needed: balance {}, players {}, state {:?}, missing {:#06b}",
            balance,
            raffle.players.len(),
            raffle.state,
            status.missing()
        );
    }

    let request = raffle.close_round(&mut oracle, clock.unix_timestamp, balance)?;
    let snapshot = raffle.snapshot();

    msg!(
        "Requested randomness: {} (seed slot {})",
        request.request_id,
        request.seed_slot
    );

    emit!(RequestedRaffleWinner {
        request_id: request.request_id,
        entries: snapshot.players,
        pot: snapshot.pot,
    });

    Ok(request.request_id)
}
