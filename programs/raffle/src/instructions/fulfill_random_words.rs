use anchor_lang::prelude::*;

use crate::constants::{RAFFLE_SEED, SWITCHBOARD_PROGRAM_ID};
use crate::error::RaffleError;
use crate::events::WinnerPicked;
use crate::settlement::{random_word, Payout};
use crate::state::Raffle;
use crate::switchboard::{committed_request, revealed_value};

/// Accounts required to settle a round once its randomness is revealed.
///
/// Ensures:
/// 1. The randomness account is the one bound when the round closed, still
///    holding the same commitment.
/// 2. The randomness has been revealed.
/// 3. The winner account is the drawn player.
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// The account delivering the fulfillment.
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Randomness account from Switchboard.
    /// CHECK: Owner checked here, matched against the pending request in the handler.
    #[account(owner = SWITCHBOARD_PROGRAM_ID @ RaffleError::InvalidRandomnessAccount)]
    pub randomness_account_data: UncheckedAccount<'info>,

    /// Receives the pot.
    /// CHECK: Matched against the drawn player in the handler.
    #[account(mut)]
    pub recent_winner: UncheckedAccount<'info>,
}

/// Pays the pot out of the raffle PDA by moving lamports directly.
struct LamportPayout<'info> {
    vault: AccountInfo<'info>,
    winner: AccountInfo<'info>,
}

impl Payout for LamportPayout<'_> {
    fn pay(&mut self, winner: Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(winner, self.winner.key(), RaffleError::WinnerAccountMismatch);

        let mut vault_lamports = self.vault.try_borrow_mut_lamports()?;
        let mut winner_lamports = self.winner.try_borrow_mut_lamports()?;

        **vault_lamports = vault_lamports
            .checked_sub(amount)
            .ok_or(RaffleError::PayoutFailed)?;
        **winner_lamports = winner_lamports
            .checked_add(amount)
            .ok_or(RaffleError::PayoutFailed)?;

        Ok(())
    }
}

/// Settles the pending round with the revealed randomness.
///
/// Steps:
/// 1. Reject anything but the pending request.
/// 2. Read the revealed value and draw the winner.
/// 3. Pay the pot, then reopen the round.
///
/// A failed payout aborts the instruction and the round stays `Calculating`.
pub fn process_fulfill_random_words(ctx: Context<FulfillRandomWords>) -> Result<()> {
    let clock = Clock::get()?;
    let randomness_account = ctx.accounts.randomness_account_data.to_account_info();

    let request = committed_request(&randomness_account)?;
    ctx.accounts.raffle.check_request(request).map_err(|e| {
        msg!(
            "Fulfillment for {} (seed slot {}) is not pending",
            request.request_id,
            request.seed_slot
        );
        e
    })?;

    let random_value = random_word(&revealed_value(&randomness_account, &clock)?);

    msg!("Randomness result: {}", random_value);
    msg!("Players: {}", ctx.accounts.raffle.players.len());

    let drawn = ctx.accounts.raffle.draw(request, random_value).map_err(|e| {
        msg!("Settlement refused: {}", e);
        e
    })?;
    require_keys_eq!(
        ctx.accounts.recent_winner.key(),
        drawn.winner,
        RaffleError::WinnerAccountMismatch
    );

    let mut payout = LamportPayout {
        vault: ctx.accounts.raffle.to_account_info(),
        winner: ctx.accounts.recent_winner.to_account_info(),
    };
    let receipt = ctx
        .accounts
        .raffle
        .settle(request, random_value, clock.unix_timestamp, &mut payout)?;

    msg!(
        "Winner: {} (entry {}), paid {} lamports",
        receipt.winner,
        receipt.winner_index,
        receipt.payout
    );

    emit!(WinnerPicked {
        request_id: receipt.request_id,
        winner: receipt.winner,
        winner_index: receipt.winner_index,
        payout: receipt.payout,
        reopened_at: clock.unix_timestamp,
    });

    Ok(())
}
