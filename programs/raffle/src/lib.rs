#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
pub use instructions::*;

/// PDA seeds and raffle limits.
pub mod constants;

/// Errors returned by the program.
pub mod error;

/// Events emitted at each step of a round.
pub mod events;

/// Instruction handlers: entry, upkeep, fulfillment and reads.
pub mod instructions;

/// Closing a round and binding it to a randomness request.
pub mod lifecycle;

/// Winner selection, payout and reopening.
pub mod settlement;

/// The `Raffle` account and its round ledger.
pub mod state;

/// Switchboard On-Demand randomness accounts as the raffle's oracle.
pub mod switchboard;

/// The close-eligibility predicate polled by the crank.
pub mod upkeep;

use state::RaffleInfo;
use upkeep::UpkeepStatus;

declare_id!("5m4wpBi7tS2UbnTHVE5LUSLU2XXwcB2Ztf3PwY4pGW9B");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize_raffle(
        ctx: Context<InitializeRaffle>,
        entrance_fee: u64,
        interval: u64,
    ) -> Result<()> {
        process_initialize_raffle(ctx, entrance_fee, interval)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        process_enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
        process_check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<Pubkey> {
        process_perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(ctx: Context<FulfillRandomWords>) -> Result<()> {
        process_fulfill_random_words(ctx)
    }

    pub fn get_raffle_info(ctx: Context<ReadRaffle>) -> Result<RaffleInfo> {
        process_get_raffle_info(ctx)
    }

    pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
        process_get_player(ctx, index)
    }
}
