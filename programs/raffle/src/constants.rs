use anchor_lang::prelude::*;

/// Seed of the raffle PDA. The same account holds the round state and the pot.
#[constant]
pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Upper bound on entries per round. Must match the `max_len` on `Raffle::players`.
pub const MAX_PLAYERS: usize = 100;

/// Bytes of the revealed randomness folded into the winning draw.
pub const RANDOM_WORD_BYTES: usize = 8;

/// Owner of every genuine Switchboard On-Demand randomness account.
#[cfg(not(feature = "devnet"))]
pub const SWITCHBOARD_PROGRAM_ID: Pubkey = pubkey!("SBondMDrcV3K4kxZR1HNVT7osZxAHVHgYXL5Ze1oMUv");

/// Owner of every genuine Switchboard On-Demand randomness account.
#[cfg(feature = "devnet")]
pub const SWITCHBOARD_PROGRAM_ID: Pubkey = pubkey!("Aio4gaXjXzJNVLtzwtNVmSqGKpANtXhybbkhtAC94ji2");
