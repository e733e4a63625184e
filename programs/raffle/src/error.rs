use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    // Entry
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Payment is below the entrance fee")]
    InsufficientPayment,
    #[msg("Payment exceeds the entrance fee")]
    ExcessPayment,
    #[msg("Raffle is not open for entries")]
    RoundNotOpen,
    #[msg("Raffle has reached its maximum number of entries")]
    RaffleFull,

    // Upkeep
    #[msg("Upkeep not needed")]
    UpkeepNotNeeded,

    // Randomness
    #[msg("Randomness account could not be parsed")]
    InvalidRandomnessAccount,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness not resolved")]
    RandomnessNotResolved,
    #[msg("Fulfillment does not match the pending request")]
    UnknownRequest,

    // Settlement
    #[msg("Winner account does not match the drawn player")]
    WinnerAccountMismatch,
    #[msg("Transfer to the winner failed")]
    PayoutFailed,
    #[msg("Round ledger is inconsistent")]
    InvariantViolation,

    // Reads
    #[msg("Player index out of range")]
    PlayerIndexOutOfRange,

    #[msg("Math overflow")]
    MathOverflow,
}
