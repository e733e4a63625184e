use anchor_lang::prelude::*;

#[event]
pub struct RaffleInitialized {
    pub entrance_fee: u64,
    pub interval: u64,
    pub opened_at: i64,
}

#[event]
pub struct RaffleEnter {
    pub player: Pubkey,
    pub entries: u64,
    pub pot: u64,
}

#[event]
pub struct RequestedRaffleWinner {
    pub request_id: Pubkey,
    pub entries: u64,
    pub pot: u64,
}

#[event]
pub struct WinnerPicked {
    pub request_id: Pubkey,
    pub winner: Pubkey,
    pub winner_index: u64,
    pub payout: u64,
    pub reopened_at: i64,
}
