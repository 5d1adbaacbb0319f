use anchor_lang::prelude::*;

use crate::state::VestingSchedule;
use crate::utils::release;

pub fn process_get_claimable(ctx: Context<GetClaimable>, id: u64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let schedule = VestingSchedule::load(&ctx.accounts.schedule.to_account_info(), id)?;

    let vested = release::vested_amount(&schedule, now)?;
    let claimable = release::claimable_amount(&schedule, now)?;

    emit!(ClaimableQuote {
        id,
        beneficiary: schedule.beneficiary,
        vested,
        released: schedule.amount_released,
        claimable,
        timestamp: now,
    });

    Ok(claimable)
}

#[derive(Accounts)]
pub struct GetClaimable<'info> {
    /// CHECK: verified against the schedule PDA for `id` in-handler.
    pub schedule: UncheckedAccount<'info>,
}

#[event]
pub struct ClaimableQuote {
    pub id: u64,
    pub beneficiary: Pubkey,
    pub vested: u64,
    pub released: u64,
    pub claimable: u64,
    pub timestamp: i64,
}
