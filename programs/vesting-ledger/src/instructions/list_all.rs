use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::error::VestingError;
use crate::state::{Ledger, ReleaseFrequency, ReleaseType, ScheduleStatus, VestingSchedule};

/// Emit a snapshot of every schedule, in id order.
///
/// The caller passes all `schedule_count` schedule accounts as remaining
/// accounts, ordered by id. Cost is linear in the number of schedules and is
/// not paginated.
pub fn process_list_all(ctx: Context<ListAll>) -> Result<u64> {
    let count = ctx.accounts.ledger.schedule_count;
    require!(
        ctx.remaining_accounts.len() as u64 == count,
        VestingError::IncompleteListing
    );

    for (id, info) in (0..count).zip(ctx.remaining_accounts.iter()) {
        let s = VestingSchedule::load(info, id)?;
        emit!(ScheduleSnapshot {
            id: s.id,
            creator: s.creator,
            token: s.token,
            beneficiary: s.beneficiary,
            total_amount: s.total_amount,
            start_time: s.start_time,
            end_time: s.end_time,
            release_type: s.release_type,
            release_frequency: s.release_frequency,
            amount_released: s.amount_released,
            status: s.status,
        });
    }

    Ok(count)
}

#[derive(Accounts)]
pub struct ListAll<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
}

#[event]
pub struct ScheduleSnapshot {
    pub id: u64,
    pub creator: Pubkey,
    pub token: Pubkey,
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub release_type: ReleaseType,
    pub release_frequency: ReleaseFrequency,
    pub amount_released: u64,
    pub status: ScheduleStatus,
}
